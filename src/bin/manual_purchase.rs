//! Manual Purchase Tool
//!
//! Run with: cargo run --bin manual_purchase -- --account 5 --ticket ADULT:15 --ticket INFANT:0
//!
//! Without `--ticket` arguments it books two ADULT x15 lines and one
//! INFANT x0 line, which adds up to more tickets than a purchase allows.
//! `--account` defaults to 5 when absent; a value that is not a whole
//! number is rejected.

use ticket_service::logging::init_tracing;
use ticket_service::services::{LoggingPaymentGateway, LoggingSeatReservation};
use ticket_service::{Config, PurchaseValidator, TicketService, TicketTypeRequest};

const DEFAULT_ACCOUNT_ID: i64 = 5;
const DEFAULT_TICKETS: [&str; 3] = ["ADULT:15", "ADULT:15", "INFANT:0"];

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let args: Vec<String> = std::env::args().collect();

    // A present but malformed --account is an error, not the default
    let account_id = match args.iter().position(|a| a == "--account") {
        Some(i) => {
            let raw = args.get(i + 1).map(String::as_str).unwrap_or_default();
            PurchaseValidator::parse_account_id(raw)?
        }
        None => DEFAULT_ACCOUNT_ID,
    };

    let mut specs: Vec<&str> = args
        .windows(2)
        .filter(|w| w[0] == "--ticket")
        .map(|w| w[1].as_str())
        .collect();
    if specs.is_empty() {
        specs = DEFAULT_TICKETS.to_vec();
    }

    let requests = specs
        .iter()
        .map(|spec| {
            let (ticket_type, count) = spec.split_once(':').unwrap_or((*spec, ""));
            TicketTypeRequest::parse(ticket_type, count)
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!("Testing TicketService with:");
    println!("  Account ID: {}", account_id);
    println!("  Ticket requests:");
    for request in &requests {
        println!("    - {} x {}", request.count(), request.ticket_type());
    }

    let service = TicketService::new(LoggingPaymentGateway, LoggingSeatReservation);
    match service.purchase_tickets(account_id, &requests) {
        Ok(result) => {
            println!("\nBooking succeeded!");
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(e) => {
            println!("\nBooking failed:");
            println!("{}", e);
        }
    }

    Ok(())
}
