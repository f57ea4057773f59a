//! ticket_service - interactive ticket booking
//!
//! Prompts for an account and ticket counts, validates and prices the
//! purchase, then takes payment and reserves seats.

use std::io;

use ticket_service::cli::BookingCli;
use ticket_service::logging::init_tracing;
use ticket_service::services::{LoggingPaymentGateway, LoggingSeatReservation, TicketService};
use ticket_service::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    init_tracing(&config);
    tracing::debug!(environment = %config.environment, "Configuration loaded");

    let service = TicketService::new(LoggingPaymentGateway, LoggingSeatReservation);

    let stdin = io::stdin();
    let mut cli = BookingCli::new(stdin.lock(), io::stdout(), &config);
    cli.run(&service)?;

    Ok(())
}
