//! Booking CLI
//!
//! Interactive prompt loop in front of `TicketService`. Generic over its
//! input and output so sessions can be scripted in tests.

pub mod messages;

use std::io::{BufRead, Write};

use crate::config::{Config, OutputFormat};
use crate::domain::{TicketType, TicketTypeRequest};
use crate::error::{AppError, AppResult};
use crate::services::{PurchaseResult, SeatReservationService, TicketPaymentService, TicketService};

/// How a CLI session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// A purchase went through
    Booked(PurchaseResult),
    /// The user declined to retry, or input ran out
    Cancelled,
}

/// Outcome of one pass through the booking prompts
enum Attempt {
    Booked(PurchaseResult),
    Failed(AppError),
    InputClosed,
}

/// Interactive booking session
pub struct BookingCli<R, W> {
    input: R,
    output: W,
    output_format: OutputFormat,
    currency_symbol: String,
}

impl<R: BufRead, W: Write> BookingCli<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            output_format: config.output_format,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Run booking attempts until one succeeds or the user gives up.
    pub fn run<P, S>(&mut self, service: &TicketService<P, S>) -> AppResult<SessionOutcome>
    where
        P: TicketPaymentService,
        S: SeatReservationService,
    {
        tracing::info!("CLI started");
        writeln!(self.output, "{}", messages::WELCOME)?;

        let outcome = loop {
            match self.attempt_booking(service)? {
                Attempt::Booked(result) => break SessionOutcome::Booked(result),
                Attempt::InputClosed => break SessionOutcome::Cancelled,
                Attempt::Failed(e) if !e.is_retryable() => return Err(e),
                Attempt::Failed(_) => {
                    if self.ask_to_retry()? {
                        tracing::info!("User chose to retry booking");
                    } else {
                        tracing::info!("User chose not to retry booking");
                        break SessionOutcome::Cancelled;
                    }
                }
            }
        };

        writeln!(self.output, "{}", messages::GOODBYE)?;
        tracing::info!("CLI exited");
        Ok(outcome)
    }

    fn attempt_booking<P, S>(&mut self, service: &TicketService<P, S>) -> AppResult<Attempt>
    where
        P: TicketPaymentService,
        S: SeatReservationService,
    {
        writeln!(self.output, "{}", messages::BOOK_TICKETS_HEADING)?;

        let Some(account_id) = self.prompt_number(messages::PROMPT_ACCOUNT_ID)? else {
            return Ok(Attempt::InputClosed);
        };

        let mut requests = Vec::with_capacity(TicketType::ALL.len());
        for ticket_type in TicketType::ALL {
            let prompt = messages::ticket_prompt(ticket_type.as_str());
            let Some(count) = self.prompt_number(&prompt)? else {
                return Ok(Attempt::InputClosed);
            };
            requests.push(TicketTypeRequest::new(ticket_type, count));
        }

        match service.purchase_tickets(account_id, &requests) {
            Ok(result) => {
                tracing::info!(booking_reference = %result.booking_reference, "Booking succeeded");
                self.display_result(&result)?;
                Ok(Attempt::Booked(result))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking failed");
                let error = AppError::from(e);
                self.display_error(&error)?;
                Ok(Attempt::Failed(error))
            }
        }
    }

    /// Ask until a whole number of zero or more is entered. `None` at end of input.
    ///
    /// A blank answer is not read as zero; it gets `INVALID_NUMBER` and the
    /// question again.
    fn prompt_number(&mut self, question: &str) -> AppResult<Option<i64>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match answer.trim().parse::<i64>() {
                Ok(n) if n >= 0 => return Ok(Some(n)),
                _ => {
                    tracing::debug!(input = %answer.trim(), "Invalid input received");
                    writeln!(self.output, "{}", messages::INVALID_NUMBER)?;
                }
            }
        }
    }

    fn ask_to_retry(&mut self) -> AppResult<bool> {
        let answer = self.prompt(messages::PROMPT_RETRY)?.unwrap_or_default();
        Ok(answer.trim().to_lowercase().starts_with('y'))
    }

    fn prompt(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn display_result(&mut self, result: &PurchaseResult) -> AppResult<()> {
        if self.output_format == OutputFormat::Json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        writeln!(self.output, "{}", messages::SUCCESS_HEADING)?;
        writeln!(self.output, "{}", messages::DIVIDER)?;
        writeln!(self.output, "{} {}", messages::BOOKING_REFERENCE, result.booking_reference)?;
        for (ticket_type, count) in result.ticket_amounts.iter() {
            writeln!(self.output, "{}", messages::ticket_line(label(ticket_type), count))?;
        }
        writeln!(self.output, "{} {}", messages::TOTAL_TICKETS, result.total_tickets)?;
        writeln!(self.output, "{} {}", messages::TOTAL_SEATS, result.total_seats)?;
        writeln!(
            self.output,
            "{} {}{:.2}",
            messages::TOTAL_COST,
            self.currency_symbol,
            result.total_cost
        )?;
        writeln!(self.output, "{}", messages::DIVIDER)?;
        Ok(())
    }

    fn display_error(&mut self, error: &AppError) -> AppResult<()> {
        writeln!(self.output, "{} {} 🚨", messages::BOOKING_FAILED, error)?;
        Ok(())
    }

    /// Consume the session and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn label(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Adult => "Adult",
        TicketType::Child => "Child",
        TicketType::Infant => "Infant",
    }
}
