//! Purchase Error Types
//!
//! The single error type a ticket purchase can fail with.

use std::fmt;
use thiserror::Error;

use super::pricing::MAX_TICKETS;
use super::ticket::{TicketRequestError, TicketType};

/// External system a purchase depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    PaymentGateway,
    SeatReservation,
}

impl Subsystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::PaymentGateway => "Payment gateway",
            Subsystem::SeatReservation => "Seat reservation",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a purchase is rejected.
///
/// Every failure leaving `TicketService::purchase_tickets` is one of these,
/// including failures raised by the payment and reservation collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidPurchase {
    #[error("Please provide a valid account ID (a positive whole number).")]
    InvalidAccountId(String),

    #[error("type must be {}", TicketType::valid_names())]
    InvalidTicketType(String),

    #[error("noOfTickets must be a whole number of zero or more (got {0})")]
    InvalidTicketCount(String),

    #[error("Please request at least one ticket.")]
    EmptyRequest,

    #[error(
        "You can buy at most {max} tickets at a time (requested {requested}).",
        max = MAX_TICKETS
    )]
    TooManyTickets { requested: u64 },

    #[error("Child and infant tickets must be bought with at least one adult ticket.")]
    AdultRequired,

    #[error("Each infant must sit on an adult's lap: {infants} infants for {adults} adults.")]
    TooManyInfants { infants: u64, adults: u64 },

    #[error("{subsystem} error: {message}")]
    Collaborator { subsystem: Subsystem, message: String },

    #[error("Unexpected error during ticket purchase: {0}")]
    Unexpected(String),
}

impl InvalidPurchase {
    pub fn collaborator(subsystem: Subsystem, message: impl Into<String>) -> Self {
        Self::Collaborator {
            subsystem,
            message: message.into(),
        }
    }

    /// Check if the purchase broke a booking rule (caller can fix the input)
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccountId(_)
                | Self::InvalidTicketType(_)
                | Self::InvalidTicketCount(_)
                | Self::EmptyRequest
                | Self::TooManyTickets { .. }
                | Self::AdultRequired
                | Self::TooManyInfants { .. }
        )
    }

    /// Check if an external service rejected the purchase
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::Collaborator { .. })
    }
}

impl From<TicketRequestError> for InvalidPurchase {
    fn from(err: TicketRequestError) -> Self {
        match err {
            TicketRequestError::InvalidType(raw) => Self::InvalidTicketType(raw),
            TicketRequestError::InvalidCount(raw) => Self::InvalidTicketCount(raw),
        }
    }
}
