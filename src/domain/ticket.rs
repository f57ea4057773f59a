//! Ticket types and requests
//!
//! Domain primitives for a single line of a ticket purchase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket category. Determines price and whether a seat is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// All ticket types, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }

    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Human readable list of the accepted names, e.g. "ADULT, CHILD, or INFANT".
    pub fn valid_names() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(TicketType::as_str).collect();
        match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            other => Err(TicketRequestError::InvalidType(other.to_string())),
        }
    }
}

/// Errors raised when building a request from raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketRequestError {
    #[error("type must be {}", TicketType::valid_names())]
    InvalidType(String),

    #[error("noOfTickets must be an integer (got {0:?})")]
    InvalidCount(String),
}

/// A request for `count` tickets of one type.
///
/// # Invariants
/// - The type is always one of the three known ticket types
/// - The count is any integer; zero and negative counts are allowed here and
///   rejected later during purchase validation
///
/// # Example
/// ```
/// use ticket_service::domain::{TicketType, TicketTypeRequest};
///
/// let request = TicketTypeRequest::new(TicketType::Adult, 2);
/// assert_eq!(request.ticket_type(), TicketType::Adult);
/// assert_eq!(request.count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: i64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Self {
        Self { ticket_type, count }
    }

    /// Build a request from untyped input.
    ///
    /// # Errors
    /// - `TicketRequestError::InvalidType` if the type is not ADULT, CHILD or INFANT
    /// - `TicketRequestError::InvalidCount` if the count is not a whole number
    pub fn parse(ticket_type: &str, count: &str) -> Result<Self, TicketRequestError> {
        let ticket_type: TicketType = ticket_type.trim().parse()?;
        let count = count
            .trim()
            .parse::<i64>()
            .map_err(|_| TicketRequestError::InvalidCount(count.to_string()))?;
        Ok(Self::new(ticket_type, count))
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}
