//! Domain module
//!
//! Ticket types, pricing and the booking rules.

pub mod amounts;
pub mod error;
pub mod pricing;
pub mod ticket;
pub mod validation;

pub use amounts::TicketAmounts;
pub use error::{InvalidPurchase, Subsystem};
pub use pricing::{CostBreakdown, PricingCalculator, Totals, MAX_TICKETS};
pub use ticket::{TicketRequestError, TicketType, TicketTypeRequest};
pub use validation::PurchaseValidator;
