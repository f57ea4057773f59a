//! Services module
//!
//! The purchase orchestrator and the providers it calls out to.

mod collaborators;
mod gateway;
mod ticket_service;

pub use collaborators::{SeatReservationService, ServiceError, TicketPaymentService};
pub use gateway::{LoggingPaymentGateway, LoggingSeatReservation};
pub use ticket_service::{PurchaseResult, TicketService};
