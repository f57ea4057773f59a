//! ticket_service Library
//!
//! Re-exports modules for integration testing and external use.

pub mod cli;
pub mod config;
pub mod domain;
mod error;
pub mod logging;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{InvalidPurchase, PricingCalculator, PurchaseValidator};
pub use domain::{TicketAmounts, TicketType, TicketTypeRequest};
pub use services::{PurchaseResult, TicketService};
