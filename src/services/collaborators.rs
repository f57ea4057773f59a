//! Collaborator contracts
//!
//! Payment and seat reservation are owned by external providers. The
//! purchase flow only depends on these traits.

use rust_decimal::Decimal;

/// Errors reported by an external provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The provider refused the arguments it was given
    #[error("{0}")]
    InvalidArgument(String),

    /// The provider could not complete the call
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Takes payment for a purchase.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: u64, amount: Decimal) -> Result<(), ServiceError>;
}

/// Allocates physical seats for a purchase.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: u64, seat_count: u64) -> Result<(), ServiceError>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: u64, amount: Decimal) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: u64, seat_count: u64) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: u64, amount: Decimal) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: u64, seat_count: u64) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, seat_count)
    }
}
