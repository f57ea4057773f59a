//! In-process providers
//!
//! Stand-ins for the real payment and seat booking providers. They check
//! their arguments the way the providers do, log the call and succeed.

use rust_decimal::Decimal;

use super::collaborators::{SeatReservationService, ServiceError, TicketPaymentService};

/// Payment provider that records the charge in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentGateway;

impl TicketPaymentService for LoggingPaymentGateway {
    fn make_payment(&self, account_id: u64, amount: Decimal) -> Result<(), ServiceError> {
        if account_id == 0 {
            return Err(ServiceError::InvalidArgument(
                "accountId must be greater than zero".to_string(),
            ));
        }
        if amount.is_sign_negative() {
            return Err(ServiceError::InvalidArgument(
                "totalAmountToPay must not be negative".to_string(),
            ));
        }

        tracing::info!(account_id, amount = %amount, "Payment taken");
        Ok(())
    }
}

/// Seat booking provider that records the reservation in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservation;

impl SeatReservationService for LoggingSeatReservation {
    fn reserve_seat(&self, account_id: u64, seat_count: u64) -> Result<(), ServiceError> {
        if account_id == 0 {
            return Err(ServiceError::InvalidArgument(
                "accountId must be greater than zero".to_string(),
            ));
        }

        tracing::info!(account_id, seat_count, "Seats reserved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_accepts_valid_call() {
        assert!(LoggingPaymentGateway.make_payment(1, dec!(25)).is_ok());
        assert!(LoggingPaymentGateway.make_payment(1, Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_payment_rejects_zero_account() {
        let err = LoggingPaymentGateway.make_payment(0, dec!(25)).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[test]
    fn test_payment_rejects_negative_amount() {
        assert!(LoggingPaymentGateway.make_payment(1, dec!(-1)).is_err());
    }

    #[test]
    fn test_reservation() {
        assert!(LoggingSeatReservation.reserve_seat(3, 2).is_ok());
        assert!(LoggingSeatReservation.reserve_seat(0, 2).is_err());
    }
}
