//! Ticket Service
//!
//! Validates, prices and books a ticket purchase.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    InvalidPurchase, PricingCalculator, PurchaseValidator, Subsystem, TicketAmounts,
    TicketTypeRequest,
};

use super::collaborators::{SeatReservationService, ServiceError, TicketPaymentService};

/// Result of a successful purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseResult {
    pub booking_reference: Uuid,
    pub account_id: u64,
    pub ticket_amounts: TicketAmounts,
    pub total_cost: Decimal,
    pub total_seats: u64,
    pub total_tickets: u64,
    pub success: bool,
}

/// Purchase orchestrator.
///
/// Holds no state between purchases beyond its two providers, so one
/// instance can serve any number of attempts.
pub struct TicketService<P, S> {
    payment: P,
    reservation: S,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment: P, reservation: S) -> Self {
        Self {
            payment,
            reservation,
        }
    }

    /// Purchase tickets for an account.
    ///
    /// Payment is taken before seats are reserved. If payment fails the
    /// reservation is never attempted.
    ///
    /// # Errors
    /// Every failure is an `InvalidPurchase`: rule violations, provider
    /// errors (wrapped with the provider name) and anything unexpected.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseResult, InvalidPurchase> {
        let booking_reference = Uuid::new_v4();
        let span = tracing::info_span!("purchase", %booking_reference, account_id);
        let _guard = span.enter();

        match self.try_purchase(booking_reference, account_id, requests) {
            Ok(result) => {
                tracing::info!(
                    total_tickets = result.total_tickets,
                    total_seats = result.total_seats,
                    total_cost = %result.total_cost,
                    "Purchase completed"
                );
                Ok(result)
            }
            Err(e) => {
                if e.is_rule_violation() {
                    tracing::warn!(error = %e, "Purchase rejected");
                } else if e.is_collaborator_failure() {
                    tracing::error!(error = %e, "Provider call failed");
                } else {
                    tracing::error!(error = %e, "Purchase failed");
                }
                Err(e)
            }
        }
    }

    fn try_purchase(
        &self,
        booking_reference: Uuid,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseResult, InvalidPurchase> {
        let account_id = PurchaseValidator::validate_account_id(account_id)?;
        PurchaseValidator::validate_requests(requests)?;

        let ticket_amounts = TicketAmounts::from_requests(requests);
        tracing::debug!(?ticket_amounts, "Validated input");

        PurchaseValidator::validate_ticket_rules(&ticket_amounts)?;

        let totals = PricingCalculator::calculate_totals(&ticket_amounts);
        let total_tickets = PricingCalculator::total_tickets(&ticket_amounts);

        call_provider(Subsystem::PaymentGateway, || {
            self.payment.make_payment(account_id, totals.total_cost)
        })?;
        call_provider(Subsystem::SeatReservation, || {
            self.reservation.reserve_seat(account_id, totals.total_seats)
        })?;

        Ok(PurchaseResult {
            booking_reference,
            account_id,
            ticket_amounts,
            total_cost: totals.total_cost,
            total_seats: totals.total_seats,
            total_tickets,
            success: true,
        })
    }
}

/// Run a provider call, turning its error or panic into an `InvalidPurchase`.
fn call_provider<F>(subsystem: Subsystem, call: F) -> Result<(), InvalidPurchase>
where
    F: FnOnce() -> Result<(), ServiceError>,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(InvalidPurchase::collaborator(subsystem, e.to_string())),
        Err(payload) => Err(InvalidPurchase::Unexpected(format!(
            "{} error: {}",
            subsystem,
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
