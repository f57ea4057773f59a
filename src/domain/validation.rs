//! Purchase validation
//!
//! Booking rules, checked in a fixed order. The first broken rule wins.

use super::amounts::TicketAmounts;
use super::error::InvalidPurchase;
use super::pricing::{PricingCalculator, MAX_TICKETS};
use super::ticket::TicketTypeRequest;

/// Stateless checks applied before anything is charged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseValidator;

impl PurchaseValidator {
    /// Account ids are strictly positive.
    pub fn validate_account_id(account_id: i64) -> Result<u64, InvalidPurchase> {
        u64::try_from(account_id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| InvalidPurchase::InvalidAccountId(account_id.to_string()))
    }

    /// Read an account id from raw text. Only whole numbers are accepted;
    /// `5.5`, `true` or a blank value fail instead of falling back to a default.
    pub fn parse_account_id(raw: &str) -> Result<i64, InvalidPurchase> {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map_err(|_| InvalidPurchase::InvalidAccountId(raw.to_string()))
    }

    /// Each request needs a count of zero or more.
    pub fn validate_requests(requests: &[TicketTypeRequest]) -> Result<(), InvalidPurchase> {
        if let Some(bad) = requests.iter().find(|r| r.count() < 0) {
            return Err(InvalidPurchase::InvalidTicketCount(bad.count().to_string()));
        }
        Ok(())
    }

    /// Aggregate rules: non-empty, capacity, adult present, infant ratio.
    pub fn validate_ticket_rules(amounts: &TicketAmounts) -> Result<(), InvalidPurchase> {
        // Rule 1: At least one ticket
        let total = PricingCalculator::total_tickets(amounts);
        if total == 0 {
            return Err(InvalidPurchase::EmptyRequest);
        }

        // Rule 2: Capacity
        if total > MAX_TICKETS {
            return Err(InvalidPurchase::TooManyTickets { requested: total });
        }

        // Rule 3: Children and infants need an adult
        if amounts.adult == 0 && (amounts.child > 0 || amounts.infant > 0) {
            return Err(InvalidPurchase::AdultRequired);
        }

        // Rule 4: One infant per adult
        if amounts.infant > amounts.adult {
            return Err(InvalidPurchase::TooManyInfants {
                infants: amounts.infant,
                adults: amounts.adult,
            });
        }

        Ok(())
    }
}
