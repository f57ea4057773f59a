//! Pricing calculator
//!
//! Pure functions deriving cost and seat totals from aggregated ticket counts.
//! Money is held as `Decimal` and rounded to whole pence, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::amounts::TicketAmounts;
use super::ticket::TicketType;

/// Maximum tickets allowed in a single purchase
pub const MAX_TICKETS: u64 = 25;

/// Decimal places kept for currency values
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Unit price for a ticket type.
pub fn ticket_price(ticket_type: TicketType) -> Decimal {
    match ticket_type {
        TicketType::Adult => Decimal::from(25),
        TicketType::Child => Decimal::from(15),
        TicketType::Infant => Decimal::ZERO,
    }
}

/// Round a currency value to `CURRENCY_DECIMAL_PLACES`.
///
/// The scale is fixed too, so `25` serializes as `"25.00"`.
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value
        .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Per-type cost lines and their total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub adult_cost: Decimal,
    pub child_cost: Decimal,
    pub infant_cost: Decimal,
    pub total_cost: Decimal,
}

/// Cost and seat totals for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_cost: Decimal,
    pub total_seats: u64,
}

/// Stateless calculator over `TicketAmounts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingCalculator;

impl PricingCalculator {
    /// Each line is rounded before summing, so the total always equals the
    /// sum of the displayed lines.
    pub fn cost_breakdown(amounts: &TicketAmounts) -> CostBreakdown {
        let line = |t: TicketType| round_currency(Decimal::from(amounts.get(t)) * ticket_price(t));

        let adult_cost = line(TicketType::Adult);
        let child_cost = line(TicketType::Child);
        let infant_cost = line(TicketType::Infant);

        CostBreakdown {
            adult_cost,
            child_cost,
            infant_cost,
            total_cost: adult_cost + child_cost + infant_cost,
        }
    }

    pub fn total_cost(amounts: &TicketAmounts) -> Decimal {
        Self::cost_breakdown(amounts).total_cost
    }

    /// Seats consumed by the purchase (infants excluded).
    pub fn seats_needed(amounts: &TicketAmounts) -> u64 {
        amounts
            .iter()
            .filter(|(t, _)| t.occupies_seat())
            .map(|(_, count)| count)
            .fold(0, u64::saturating_add)
    }

    pub fn total_tickets(amounts: &TicketAmounts) -> u64 {
        amounts.iter().map(|(_, count)| count).fold(0, u64::saturating_add)
    }

    pub fn calculate_totals(amounts: &TicketAmounts) -> Totals {
        Totals {
            total_cost: Self::total_cost(amounts),
            total_seats: Self::seats_needed(amounts),
        }
    }
}
