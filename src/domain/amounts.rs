//! Aggregated ticket counts
//!
//! Per-type totals for one purchase, built by summing every request.

use serde::{Deserialize, Serialize};

use super::ticket::{TicketType, TicketTypeRequest};

/// Ticket counts for all three types. Missing types count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAmounts {
    #[serde(rename = "ADULT")]
    pub adult: u64,
    #[serde(rename = "CHILD")]
    pub child: u64,
    #[serde(rename = "INFANT")]
    pub infant: u64,
}

impl TicketAmounts {
    pub fn new(adult: u64, child: u64, infant: u64) -> Self {
        Self { adult, child, infant }
    }

    /// Sum the counts of validated requests. Requests of the same type add up.
    ///
    /// Negative counts are clamped to zero; callers validate them first.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |amounts, request| {
            let count = u64::try_from(request.count()).unwrap_or(0);
            amounts.with_added(request.ticket_type(), count)
        })
    }

    pub fn get(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Return a copy with `count` more tickets of the given type.
    pub fn with_added(mut self, ticket_type: TicketType, count: u64) -> Self {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        };
        *slot = slot.saturating_add(count);
        self
    }

    /// Iterate `(type, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketType, u64)> + '_ {
        TicketType::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}
