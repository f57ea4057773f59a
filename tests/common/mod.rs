//! Common test utilities

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use ticket_service::services::{SeatReservationService, ServiceError, TicketPaymentService};
use ticket_service::{TicketService, TicketType, TicketTypeRequest};

/// Payment provider that records every call and can be told to fail
#[derive(Clone, Default)]
pub struct MockPayment {
    pub calls: Arc<Mutex<Vec<(u64, Decimal)>>>,
    pub fail_with: Option<ServiceError>,
}

impl TicketPaymentService for MockPayment {
    fn make_payment(&self, account_id: u64, amount: Decimal) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push((account_id, amount));
        self.fail_with.clone().map_or(Ok(()), Err)
    }
}

/// Seat provider that records every call and can be told to fail
#[derive(Clone, Default)]
pub struct MockReservation {
    pub calls: Arc<Mutex<Vec<(u64, u64)>>>,
    pub fail_with: Option<ServiceError>,
}

impl SeatReservationService for MockReservation {
    fn reserve_seat(&self, account_id: u64, seat_count: u64) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push((account_id, seat_count));
        self.fail_with.clone().map_or(Ok(()), Err)
    }
}

/// Service wired to fresh mocks, plus handles to inspect them
pub fn setup_service() -> (
    TicketService<MockPayment, MockReservation>,
    MockPayment,
    MockReservation,
) {
    let payment = MockPayment::default();
    let reservation = MockReservation::default();
    let service = TicketService::new(payment.clone(), reservation.clone());
    (service, payment, reservation)
}

/// One request per ticket type
pub fn requests(adults: i64, children: i64, infants: i64) -> Vec<TicketTypeRequest> {
    vec![
        TicketTypeRequest::new(TicketType::Adult, adults),
        TicketTypeRequest::new(TicketType::Child, children),
        TicketTypeRequest::new(TicketType::Infant, infants),
    ]
}
