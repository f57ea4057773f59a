//! Integration tests for the purchase flow

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use ticket_service::domain::Subsystem;
use ticket_service::services::ServiceError;
use ticket_service::{
    InvalidPurchase, TicketAmounts, TicketService, TicketType, TicketTypeRequest,
};

mod common;

use common::{requests, setup_service, MockPayment, MockReservation};

#[test]
fn test_mixed_booking_scenario() {
    let (service, payment, reservation) = setup_service();

    let result = service.purchase_tickets(5, &requests(2, 3, 1)).unwrap();

    assert_eq!(result.account_id, 5);
    assert_eq!(result.ticket_amounts, TicketAmounts::new(2, 3, 1));
    assert_eq!(result.total_cost, dec!(95));
    assert_eq!(result.total_seats, 5);
    assert_eq!(result.total_tickets, 6);
    assert!(result.success);

    assert_eq!(*payment.calls.lock().unwrap(), vec![(5, dec!(95))]);
    assert_eq!(*reservation.calls.lock().unwrap(), vec![(5, 5)]);
}

#[test]
fn test_payment_called_with_cost() {
    let (service, payment, _) = setup_service();

    service
        .purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Adult, 1)])
        .unwrap();

    assert_eq!(*payment.calls.lock().unwrap(), vec![(1, dec!(25))]);
}

#[test]
fn test_reservation_called_with_seats() {
    let (service, _, reservation) = setup_service();

    service
        .purchase_tickets(2, &[TicketTypeRequest::new(TicketType::Adult, 2)])
        .unwrap();

    assert_eq!(*reservation.calls.lock().unwrap(), vec![(2, 2)]);
}

#[test]
fn test_adults_only_booking() {
    let (service, _, _) = setup_service();

    let result = service.purchase_tickets(5, &requests(5, 0, 0)).unwrap();

    assert_eq!(result.ticket_amounts, TicketAmounts::new(5, 0, 0));
    assert_eq!(result.total_cost, dec!(125));
    assert_eq!(result.total_seats, 5);
}

#[test]
fn test_capacity_boundary() {
    let (service, _, _) = setup_service();

    assert!(service.purchase_tickets(5, &requests(10, 10, 5)).is_ok());
    assert_eq!(
        service.purchase_tickets(5, &requests(10, 10, 6)).unwrap_err(),
        InvalidPurchase::TooManyTickets { requested: 26 }
    );
}

#[test]
fn test_split_requests_add_up_to_capacity() {
    let (service, payment, _) = setup_service();

    let err = service
        .purchase_tickets(
            5,
            &[
                TicketTypeRequest::new(TicketType::Adult, 15),
                TicketTypeRequest::new(TicketType::Adult, 15),
                TicketTypeRequest::new(TicketType::Infant, 0),
            ],
        )
        .unwrap_err();

    assert_eq!(err, InvalidPurchase::TooManyTickets { requested: 30 });
    assert!(payment.calls.lock().unwrap().is_empty());
}

#[test]
fn test_infant_ratio_boundary() {
    let (service, _, _) = setup_service();

    assert!(service.purchase_tickets(5, &requests(4, 0, 4)).is_ok());
    assert_eq!(
        service.purchase_tickets(5, &requests(4, 0, 5)).unwrap_err(),
        InvalidPurchase::TooManyInfants { infants: 5, adults: 4 }
    );
}

#[test]
fn test_infants_only_requires_adult() {
    let (service, _, _) = setup_service();

    assert_eq!(
        service.purchase_tickets(5, &requests(0, 0, 3)).unwrap_err(),
        InvalidPurchase::AdultRequired
    );
}

#[test]
fn test_children_only_requires_adult() {
    let (service, _, _) = setup_service();

    assert_eq!(
        service.purchase_tickets(5, &requests(0, 2, 0)).unwrap_err(),
        InvalidPurchase::AdultRequired
    );
}

#[test]
fn test_empty_requests() {
    let (service, _, _) = setup_service();

    assert_eq!(
        service.purchase_tickets(5, &requests(0, 0, 0)).unwrap_err(),
        InvalidPurchase::EmptyRequest
    );
    assert_eq!(
        service.purchase_tickets(5, &[]).unwrap_err(),
        InvalidPurchase::EmptyRequest
    );
}

#[test]
fn test_negative_count_rejected_before_aggregation() {
    let (service, _, _) = setup_service();

    // Would net out to 1 adult if negatives were summed
    let err = service
        .purchase_tickets(
            5,
            &[
                TicketTypeRequest::new(TicketType::Adult, 3),
                TicketTypeRequest::new(TicketType::Adult, -2),
            ],
        )
        .unwrap_err();

    assert_eq!(err, InvalidPurchase::InvalidTicketCount("-2".to_string()));
}

#[test]
fn test_invalid_account_ids() {
    let (service, payment, _) = setup_service();

    for account_id in [-5, 0, -1, i64::MIN] {
        assert_eq!(
            service.purchase_tickets(account_id, &requests(1, 0, 0)).unwrap_err(),
            InvalidPurchase::InvalidAccountId(account_id.to_string())
        );
    }
    assert!(payment.calls.lock().unwrap().is_empty());
}

#[test]
fn test_account_checked_before_tickets() {
    let (service, _, _) = setup_service();

    assert_eq!(
        service.purchase_tickets(-1, &requests(0, 0, 0)).unwrap_err(),
        InvalidPurchase::InvalidAccountId("-1".to_string())
    );
}

#[test]
fn test_payment_failure_wrapped() {
    let payment = MockPayment {
        fail_with: Some(ServiceError::InvalidArgument(
            "accountId must be an integer".to_string(),
        )),
        ..Default::default()
    };
    let reservation = MockReservation::default();
    let service = TicketService::new(payment.clone(), reservation.clone());

    let err = service.purchase_tickets(1, &requests(1, 0, 0)).unwrap_err();

    assert!(err.is_collaborator_failure());
    assert_eq!(err.to_string(), "Payment gateway error: accountId must be an integer");
    assert!(reservation.calls.lock().unwrap().is_empty());
}

#[test]
fn test_reservation_failure_wrapped() {
    let payment = MockPayment::default();
    let reservation = MockReservation {
        fail_with: Some(ServiceError::Unavailable("seat map offline".to_string())),
        ..Default::default()
    };
    let service = TicketService::new(payment.clone(), reservation);

    let err = service.purchase_tickets(1, &requests(1, 0, 0)).unwrap_err();

    assert_eq!(
        err,
        InvalidPurchase::collaborator(
            Subsystem::SeatReservation,
            "service unavailable: seat map offline"
        )
    );
    // Payment has already gone through; no partial result is returned
    assert_eq!(payment.calls.lock().unwrap().len(), 1);
}

#[test]
fn test_infant_adds_no_cost_or_seat() {
    let (service, payment, reservation) = setup_service();

    let result = service.purchase_tickets(3, &requests(1, 0, 1)).unwrap();

    assert_eq!(result.total_cost, dec!(25));
    assert_eq!(result.total_seats, 1);
    assert_eq!(result.total_tickets, 2);
    assert_eq!(payment.calls.lock().unwrap()[0].1, Decimal::from(25));
    assert_eq!(*reservation.calls.lock().unwrap(), vec![(3, 1)]);
}
