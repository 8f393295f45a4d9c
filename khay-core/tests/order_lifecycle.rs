//! Order list behaviour after checkout: transitions, views, cancellation

use khay_core::{AppState, CheckoutRequest, Config};
use shared::error::OrderError;
use shared::order::{OrderStatus, PaymentStatus, StatusFilter};
use std::sync::Arc;

/// Place one single-line order and return its id.
fn place_order(state: &Arc<AppState>, table_number: u32) -> i64 {
    let item = Arc::clone(state.catalog().get("juice-1").unwrap());
    state.add_to_cart(&item, 1).unwrap();
    state
        .checkout(&CheckoutRequest {
            notes: String::new(),
            table_number,
            payment_status: PaymentStatus::Unpaid,
        })
        .unwrap()
}

#[test]
fn completed_orders_stay_completed() {
    let state = AppState::new(Config::default());
    let id = place_order(&state, 2);

    state.update_status(id, OrderStatus::Completed).unwrap();

    let back = state.update_status(id, OrderStatus::Pending);
    assert_eq!(
        back,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Pending,
        })
    );
    assert_eq!(state.get_order(id).unwrap().status, OrderStatus::Completed);
}

#[test]
fn payment_marks_can_be_corrected() {
    let state = AppState::new(Config::default());
    let id = place_order(&state, 2);

    state.update_payment_status(id, PaymentStatus::Paid).unwrap();
    assert_eq!(
        state.get_order(id).unwrap().payment_status,
        PaymentStatus::Paid
    );
    state
        .update_payment_status(id, PaymentStatus::Unpaid)
        .unwrap();
    assert_eq!(
        state.get_order(id).unwrap().payment_status,
        PaymentStatus::Unpaid
    );
}

#[test]
fn filtered_views_and_counts_agree() {
    let state = AppState::new(Config::default());
    let first = place_order(&state, 1);
    let second = place_order(&state, 2);
    let third = place_order(&state, 3);
    state.update_status(first, OrderStatus::Completed).unwrap();
    state.update_status(third, OrderStatus::Completed).unwrap();

    let all: Vec<i64> = state.orders().iter().map(|o| o.id).collect();
    assert_eq!(all, vec![third, second, first]);

    let completed: Vec<i64> = state
        .orders_with_status(StatusFilter::Status(OrderStatus::Completed))
        .iter()
        .map(|o| o.id)
        .collect();
    // Same relative order as the unfiltered listing
    assert_eq!(completed, vec![third, first]);

    let pending: Vec<i64> = state
        .orders_with_status(StatusFilter::Status(OrderStatus::Pending))
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(pending, vec![second]);

    let counts = state.order_counts();
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.completed, 2);
    assert_eq!(counts.total, state.orders().len());
}

#[test]
fn cancelling_unknown_ids_leaves_orders_identical() {
    let state = AppState::new(Config::default());
    place_order(&state, 1);
    place_order(&state, 2);

    let before = state.orders();
    state.cancel_order(999_999);
    assert_eq!(state.orders(), before);
}

#[test]
fn cancellation_is_a_deletion_from_any_state() {
    let state = AppState::new(Config::default());
    let pending = place_order(&state, 1);
    let completed = place_order(&state, 2);
    state
        .update_status(completed, OrderStatus::Completed)
        .unwrap();

    state.cancel_order(pending);
    state.cancel_order(completed);
    assert!(state.orders().is_empty());
    assert_eq!(state.order_counts().total, 0);
}
