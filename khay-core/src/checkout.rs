//! Checkout coordinator
//!
//! Converts a non-empty cart into an order and resets the cart. All
//! validation happens before any mutation, so the caller never observes a
//! state where the order exists but the cart is still populated, or the
//! reverse.

use crate::cart::CartStore;
use crate::config::Config;
use crate::orders::OrderStore;
use serde::{Deserialize, Serialize};
use shared::error::OrderError;
use shared::order::PaymentStatus;

/// Checkout parameters collected by the cart screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Free-text kitchen notes, possibly empty
    #[serde(default)]
    pub notes: String,
    pub table_number: u32,
    /// "Pay now" checkouts start as `Paid`, "pay later" as `Unpaid`
    pub payment_status: PaymentStatus,
}

/// Snapshot the cart, create the order, clear the cart.
///
/// On any error the cart and the order collection are left untouched.
pub fn checkout(
    cart: &mut CartStore,
    orders: &mut OrderStore,
    request: &CheckoutRequest,
    config: &Config,
) -> Result<i64, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if !config.is_valid_table(request.table_number) {
        return Err(OrderError::InvalidTableNumber {
            table_number: request.table_number,
            min: config.table_min,
            max: config.table_max,
        });
    }

    let order_id = orders.create_order(
        cart.snapshot(),
        request.notes.clone(),
        request.table_number,
        request.payment_status,
    )?;
    cart.clear();
    Ok(order_id)
}
