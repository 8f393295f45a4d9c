//! Error types for the ordering core
//!
//! Every variant is non-fatal: callers either surface the rejection to the
//! operator or treat it as a no-op. Nothing in the core panics on bad input.

use crate::order::OrderStatus;
use thiserror::Error;

/// Errors produced by the cart/order stores and the checkout coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Checkout attempted with no cart lines
    #[error("cart is empty")]
    EmptyCart,

    /// Mutation addressed an order id that is not in the store
    #[error("order not found: {0}")]
    OrderNotFound(i64),

    /// Quantity must be a positive integer
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Table number outside the configured range
    #[error("table number {table_number} outside valid range {min}..={max}")]
    InvalidTableNumber { table_number: u32, min: u32, max: u32 },

    /// Status transition not allowed (only PENDING -> COMPLETED is legal)
    #[error("invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}
