//! Cart state
//!
//! The in-progress, uncommitted selection for the current customer/table.
//! Cleared by the checkout coordinator once an order is placed.

pub mod store;

// Re-exports
pub use store::{CartLine, CartStore};
