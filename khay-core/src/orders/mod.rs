//! Order state
//!
//! Placed orders, their status/payment transitions, and the derived list
//! views the order screen renders from.

pub mod store;

// Re-exports
pub use store::OrderStore;
