//! Order types
//!
//! - **types**: status enums, filters and per-status counts
//! - **snapshot**: the immutable order record and its line snapshot
//!
//! An `Order` owns copies of its lines, never references into the live
//! cart or catalog, so later cart or price changes cannot corrupt a
//! placed order.

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{Order, OrderLine};
pub use types::{OrderStatus, OrderStatusCounts, PaymentStatus, StatusFilter};
