//! Status enums and derived-view types

use serde::{Deserialize, Serialize};

/// Fulfilment stage of an order
///
/// The only legal transition is `Pending -> Completed`. Cancellation is a
/// deletion from the store, not a status value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

/// Whether the order's amount has been collected
///
/// Independent of [`OrderStatus`]; staff may flip it in both directions to
/// correct a mistaken mark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

/// Filter for the order list view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    Status(OrderStatus),
}

impl StatusFilter {
    /// Whether an order with the given status passes this filter.
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(s) => *s == status,
        }
    }
}

/// Per-status order counts, recomputed from store state on each call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderStatusCounts {
    pub pending: usize,
    pub completed: usize,
    pub total: usize,
}
