//! Store change notifications
//!
//! Sent on the [`AppState`](crate::state::AppState) broadcast channel after
//! every successful mutation. The presentation layer re-renders from fresh
//! snapshots; the event carries just enough to know what went stale.

use serde::{Deserialize, Serialize};

/// Notification emitted after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreEvent {
    /// Cart lines changed (add, quantity edit, removal, or checkout clear)
    CartChanged,
    OrderCreated { id: i64 },
    /// Status or payment status changed
    OrderUpdated { id: i64 },
    OrderCancelled { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_wire_format() {
        let json = serde_json::to_value(StoreEvent::OrderCreated { id: 7 }).unwrap();
        assert_eq!(json["type"], "ORDER_CREATED");
        assert_eq!(json["id"], 7);

        let json = serde_json::to_value(StoreEvent::CartChanged).unwrap();
        assert_eq!(json["type"], "CART_CHANGED");
    }
}
