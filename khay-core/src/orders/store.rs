//! OrderStore - placed orders and their transitions
//!
//! Orders are kept most-recent-first: new orders are prepended so the
//! default listing is reverse-chronological. That ordering is a product
//! decision the order screen relies on.
//!
//! Status machine: `Pending -> Completed`, one way, no other transitions.
//! Payment status flips freely in both directions. Cancellation is a hard
//! delete, not a status value.

use shared::error::OrderError;
use shared::order::{Order, OrderLine, OrderStatus, OrderStatusCounts, PaymentStatus, StatusFilter};
use shared::util::{now_millis, snowflake_id};

/// In-memory order collection
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order from a line snapshot. The total is computed here,
    /// once, and never recomputed afterwards.
    ///
    /// The checkout coordinator has already rejected empty carts; the check
    /// is repeated so no caller can create a degenerate order.
    pub fn create_order(
        &mut self,
        lines: Vec<OrderLine>,
        notes: String,
        table_number: u32,
        payment_status: PaymentStatus,
    ) -> Result<i64, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let order = Order {
            id: snowflake_id(),
            total: Order::total_of(&lines),
            lines,
            notes,
            table_number,
            created_at: now_millis(),
            status: OrderStatus::Pending,
            payment_status,
        };
        let id = order.id;
        tracing::info!(order_id = id, table_number, total = order.total, "order created");
        // Most recent first
        self.orders.insert(0, order);
        Ok(id)
    }

    /// Hard delete. Unknown ids leave the collection untouched.
    ///
    /// Returns whether an order was removed.
    pub fn cancel_order(&mut self, order_id: i64) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != order_id);
        let removed = self.orders.len() != before;
        if removed {
            tracing::info!(order_id, "order cancelled");
        } else {
            tracing::warn!(order_id, "cancel_order on unknown order, ignored");
        }
        removed
    }

    /// Apply a status transition. Only `Pending -> Completed` is legal;
    /// re-applying the current status is a no-op success.
    pub fn update_status(&mut self, order_id: i64, status: OrderStatus) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(OrderError::OrderNotFound(order_id))?;

        match (order.status, status) {
            (from, to) if from == to => Ok(()),
            (OrderStatus::Pending, OrderStatus::Completed) => {
                order.status = OrderStatus::Completed;
                tracing::info!(order_id, "order completed");
                Ok(())
            }
            (from, to) => {
                tracing::warn!(order_id, ?from, ?to, "rejected status transition");
                Err(OrderError::InvalidTransition { from, to })
            }
        }
    }

    /// Set the payment status. Both directions are allowed so staff can
    /// correct a mistaken mark.
    pub fn update_payment_status(
        &mut self,
        order_id: i64,
        payment_status: PaymentStatus,
    ) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(OrderError::OrderNotFound(order_id))?;
        order.payment_status = payment_status;
        tracing::info!(order_id, ?payment_status, "payment status updated");
        Ok(())
    }

    /// Borrowing view over orders matching the filter, preserving the
    /// collection's most-recent-first order. No copies, no mutation.
    pub fn filter_by_status(&self, filter: StatusFilter) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| filter.matches(o.status))
    }

    /// Per-status counts, recomputed from current state on each call.
    pub fn counts_by_status(&self) -> OrderStatusCounts {
        let mut counts = OrderStatusCounts::default();
        for order in &self.orders {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::Completed => counts.completed += 1,
            }
        }
        counts.total = self.orders.len();
        counts
    }

    /// All orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, order_id: i64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuCategory, MenuItem};

    fn lines(entries: &[(&str, f64, u32)]) -> Vec<OrderLine> {
        entries
            .iter()
            .map(|(id, price, qty)| {
                let item = MenuItem::new(*id, *id, *price, MenuCategory::Drink, "");
                OrderLine::snapshot(&item, *qty)
            })
            .collect()
    }

    fn place(store: &mut OrderStore, entries: &[(&str, f64, u32)]) -> i64 {
        store
            .create_order(lines(entries), String::new(), 3, PaymentStatus::Unpaid)
            .unwrap()
    }

    #[test]
    fn create_computes_total_once() {
        let mut store = OrderStore::new();
        let id = place(&mut store, &[("a", 50_000.0, 2), ("b", 20_000.0, 1)]);
        let order = store.get(id).unwrap();
        assert_eq!(order.total, 120_000.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn create_rejects_empty_lines() {
        let mut store = OrderStore::new();
        let result = store.create_order(vec![], String::new(), 1, PaymentStatus::Paid);
        assert_eq!(result, Err(OrderError::EmptyCart));
        assert!(store.is_empty());
    }

    #[test]
    fn newest_order_is_first() {
        let mut store = OrderStore::new();
        let first = place(&mut store, &[("a", 10.0, 1)]);
        let second = place(&mut store, &[("b", 20.0, 1)]);
        assert_eq!(store.orders()[0].id, second);
        assert_eq!(store.orders()[1].id, first);
    }

    #[test]
    fn pending_to_completed_is_one_way() {
        let mut store = OrderStore::new();
        let id = place(&mut store, &[("a", 10.0, 1)]);

        store.update_status(id, OrderStatus::Completed).unwrap();
        assert_eq!(store.get(id).unwrap().status, OrderStatus::Completed);

        // Re-applying the held status is a quiet success
        store.update_status(id, OrderStatus::Completed).unwrap();

        let back = store.update_status(id, OrderStatus::Pending);
        assert_eq!(
            back,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Completed,
                to: OrderStatus::Pending,
            })
        );
        assert_eq!(store.get(id).unwrap().status, OrderStatus::Completed);
    }

    #[test]
    fn status_update_on_unknown_order() {
        let mut store = OrderStore::new();
        assert_eq!(
            store.update_status(404, OrderStatus::Completed),
            Err(OrderError::OrderNotFound(404))
        );
    }

    #[test]
    fn payment_status_flips_both_ways() {
        let mut store = OrderStore::new();
        let id = place(&mut store, &[("a", 10.0, 1)]);
        store.update_payment_status(id, PaymentStatus::Paid).unwrap();
        assert_eq!(store.get(id).unwrap().payment_status, PaymentStatus::Paid);
        store.update_payment_status(id, PaymentStatus::Unpaid).unwrap();
        assert_eq!(store.get(id).unwrap().payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn cancel_is_a_hard_delete_and_idempotent() {
        let mut store = OrderStore::new();
        let id = place(&mut store, &[("a", 10.0, 1)]);
        let keep = place(&mut store, &[("b", 20.0, 1)]);

        assert!(store.cancel_order(id));
        assert!(store.get(id).is_none());

        let snapshot: Vec<Order> = store.orders().to_vec();
        assert!(!store.cancel_order(id));
        assert_eq!(store.orders(), snapshot.as_slice());
        assert!(store.get(keep).is_some());
    }

    #[test]
    fn filtered_view_preserves_relative_order() {
        let mut store = OrderStore::new();
        let a = place(&mut store, &[("a", 10.0, 1)]);
        let b = place(&mut store, &[("b", 10.0, 1)]);
        let c = place(&mut store, &[("c", 10.0, 1)]);
        store.update_status(a, OrderStatus::Completed).unwrap();
        store.update_status(c, OrderStatus::Completed).unwrap();

        let completed: Vec<i64> = store
            .filter_by_status(StatusFilter::Status(OrderStatus::Completed))
            .map(|o| o.id)
            .collect();
        // Most recent first: c was placed after a
        assert_eq!(completed, vec![c, a]);

        let all: Vec<i64> = store.filter_by_status(StatusFilter::All).map(|o| o.id).collect();
        assert_eq!(all, vec![c, b, a]);
    }

    #[test]
    fn counts_match_collection() {
        let mut store = OrderStore::new();
        let a = place(&mut store, &[("a", 10.0, 1)]);
        place(&mut store, &[("b", 10.0, 1)]);
        place(&mut store, &[("c", 10.0, 1)]);
        store.update_status(a, OrderStatus::Completed).unwrap();

        let counts = store.counts_by_status();
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.total, store.len());
    }
}
