//! CartStore - in-memory cart lines
//!
//! Invariants:
//! - at most one line per distinct menu item id (adding merges quantities)
//! - no line with quantity 0 exists; setting 0 removes the line
//! - the total is recomputed from the lines on every call, never cached

use crate::money;
use shared::error::OrderError;
use shared::models::MenuItem;
use shared::order::OrderLine;
use shared::util::snowflake_id;
use std::sync::Arc;

/// One (item, quantity) pairing in the cart
///
/// Holds a reference to the catalog entry, not a copy; the snapshot copy is
/// only taken at checkout.
#[derive(Debug, Clone)]
pub struct CartLine {
    /// Cart-unique line id
    pub id: i64,
    pub item: Arc<MenuItem>,
    /// Always > 0
    pub quantity: u32,
}

/// In-memory cart
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an item. Merges into the existing line for the same
    /// menu item id; otherwise appends a new line. Returns the line id.
    pub fn add_item(&mut self, item: &Arc<MenuItem>, quantity: u32) -> Result<i64, OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity += quantity;
            tracing::debug!(line_id = line.id, item = %item.id, quantity = line.quantity, "cart line merged");
            return Ok(line.id);
        }
        let line = CartLine {
            id: snowflake_id(),
            item: Arc::clone(item),
            quantity,
        };
        let id = line.id;
        tracing::debug!(line_id = id, item = %item.id, quantity, "cart line added");
        self.lines.push(line);
        Ok(id)
    }

    /// Absolute quantity set. `0` removes the line. Unknown line ids are a
    /// silent no-op (the UI may race a removal against an edit).
    ///
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, line_id: i64, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_line(line_id);
        }
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::debug!(line_id, quantity, "cart quantity set");
                true
            }
            None => {
                tracing::debug!(line_id, "set_quantity on unknown line, ignored");
                false
            }
        }
    }

    /// Remove a line. Idempotent; returns whether a line was removed.
    pub fn remove_line(&mut self, line_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        let removed = self.lines.len() != before;
        if removed {
            tracing::debug!(line_id, "cart line removed");
        }
        removed
    }

    /// Cart total: sum of `unit_price * quantity` over current lines.
    pub fn total(&self) -> f64 {
        money::sum_lines(self.lines.iter().map(|l| (l.item.unit_price, l.quantity)))
    }

    /// Sum of quantities across lines (cart-size indicator).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copy the current lines into order-line snapshots, in cart order.
    pub fn snapshot(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine::snapshot(&l.item, l.quantity))
            .collect()
    }

    /// Drop all lines. Called by the checkout coordinator after the order
    /// has been created.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
