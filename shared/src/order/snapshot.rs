//! Order record and line snapshot

use crate::models::MenuItem;
use crate::order::{OrderStatus, PaymentStatus};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Monetary values are rounded to 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// One (item, quantity) pairing, copied out of the cart at checkout
///
/// Holds copies of the catalog fields it needs so that catalog edits after
/// checkout leave placed orders untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub menu_item_id: String,
    pub name: String,
    /// Price per unit at checkout time, in currency units
    pub unit_price: f64,
    pub quantity: u32,
    /// unit_price * quantity, fixed at snapshot time
    pub line_total: f64,
}

impl OrderLine {
    /// Snapshot a cart line. `line_total` is computed here, once, in Decimal.
    pub fn snapshot(item: &MenuItem, quantity: u32) -> Self {
        let price = Decimal::from_f64(item.unit_price).unwrap_or_default();
        let total = (price * Decimal::from(quantity))
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        Self {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
            line_total: total.to_f64().unwrap_or(0.0),
        }
    }
}

/// A placed order
///
/// `total` is computed once at creation from the line snapshot and never
/// recomputed, even if catalog prices later change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Snowflake id, generation-ordered
    pub id: i64,
    pub lines: Vec<OrderLine>,
    /// Free-text kitchen notes, possibly empty
    pub notes: String,
    pub table_number: u32,
    /// Sum of line totals in currency units, fixed at creation
    pub total: f64,
    /// Creation timestamp, UTC milliseconds
    pub created_at: i64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}

impl Order {
    /// Sum the given line snapshots in Decimal.
    pub fn total_of(lines: &[OrderLine]) -> f64 {
        lines
            .iter()
            .map(|l| Decimal::from_f64(l.line_total).unwrap_or_default())
            .sum::<Decimal>()
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuCategory;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem::new(id, id.to_uppercase(), price, MenuCategory::Food, "")
    }

    #[test]
    fn line_snapshot_copies_catalog_fields() {
        let it = item("tea-1", 20000.0);
        let line = OrderLine::snapshot(&it, 3);
        assert_eq!(line.menu_item_id, "tea-1");
        assert_eq!(line.unit_price, 20000.0);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.line_total, 60000.0);
    }

    #[test]
    fn line_total_rounds_half_up() {
        // 3 * 14.50 is exact; 3 * 0.105 is not
        let line = OrderLine::snapshot(&item("a", 0.105), 3);
        assert_eq!(line.line_total, 0.32);
    }

    #[test]
    fn order_total_sums_line_totals() {
        let lines = vec![
            OrderLine::snapshot(&item("a", 50000.0), 2),
            OrderLine::snapshot(&item("b", 20000.0), 1),
        ];
        assert_eq!(Order::total_of(&lines), 120000.0);
    }
}
