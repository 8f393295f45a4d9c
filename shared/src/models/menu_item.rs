//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category (fixed set, later catalog variant)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Food,
    Drink,
    Service,
}

/// Purchasable catalog entry
///
/// Defined at process start and never mutated. Carts hold references to
/// these; orders snapshot the fields they need at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Catalog-unique id (e.g. "tea-1")
    pub id: String,
    pub name: String,
    /// Price per unit in currency units
    pub unit_price: f64,
    pub category: MenuCategory,
    /// Image URL, consumed by the presentation layer only
    pub image: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        category: MenuCategory,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            category,
            image: image.into(),
        }
    }
}
