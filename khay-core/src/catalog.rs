//! Menu catalog
//!
//! Static, read-only collection of purchasable items. Built once at startup;
//! the cart holds `Arc` references into it instead of copying entries.

use shared::models::{MenuCategory, MenuItem};
use std::sync::Arc;

/// Read-only menu
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<Arc<MenuItem>>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    /// Look up an item by catalog id.
    pub fn get(&self, id: &str) -> Option<&Arc<MenuItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items belonging to one category, in catalog order.
    pub fn by_category(&self, category: MenuCategory) -> impl Iterator<Item = &Arc<MenuItem>> {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MenuItem>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    /// The venue's standard menu (VND pricing).
    fn default() -> Self {
        Self::new(default_menu())
    }
}

fn default_menu() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        MenuItem::new(
            "burger-1",
            "Đồ ăn siu cấp JSC 1",
            120_000.0,
            Food,
            "https://i.ibb.co/RGJTs33k/JSC-ERM.png",
        ),
        MenuItem::new(
            "pizza-1",
            "Đồ ăn siu cấp JSC 2",
            150_000.0,
            Food,
            "https://i.ibb.co/RGJTs33k/JSC-ERM.png",
        ),
        MenuItem::new(
            "pasta-1",
            "Đồ ăn siu cấp JSC 3",
            145_000.0,
            Food,
            "https://i.ibb.co/RGJTs33k/JSC-ERM.png",
        ),
        MenuItem::new(
            "salad-1",
            "Lẩu femboi",
            250_000.0,
            Food,
            "https://i.ibb.co/RGJTs33k/JSC-ERM.png",
        ),
        MenuItem::new(
            "coffee-1",
            "Signature",
            45_000.0,
            Drink,
            "https://images.unsplash.com/photo-1592663527359-cf6642f54cff",
        ),
        MenuItem::new(
            "juice-1",
            "Trà Đào",
            50_000.0,
            Drink,
            "https://horecavn.com/wp-content/uploads/2024/05/tra-dao.jpg",
        ),
        MenuItem::new(
            "smoothie-1",
            "Trà Matcha",
            65_000.0,
            Drink,
            "https://amivietnam.com/wp-content/uploads/2024/03/tra-sua-matcha.jpg",
        ),
        MenuItem::new(
            "tea-1",
            "Chanh Dây",
            39_000.0,
            Drink,
            "https://tiemphonui.com/cdn/shop/articles/nuoc-cot-chanh-day.webp",
        ),
        MenuItem::new(
            "tea-2",
            "Soda Việt Quất",
            39_000.0,
            Drink,
            "https://tiemphonui.com/cdn/shop/articles/soda-viet-quat.webp",
        ),
        MenuItem::new("service-1", "Khăn lạnh", 5_000.0, Service, ""),
        MenuItem::new("service-2", "Phụ thu mang về", 10_000.0, Service, ""),
    ]
}
