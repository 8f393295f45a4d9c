//! Application state façade
//!
//! The single authoritative owner of the cart and order stores. Created
//! once at application start, shared as `Arc<AppState>` with whichever view
//! host needs it, torn down never. The locks here are the store boundary:
//! user actions arrive one at a time today, and this is exactly where a
//! multi-user adaptation would keep its transactional discipline.
//!
//! Every successful mutation sends a [`StoreEvent`] so the presentation
//! layer knows to re-render from fresh snapshots.

use crate::cart::{CartLine, CartStore};
use crate::catalog::MenuCatalog;
use crate::checkout::{self, CheckoutRequest};
use crate::config::Config;
use crate::events::StoreEvent;
use crate::orders::OrderStore;
use crate::payment;
use parking_lot::RwLock;
use shared::error::OrderError;
use shared::models::MenuItem;
use shared::order::{Order, OrderStatus, OrderStatusCounts, PaymentStatus, StatusFilter};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Buffered store events; a lagging subscriber only misses redundant
/// re-render hints
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: MenuCatalog,
    cart: RwLock<CartStore>,
    orders: RwLock<OrderStore>,
    events: broadcast::Sender<StoreEvent>,
}

impl AppState {
    /// State with the venue's default menu.
    pub fn new(config: Config) -> Arc<Self> {
        Self::with_catalog(MenuCatalog::default(), config)
    }

    pub fn with_catalog(catalog: MenuCatalog, config: Config) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            config,
            catalog,
            cart: RwLock::new(CartStore::new()),
            orders: RwLock::new(OrderStore::new()),
            events,
        })
    }

    /// Receiver for change notifications. Dropping it is fine; events are
    /// fire-and-forget.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn notify(&self, event: StoreEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }

    // ==================== Cart ====================

    /// Add a menu item to the cart (merging into an existing line).
    pub fn add_to_cart(&self, item: &Arc<MenuItem>, quantity: u32) -> Result<i64, OrderError> {
        let line_id = self.cart.write().add_item(item, quantity)?;
        self.notify(StoreEvent::CartChanged);
        Ok(line_id)
    }

    /// Absolute quantity set; `0` removes the line, unknown ids are ignored.
    pub fn set_cart_quantity(&self, line_id: i64, quantity: u32) {
        if self.cart.write().set_quantity(line_id, quantity) {
            self.notify(StoreEvent::CartChanged);
        }
    }

    pub fn remove_cart_line(&self, line_id: i64) {
        if self.cart.write().remove_line(line_id) {
            self.notify(StoreEvent::CartChanged);
        }
    }

    /// Current cart lines, a cloned snapshot for rendering.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.read().lines().to_vec()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.read().total()
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.read().item_count()
    }

    // ==================== Checkout ====================

    /// Convert the cart into an order. Atomic from the caller's view: both
    /// locks are held across the snapshot, the insert, and the clear.
    pub fn checkout(&self, request: &CheckoutRequest) -> Result<i64, OrderError> {
        let mut cart = self.cart.write();
        let mut orders = self.orders.write();
        let order_id = checkout::checkout(&mut cart, &mut orders, request, &self.config)?;
        drop(orders);
        drop(cart);
        self.notify(StoreEvent::OrderCreated { id: order_id });
        self.notify(StoreEvent::CartChanged);
        Ok(order_id)
    }

    // ==================== Orders ====================

    pub fn cancel_order(&self, order_id: i64) {
        if self.orders.write().cancel_order(order_id) {
            self.notify(StoreEvent::OrderCancelled { id: order_id });
        }
    }

    pub fn update_status(&self, order_id: i64, status: OrderStatus) -> Result<(), OrderError> {
        self.orders.write().update_status(order_id, status)?;
        self.notify(StoreEvent::OrderUpdated { id: order_id });
        Ok(())
    }

    pub fn update_payment_status(
        &self,
        order_id: i64,
        payment_status: PaymentStatus,
    ) -> Result<(), OrderError> {
        self.orders
            .write()
            .update_payment_status(order_id, payment_status)?;
        self.notify(StoreEvent::OrderUpdated { id: order_id });
        Ok(())
    }

    /// All orders, most recent first, as a cloned snapshot.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().orders().to_vec()
    }

    /// Orders matching the filter, preserving the unfiltered relative order.
    pub fn orders_with_status(&self, filter: StatusFilter) -> Vec<Order> {
        self.orders.read().filter_by_status(filter).cloned().collect()
    }

    pub fn order_counts(&self) -> OrderStatusCounts {
        self.orders.read().counts_by_status()
    }

    pub fn get_order(&self, order_id: i64) -> Option<Order> {
        self.orders.read().get(order_id).cloned()
    }

    /// Payment QR image URL for an order's total, if the order exists.
    pub fn payment_qr_url(&self, order_id: i64) -> Option<String> {
        self.orders
            .read()
            .get(order_id)
            .map(|o| payment::qr_image_url(o.total, &self.config))
    }
}
