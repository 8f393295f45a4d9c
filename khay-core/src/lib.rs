//! Khay ordering core
//!
//! In-memory state core for a small venue's point-of-sale flow: browse the
//! menu, build a cart, check out with a table number and payment choice,
//! then track the order through the list view.
//!
//! # Architecture
//!
//! ```text
//! MenuCatalog ──(selection)──▶ CartStore ──(checkout)──▶ OrderStore
//!                                  │                          │
//!                                  └───────── AppState ───────┘
//!                                                │
//!                                       StoreEvent broadcast
//! ```
//!
//! - **catalog**: static, read-only menu
//! - **cart**: in-progress selection, one line per menu item
//! - **orders**: placed orders, status and payment transitions, views
//! - **checkout**: cart -> order conversion, atomic from the caller's view
//! - **state**: single-instance façade the presentation layer talks to
//!
//! All state is volatile for the process lifetime. There is exactly one
//! mutator at a time; the locks in [`AppState`] mark the boundary where a
//! transactional discipline would go in a multi-user setting.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod events;
pub mod money;
pub mod orders;
pub mod payment;
pub mod state;

// Re-exports
pub use cart::{CartLine, CartStore};
pub use catalog::MenuCatalog;
pub use checkout::CheckoutRequest;
pub use config::Config;
pub use events::StoreEvent;
pub use orders::OrderStore;
pub use state::AppState;
