//! Data models
//!
//! Shared between the state core and the presentation layer. All amounts are
//! plain currency units (`f64`); arithmetic on them is done in `Decimal` by
//! the core's money helpers.

pub mod menu_item;

// Re-exports
pub use menu_item::*;
