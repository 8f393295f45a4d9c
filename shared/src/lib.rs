//! Shared types for the Khay ordering system
//!
//! Data models, order types, error types and id/time utilities used by
//! the state core and its presentation-layer hosts.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use error::OrderError;
pub use serde::{Deserialize, Serialize};
