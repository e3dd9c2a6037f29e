//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - The cart value type and its transitions (add, set quantity, remove, checkout)
//! - Session and price formatting helpers
//! - Per-session cart storage
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, CartError, CartLine, Notice, Receipt};
pub use state::{AppState, SharedState};
