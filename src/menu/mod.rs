//! Menu Domain Module
//!
//! - Catalog models (MenuItem, Category, MenuSection)
//! - The hardcoded catalog and lookups
//! - Read-only REST handlers

pub mod catalog;
pub mod handlers;
pub mod models;

pub use catalog::{find_item, CATALOG};
pub use handlers::routes;
pub use models::{Category, MenuItem, MenuSection};
