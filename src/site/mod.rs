//! Landing Page Module
//!
//! Static marketing content and the HTML pages served from the assets
//! directory.

pub mod content;
pub mod handlers;

pub use handlers::routes;
