//! Eden's Restaurant menu service
//!
//! Serves the restaurant's landing content and menu, keeps an in-memory
//! order per browser session, renders the menu QR code and acknowledges
//! reservation requests. Nothing is persisted.

// Domain modules
pub mod cart;
pub mod mcp;
pub mod menu;
pub mod qr;
pub mod reservation;
pub mod site;

// Infrastructure
pub mod config;
pub mod error;
pub mod logger;
pub mod router;

pub use config::Config;
pub use error::AppError;
