//! Menu QR Code Module

pub mod handlers;
pub mod render;

pub use handlers::routes;
