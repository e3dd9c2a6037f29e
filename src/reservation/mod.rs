//! Reservation Module
//!
//! - Form and slot models (ReservationForm, TimeSlot, GuestCount)
//! - Field validation
//! - Submission endpoint that only confirms

pub mod handlers;
pub mod models;
pub mod validation;

pub use handlers::routes;
pub use models::{GuestCount, Reservation, ReservationForm, TimeSlot};
pub use validation::ValidationError;
