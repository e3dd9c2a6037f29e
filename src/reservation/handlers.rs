//! Reservation endpoints
//!
//! Submissions are validated and acknowledged. Nothing is stored.

use super::models::{ReservationConfirmation, ReservationForm, ReservationOptions};
use crate::cart::state::SharedState;
use crate::error::Result;
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for the reservation form
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/reservations", post(submit_reservation))
        .route("/api/reservations/options", get(reservation_options))
}

/// Endpoint: GET /api/reservations/options
async fn reservation_options() -> impl IntoResponse {
    Json(ReservationOptions::new())
}

/// Endpoint: POST /api/reservations
async fn submit_reservation(Json(form): Json<ReservationForm>) -> Result<impl IntoResponse> {
    let today = chrono::Local::now().date_naive();
    let reservation = form.validate(today)?;

    tracing::info!(
        "Reservation request: {} guests on {} at {}",
        reservation.guests,
        reservation.date,
        reservation.time
    );

    Ok(Json(ReservationConfirmation {
        status: "submitted".to_string(),
        message: reservation.confirmation_message(),
    }))
}
