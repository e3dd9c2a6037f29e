//! QR code endpoints for the menu page URL

use super::render::{render_png, render_svg, DOWNLOAD_FILE_NAME};
use crate::cart::state::SharedState;
use crate::error::Result;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Creates routes for the menu QR code
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/qr", get(menu_qr))
        .route("/api/qr/menu.svg", get(menu_qr_svg))
        .route("/api/qr/menu.png", get(menu_qr_png))
}

#[derive(Serialize)]
struct MenuQr {
    url: String,
    svg: String,
}

/// Endpoint: GET /api/qr
async fn menu_qr(State(state): State<SharedState>) -> Result<impl IntoResponse> {
    let url = state.menu_url();
    let svg = render_svg(&url)?;
    Ok(Json(MenuQr { url, svg }))
}

/// Endpoint: GET /api/qr/menu.svg
async fn menu_qr_svg(State(state): State<SharedState>) -> Result<impl IntoResponse> {
    let svg = render_svg(&state.menu_url())?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Endpoint: GET /api/qr/menu.png
/// Served as an attachment so browsers download it.
async fn menu_qr_png(State(state): State<SharedState>) -> Result<impl IntoResponse> {
    let png = render_png(&state.menu_url())?;
    let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME);
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        png,
    ))
}
