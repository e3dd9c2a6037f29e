//! Read-only menu endpoints

use super::catalog::{find_item, menu_sections};
use crate::cart::state::SharedState;
use crate::error::{AppError, Result};
use axum::{extract::Path, response::IntoResponse, routing::get, Json, Router};

/// Creates routes for browsing the catalog
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/menu", get(list_menu))
        .route("/api/menu/:item_id", get(get_item))
}

/// Endpoint: GET /api/menu
async fn list_menu() -> impl IntoResponse {
    Json(menu_sections())
}

/// Endpoint: GET /api/menu/:item_id
async fn get_item(Path(item_id): Path<String>) -> Result<impl IntoResponse> {
    let item = find_item(&item_id).ok_or(AppError::ItemNotFound(item_id))?;
    Ok(Json(*item))
}
