//! Landing page routes and HTML page serving

use super::content::SiteContent;
use crate::cart::state::SharedState;
use crate::error::Result;
use axum::{extract::State, response::Html, response::IntoResponse, routing::get, Json, Router};

/// Creates routes for the site pages
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_page))
        .route("/menu", get(menu_page))
        .route("/api/site", get(site_content))
}

/// Endpoint: GET /api/site
async fn site_content(State(state): State<SharedState>) -> impl IntoResponse {
    Json(SiteContent::new(state.menu_url()))
}

/// Endpoint: GET /
async fn index_page(State(state): State<SharedState>) -> Result<Html<String>> {
    Ok(Html(state.load_page_html("index").await?))
}

/// Endpoint: GET /menu
async fn menu_page(State(state): State<SharedState>) -> Result<Html<String>> {
    Ok(Html(state.load_page_html("menu").await?))
}
