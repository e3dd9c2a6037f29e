//! Crate-wide error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cart::models::CartError;
use crate::reservation::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("No menu item with id \"{0}\"")]
    ItemNotFound(String),

    #[error(transparent)]
    InvalidReservation(#[from] ValidationError),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("QR encoding failed: {0}")]
    QrEncoding(#[from] qrcode::types::QrError),

    #[error("Image encoding failed: {0}")]
    ImageEncoding(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Short headline shown to the user alongside the description.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Cart(CartError::Empty) => "Empty order",
            AppError::ItemNotFound(_) => "Unknown item",
            AppError::InvalidReservation(_) => "Invalid reservation",
            AppError::PageNotFound(_) => "Not found",
            AppError::QrEncoding(_) | AppError::ImageEncoding(_) | AppError::Io(_) => {
                "Something went wrong"
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Cart(_) | AppError::InvalidReservation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ItemNotFound(_) | AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::QrEncoding(_) | AppError::ImageEncoding(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let mut body = json!({
            "error": {
                "title": self.title(),
                "description": self.to_string(),
            }
        });
        if let AppError::InvalidReservation(e) = &self {
            body["error"]["field"] = json!(e.field);
        }

        (status, Json(body)).into_response()
    }
}
