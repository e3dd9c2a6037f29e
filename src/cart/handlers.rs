//! REST API handlers for shopping cart operations
//!
//! Every handler resolves the cart from the body's `cartId`, falling back to
//! the `cart_session` cookie, and mints a session when neither is present.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::{AppError, Result};
use crate::menu::find_item;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart/:cart_id", get(get_cart))
        .route("/api/cart/add", post(add_item))
        .route("/api/cart/quantity", post(update_quantity))
        .route("/api/cart/remove", post(remove_item))
        .route("/api/cart/sync", post(sync_cart))
        .route("/api/checkout", post(checkout))
}

/// Attaches the session cookie when the session was created by this request
fn with_session(body: impl IntoResponse, session_id: &str, is_new_session: bool) -> Response {
    let mut response = body.into_response();

    if is_new_session {
        if let Ok(cookie) = HeaderValue::from_str(&session_cookie(session_id)) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }

    response
}

/// Endpoint: GET /api/cart/:cart_id
async fn get_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> impl IntoResponse {
    let cart = state.snapshot(&cart_id);
    Json(CartView::new(cart_id, &cart))
}

/// Endpoint: POST /api/cart/add
/// Adds one unit of a catalog item.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ItemInput>,
) -> Result<Response> {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let item = find_item(&payload.item_id).ok_or(AppError::ItemNotFound(payload.item_id))?;
    let view = state.with_cart(&cart_id, |cart| {
        let notice = cart.add(item);
        CartView::new(cart_id.clone(), cart).with_notice(notice)
    });

    tracing::debug!("Cart {}: added {}", cart_id, item.id);
    Ok(with_session(Json(view), &session_id, is_new_session))
}

/// Endpoint: POST /api/cart/quantity
async fn update_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<QuantityInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let view = state.update_cart(&cart_id, |cart| {
        cart.set_quantity(&payload.item_id, payload.quantity);
        CartView::new(cart_id.clone(), cart)
    });

    with_session(Json(view), &session_id, is_new_session)
}

/// Endpoint: POST /api/cart/remove
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ItemInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let view = state.update_cart(&cart_id, |cart| {
        cart.remove(&payload.item_id);
        CartView::new(cart_id.clone(), cart)
    });

    with_session(Json(view), &session_id, is_new_session)
}

/// Endpoint: POST /api/cart/sync
/// Replaces the backend cart with the selections held by the page.
async fn sync_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<SyncCartInput>,
) -> Result<Response> {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let cart = build_cart(&payload.items)?;
    let view = CartView::new(cart_id.clone(), &cart);
    state.replace_cart(&cart_id, cart);

    Ok(with_session(Json(view), &session_id, is_new_session))
}

/// Rebuilds a cart from `{id, quantity}` pairs. Repeated ids add up (capped
/// per line) and non-positive totals drop the line.
pub fn build_cart(selections: &[LineSelection]) -> Result<Cart> {
    let mut cart = Cart::new();
    for selection in selections {
        let item = find_item(&selection.id)
            .ok_or_else(|| AppError::ItemNotFound(selection.id.clone()))?;
        let current = cart.quantity_of(item.id).map(i64::from).unwrap_or(0);
        if current == 0 {
            if selection.quantity < 1 {
                continue;
            }
            cart.add(item);
        }
        cart.set_quantity(item.id, current.saturating_add(selection.quantity));
    }
    Ok(cart)
}

/// Endpoint: POST /api/checkout
/// Places the order and clears the cart.
async fn checkout(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutInput>,
) -> Result<Response> {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let receipt = state.checkout(&cart_id, payload.notes)?;
    tracing::info!(
        "Order placed for cart {}: {} ({})",
        cart_id,
        format_item_summary(&receipt.lines),
        receipt.total_display
    );

    let body = Json(CheckoutResponse {
        status: "checked_out".to_string(),
        cart_id,
        receipt,
    });
    Ok(with_session(body, &session_id, is_new_session))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(id: &str, quantity: i64) -> LineSelection {
        LineSelection {
            id: id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_build_cart_merges_duplicates() {
        let cart = build_cart(&[
            selection("starter-1", 2),
            selection("drink-1", 1),
            selection("starter-1", 1),
        ])
        .unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of("starter-1"), Some(3));
        assert_eq!(cart.total(), 850 * 3 + 250);
    }

    #[test]
    fn test_build_cart_drops_non_positive() {
        let cart = build_cart(&[selection("starter-1", 0), selection("drink-1", -2)]).unwrap();
        assert!(cart.is_empty());

        let cart = build_cart(&[selection("starter-1", 2), selection("starter-1", -2)]).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_build_cart_caps_repeated_large_quantities() {
        let cart = build_cart(&[selection("starter-1", i64::MAX), selection("starter-1", i64::MAX)])
            .unwrap();
        assert_eq!(cart.quantity_of("starter-1"), Some(MAX_LINE_QUANTITY));
    }

    #[test]
    fn test_build_cart_rejects_unknown_item() {
        let err = build_cart(&[selection("pizza", 1)]).unwrap_err();
        assert!(matches!(err, AppError::ItemNotFound(id) if id == "pizza"));
    }
}
