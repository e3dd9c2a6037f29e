//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for session handling and formatting.

use super::models::CartLine;
use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Name of the cookie carrying the cart session
pub const SESSION_COOKIE: &str = "cart_session";

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Reads the session id from the `cart_session` cookie.
///
/// Returns the id and whether it was freshly minted (and so still needs to
/// be handed to the client in a `Set-Cookie` header).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string());

    match existing {
        Some(id) => (id, false),
        None => (get_or_create_cart_id(None), true),
    }
}

/// An explicit `cart_id` in the body wins over the session cookie.
pub fn get_or_default_cart_id(cart_id: Option<String>, session_id: &str) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| session_id.to_string())
}

pub fn session_cookie(session_id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id)
}

/// Formats an amount of Kenyan shillings with thousands separators.
///
/// Example output: `"KSh 12,500"`.
pub fn format_ksh(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("KSh {}", grouped)
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Mimosa, 1x Bulgogi"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.item.name))
        .collect::<Vec<_>>()
        .join(", ")
}
