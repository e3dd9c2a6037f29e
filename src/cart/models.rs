//! Shopping Cart Domain Models
//!
//! This module contains the cart value type and the data structures
//! exchanged by the cart endpoints.

use super::helpers::format_ksh;
use crate::menu::MenuItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A catalog item paired with how many of it were ordered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,

    /// Between 1 and `MAX_LINE_QUANTITY`
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.item.price_value) * u64::from(self.quantity)
    }
}

/// Transient message surfaced to the diner after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Failure modes of cart operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Please add items to your order before checking out.")]
    Empty,
}

/// Outcome of a successful checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub total_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub message: String,
}

/// Largest quantity a single line can hold
pub const MAX_LINE_QUANTITY: u32 = 999;

/// An insertion-ordered order holding at most one line per menu item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item.id == id)
            .map(|line| line.quantity)
    }

    /// Adds one unit of `item`, bumping the existing line if there is one.
    pub fn add(&mut self, item: &MenuItem) -> Notice {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
        } else {
            self.lines.push(CartLine {
                item: *item,
                quantity: 1,
            });
        }

        Notice {
            title: "Added to order".to_string(),
            description: format!("{} has been added to your order.", item.name),
        }
    }

    /// Sets the quantity of an existing line. Anything below 1 removes it and
    /// anything above `MAX_LINE_QUANTITY` is clamped.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        if quantity < 1 {
            self.remove(id);
            return;
        }

        let quantity = u32::try_from(quantity)
            .unwrap_or(MAX_LINE_QUANTITY)
            .min(MAX_LINE_QUANTITY);
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.item.id != id);
    }

    /// Sum of price times quantity over every line.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of units in the cart, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Places the order and empties the cart.
    ///
    /// An empty cart is rejected and left untouched.
    pub fn checkout(&mut self, notes: Option<String>) -> Result<Receipt, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }

        let total = self.total();
        let total_display = format_ksh(total);
        let notes = notes.filter(|n| !n.trim().is_empty());

        Ok(Receipt {
            lines: std::mem::take(&mut self.lines),
            total,
            message: format!("Order placed successfully! Total: {}", total_display),
            total_display,
            notes,
        })
    }
}

// =============================================================================
// Wire Models
// =============================================================================

/// Body of POST /api/cart/add and POST /api/cart/remove
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub item_id: String,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Body of POST /api/cart/quantity
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityInput {
    pub item_id: String,

    /// Requested quantity; values below 1 remove the line
    pub quantity: i64,

    pub cart_id: Option<String>,
}

/// A single `{id, quantity}` pair pushed by the menu page
#[derive(Debug, Deserialize)]
pub struct LineSelection {
    pub id: String,
    pub quantity: i64,
}

/// Body of POST /api/cart/sync
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCartInput {
    pub items: Vec<LineSelection>,

    pub cart_id: Option<String>,
}

/// Body of POST /api/checkout
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub cart_id: Option<String>,

    /// Special instructions for the kitchen
    pub notes: Option<String>,
}

/// Snapshot of a cart as returned by every cart endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: String,
    pub items: Vec<CartLine>,
    pub item_count: u64,
    pub total: u64,
    pub total_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl CartView {
    pub fn new(cart_id: String, cart: &Cart) -> Self {
        let total = cart.total();
        Self {
            cart_id,
            items: cart.lines().to_vec(),
            item_count: cart.item_count(),
            total,
            total_display: format_ksh(total),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Response for checkout operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: String,
    pub cart_id: String,
    pub receipt: Receipt,
}
