//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Lists the menu sections and items
pub const LIST_MENU_TOOL: &str = "list_menu";
/// Adds one unit of a menu item
pub const ADD_TO_CART_TOOL: &str = "add_to_cart";
/// Sets a line's quantity
pub const UPDATE_QUANTITY_TOOL: &str = "update_quantity";
/// Removes a line
pub const REMOVE_FROM_CART_TOOL: &str = "remove_from_cart";
/// Places the order
pub const CHECKOUT_TOOL: &str = "checkout";
/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/edens-menu.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "edens-menu";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

// =============================================================================
// Tool Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemArgs {
    pub item_id: String,
    pub cart_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityArgs {
    pub item_id: String,
    pub quantity: i64,
    pub cart_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutArgs {
    pub cart_id: Option<String>,
    pub notes: Option<String>,
}
