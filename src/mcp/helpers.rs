//! JSON-RPC envelopes and tool payloads for the menu assistant.
//!
//! Every tool result carries `_meta` pointing at the menu widget template,
//! tagged with the cart id when the call touched a cart.

use super::models::WIDGET_TEMPLATE_URI;
use serde_json::{json, Value};

/// `_meta` block attached to tools, resources and tool results.
///
/// `cart_id` ties the rendered menu widget to the order it should show.
pub fn widget_meta(cart_id: Option<&str>) -> Value {
    let mut meta = json!({
        "openai/outputTemplate": WIDGET_TEMPLATE_URI,
        "openai/toolInvocation/invoking": "Opening the menu",
        "openai/toolInvocation/invoked": "Menu ready",
        "openai/widgetAccessible": true,
    });

    if let Some(id) = cart_id {
        meta["openai/widgetSessionId"] = json!(id);
    }

    meta
}

/// Successful reply echoing the caller's request `id`.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

/// Error reply; `id` is `null` when the request could not be parsed.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message.into() }
    })
}

/// Result of a menu or cart tool: a sentence for the assistant to relay,
/// the order or menu as structured data, and the widget metadata.
pub fn tool_result(text: impl Into<String>, structured: Value, cart_id: Option<&str>) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "structuredContent": structured,
        "_meta": widget_meta(cart_id),
    })
}
