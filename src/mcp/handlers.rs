//! MCP (Model Context Protocol) route handlers
//!
//! `handle_tool_call` is public so the tools can be exercised without HTTP.

use super::{helpers::*, models::*};
use crate::cart::{
    helpers::{format_item_summary, get_or_create_cart_id},
    models::CartView,
    state::{AppState, SharedState},
};
use crate::error::AppError;
use crate::menu::{catalog::menu_sections, find_item, MenuItem};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse))
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!("JSON-RPC parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!("MCP call: {} (id: {})", method_name, id);

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" | "ping" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => match handle_resources_read(&state).await {
            Ok(result) => rpc_success(id, result),
            Err(e) => {
                tracing::error!("Widget template unavailable: {}", e);
                rpc_error(id, INTERNAL_ERROR, e.to_string())
            }
        },
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(json!({}));

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        _ => {
            tracing::warn!("Unknown MCP method: {}", method_name);
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true, "subscribe": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn item_schema(extra: Value) -> Value {
    let mut properties = json!({
        "itemId": { "type": "string", "description": "Menu item id, e.g. starter-1" },
        "cartId": { "type": "string" }
    });
    if let (Some(props), Some(extra)) = (properties.as_object_mut(), extra.as_object()) {
        props.extend(extra.clone());
    }
    let mut required = vec!["itemId"];
    if extra.get("quantity").is_some() {
        required.push("quantity");
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": LIST_MENU_TOOL,
                "title": "Show the menu",
                "description": "Lists every menu section with its items and prices.",
                "inputSchema": { "type": "object", "properties": {}, "additionalProperties": false },
                "_meta": widget_meta(None)
            },
            {
                "name": ADD_TO_CART_TOOL,
                "title": "Add item to order",
                "description": "Adds one unit of a menu item to the order and returns the order.",
                "inputSchema": item_schema(json!({})),
                "_meta": widget_meta(None)
            },
            {
                "name": UPDATE_QUANTITY_TOOL,
                "title": "Change quantity",
                "description": "Sets how many of an item are ordered. Zero or less removes it.",
                "inputSchema": item_schema(json!({ "quantity": { "type": "integer" } })),
                "_meta": widget_meta(None)
            },
            {
                "name": REMOVE_FROM_CART_TOOL,
                "title": "Remove item",
                "description": "Removes an item from the order.",
                "inputSchema": item_schema(json!({})),
                "_meta": widget_meta(None)
            },
            {
                "name": CHECKOUT_TOOL,
                "title": "Place order",
                "description": "Places the order, clearing it and returning the total.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "cartId": { "type": "string" },
                        "notes": { "type": "string" }
                    },
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            }
        ],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "name": "Eden's Restaurant menu",
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/read` request.
async fn handle_resources_read(state: &AppState) -> crate::error::Result<Value> {
    let html = state.load_page_html("menu").await?;
    Ok(json!({
        "contents": [{
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "text": html,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    }))
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    match name {
        LIST_MENU_TOOL => Ok(tool_result(
            format!("The menu has {} sections.", menu_sections().len()),
            json!({ "sections": menu_sections() }),
            None,
        )),
        ADD_TO_CART_TOOL => handle_add_tool(state, parse_args(args)?),
        UPDATE_QUANTITY_TOOL => handle_update_quantity_tool(state, parse_args(args)?),
        REMOVE_FROM_CART_TOOL => handle_remove_tool(state, parse_args(args)?),
        CHECKOUT_TOOL => handle_checkout_tool(state, parse_args(args)?),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, String> {
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))
}

fn lookup(item_id: String) -> Result<&'static MenuItem, String> {
    find_item(&item_id).ok_or_else(|| AppError::ItemNotFound(item_id).to_string())
}

fn cart_result(text: String, view: CartView) -> Result<Value, String> {
    let cart_id = view.cart_id.clone();
    let structured = serde_json::to_value(&view).map_err(|e| e.to_string())?;
    Ok(tool_result(text, structured, Some(&cart_id)))
}

/// Handles the add_to_cart tool functionality
fn handle_add_tool(state: &AppState, input: ItemArgs) -> Result<Value, String> {
    let item = lookup(input.item_id)?;
    let cart_id = get_or_create_cart_id(input.cart_id);

    let view = state.with_cart(&cart_id, |cart| {
        let notice = cart.add(item);
        CartView::new(cart_id.clone(), cart).with_notice(notice)
    });

    let text = format!(
        "{} has been added to your order. Order total: {}.",
        item.name, view.total_display
    );
    cart_result(text, view)
}

/// Handles the update_quantity tool functionality
fn handle_update_quantity_tool(state: &AppState, input: QuantityArgs) -> Result<Value, String> {
    let item = lookup(input.item_id)?;
    let cart_id = get_or_create_cart_id(input.cart_id);

    let view = state.update_cart(&cart_id, |cart| {
        cart.set_quantity(item.id, input.quantity);
        CartView::new(cart_id.clone(), cart)
    });

    let text = format!(
        "Order has {} item(s), total {}.",
        view.item_count, view.total_display
    );
    cart_result(text, view)
}

/// Handles the remove_from_cart tool functionality
fn handle_remove_tool(state: &AppState, input: ItemArgs) -> Result<Value, String> {
    let item = lookup(input.item_id)?;
    let cart_id = get_or_create_cart_id(input.cart_id);

    let view = state.update_cart(&cart_id, |cart| {
        cart.remove(item.id);
        CartView::new(cart_id.clone(), cart)
    });

    let text = format!("Removed {}. Order total: {}.", item.name, view.total_display);
    cart_result(text, view)
}

/// Handles the checkout tool functionality
fn handle_checkout_tool(state: &AppState, input: CheckoutArgs) -> Result<Value, String> {
    let cart_id = get_or_create_cart_id(input.cart_id);

    let receipt = state
        .checkout(&cart_id, input.notes)
        .map_err(|e| format!("Empty order: {}", e))?;
    tracing::info!(
        "MCP checkout for cart {}: {} ({})",
        cart_id,
        format_item_summary(&receipt.lines),
        receipt.total_display
    );

    let message = receipt.message.clone();
    let structured = json!({
        "cartId": cart_id,
        "items": [],
        "checkout": true,
        "receipt": receipt,
    });
    Ok(tool_result(message, structured, Some(&cart_id)))
}
