//! Integration tests for the MCP (Model Context Protocol) surface
//!
//! These tests verify:
//! - Server initialization and handshake
//! - Tool and resource discovery
//! - Tool execution (list_menu, add_to_cart, update_quantity, remove_from_cart, checkout)
//! - Error handling

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use edens_menu::cart::AppState;
use edens_menu::router::create_app_router;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new());
    create_app_router(state)
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/event-stream"
    );

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();
    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "edens-menu");
    assert!(result["capabilities"]["tools"]["listChanged"]
        .as_bool()
        .unwrap());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;
    assert_eq!(status, StatusCode::OK);

    let tools = body["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 5);

    let add = tools.iter().find(|t| t["name"] == "add_to_cart").unwrap();
    assert_eq!(add["title"], "Add item to order");
    assert!(add["inputSchema"]["properties"]["itemId"].is_object());

    let checkout = tools.iter().find(|t| t["name"] == "checkout").unwrap();
    assert!(checkout["inputSchema"]["properties"]["notes"].is_object());
}

#[tokio::test]
async fn test_mcp_resources_list_and_read() {
    let app = create_test_app();

    let (_, listed) = send_jsonrpc_request(&app, "resources/list", None, 3).await;
    let resources = listed["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["uri"], "ui://widget/edens-menu.html");
    assert_eq!(resources[0]["mimeType"], "text/html+skybridge");

    let (status, read) = send_jsonrpc_request(&app, "resources/read", None, 4).await;
    assert_eq!(status, StatusCode::OK);
    let content = &read["result"]["contents"][0];
    assert_eq!(content["uri"], "ui://widget/edens-menu.html");
    assert!(content["text"].is_string());
}

#[tokio::test]
async fn test_mcp_resources_read_without_assets() {
    let state = Arc::new(AppState::with_settings(
        PathBuf::from("no-such-assets-dir"),
        "http://localhost:3000",
    ));
    let app = create_app_router(state);

    let (status, body) = send_jsonrpc_request(&app, "resources/read", None, 20).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32603);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("menu"));
}

#[tokio::test]
async fn test_mcp_list_menu() {
    let app = create_test_app();

    let body = call_tool(&app, "list_menu", json!({}), 5).await;
    let sections = body["result"]["structuredContent"]["sections"]
        .as_array()
        .unwrap();

    let titles: Vec<_> = sections.iter().map(|s| s["title"].clone()).collect();
    assert_eq!(
        titles,
        vec![
            json!("Starters"),
            json!("Main Courses"),
            json!("Desserts"),
            json!("Drinks")
        ]
    );
}

#[tokio::test]
async fn test_mcp_order_flow() {
    let app = create_test_app();
    let cart = "mcp-flow-cart";

    call_tool(&app, "add_to_cart", json!({ "cartId": cart, "itemId": "starter-1" }), 6).await;
    let body = call_tool(&app, "add_to_cart", json!({ "cartId": cart, "itemId": "starter-1" }), 7).await;

    let structured = &body["result"]["structuredContent"];
    assert_eq!(structured["cartId"], cart);
    assert_eq!(structured["items"].as_array().unwrap().len(), 1);
    assert_eq!(structured["items"][0]["quantity"], 2);
    assert_eq!(structured["total"], 1700);
    assert_eq!(structured["notice"]["title"], "Added to order");
    assert_eq!(
        body["result"]["_meta"]["openai/widgetSessionId"],
        cart
    );

    let body = call_tool(&app, "add_to_cart", json!({ "cartId": cart, "itemId": "dessert-1" }), 8).await;
    assert_eq!(body["result"]["structuredContent"]["total"], 2150);

    let body = call_tool(&app, "remove_from_cart", json!({ "cartId": cart, "itemId": "starter-1" }), 9).await;
    assert_eq!(body["result"]["structuredContent"]["total"], 450);

    let body = call_tool(&app, "checkout", json!({ "cartId": cart }), 10).await;
    let result = &body["result"];
    assert_eq!(
        result["content"][0]["text"],
        "Order placed successfully! Total: KSh 450"
    );
    assert_eq!(result["structuredContent"]["checkout"], true);
    assert_eq!(result["structuredContent"]["receipt"]["total"], 450);

    // The cart is gone after checkout
    let body = call_tool(&app, "checkout", json!({ "cartId": cart }), 11).await;
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn test_mcp_update_quantity_to_zero_removes() {
    let app = create_test_app();
    let cart = "mcp-qty-cart";

    call_tool(&app, "add_to_cart", json!({ "cartId": cart, "itemId": "drink-4" }), 12).await;
    let body = call_tool(
        &app,
        "update_quantity",
        json!({ "cartId": cart, "itemId": "drink-4", "quantity": 3 }),
        13,
    )
    .await;
    assert_eq!(body["result"]["structuredContent"]["itemCount"], 3);
    assert_eq!(body["result"]["structuredContent"]["total"], 1650);

    let body = call_tool(
        &app,
        "update_quantity",
        json!({ "cartId": cart, "itemId": "drink-4", "quantity": 0 }),
        14,
    )
    .await;
    assert!(body["result"]["structuredContent"]["items"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_mcp_checkout_empty_cart() {
    let app = create_test_app();

    let body = call_tool(&app, "checkout", json!({ "cartId": "nonexistent-cart" }), 15).await;

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().starts_with("Empty order"));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 16).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 16);
    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["error"]["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app();

    let body = call_tool(&app, "unknown_tool", json!({}), 17).await;

    assert_eq!(body["error"]["code"], -32602);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_tool_call_invalid_arguments() {
    let app = create_test_app();

    let body = call_tool(&app, "add_to_cart", json!({ "invalid_field": "value" }), 18).await;

    assert_eq!(body["error"]["code"], -32602);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid arguments"));
}

#[tokio::test]
async fn test_mcp_ping() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 19).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({}));
}
