//! End-to-end tests for the printer API
//!
//! Drives the composed app as a tower `Service` and points it at a mock
//! printer listening on an ephemeral local port.

use std::time::Duration;

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::io::AsyncReadExt;
use tower::Service;

use label_server::api::build_app;
use label_server::{Config, ServerState};

fn test_config(printer_port: u16) -> Config {
    Config {
        server_port: 0,
        printer_port,
        ping_timeout: Duration::from_millis(500),
        connect_timeout: Duration::from_secs(2),
        write_timeout: Duration::from_secs(3),
        max_copies: 50,
        label_width: 400,
        label_height: 240,
    }
}

async fn call(app: &mut axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.call(request).await.expect("router call failed");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Spawn a one-connection mock printer; returns its port and a handle
/// resolving to the received bytes.
async fn mock_printer() -> (u16, tokio::task::JoinHandle<Vec<u8>>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });
    (port, handle)
}

/// A port that is bound and immediately released, so connecting is refused
async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[tokio::test]
async fn service_info() {
    let mut app = build_app(ServerState::new(test_config(9100)));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert!(body["service"].as_str().is_some());
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn status_rejects_malformed_ip() {
    let mut app = build_app(ServerState::new(test_config(9100)));

    for bad in ["not-an-ip", "999.1.1.1"] {
        let request = Request::builder()
            .uri(format!("/printers/{bad}/status"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(&mut app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "for input {bad}");
        assert!(body["error"].as_str().is_some());
    }
}

#[tokio::test]
async fn status_reports_offline_for_closed_port() {
    let port = closed_port().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let started = std::time::Instant::now();
    let request = Request::builder()
        .uri("/printers/127.0.0.1/status")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["online"], false);
    assert_eq!(body["ip"], "127.0.0.1");
    assert!(body["checked_at"].as_str().is_some());
    // Bounded by the probe timeout, not hanging
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn status_reports_online_for_listening_port() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = Request::builder()
        .uri("/printers/127.0.0.1/status")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["online"], true);
}

#[tokio::test]
async fn print_product_label_end_to_end() {
    let (port, received) = mock_printer().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = post_json(
        "/printers/127.0.0.1/print-product-label",
        json!({"name": "Cement 50kg", "barcode": "123456", "quantity": 5, "copies": 2}),
    );
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let zpl = String::from_utf8(received.await.unwrap()).unwrap();
    assert!(zpl.contains("^FDCement 50kg^FS"));
    assert!(zpl.contains("^FD123456^FS"));
    assert!(zpl.contains("^FD5^FS"));
    assert!(zpl.contains("^PQ2"));
}

#[tokio::test]
async fn print_product_label_sanitizes_markup_in_fields() {
    let (port, received) = mock_printer().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = post_json(
        "/printers/127.0.0.1/print-product-label",
        json!({"name": "Ce^ment~\nmix", "barcode": "12^34", "copies": 1}),
    );
    let (status, _) = call(&mut app, request).await;
    assert_eq!(status, StatusCode::OK);

    let zpl = String::from_utf8(received.await.unwrap()).unwrap();
    assert!(zpl.contains("^FDCement mix^FS"));
    assert!(zpl.contains("^FD1234^FS"));
}

#[tokio::test]
async fn print_product_label_quantities_list() {
    let (port, received) = mock_printer().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = post_json(
        "/printers/127.0.0.1/print-product-label",
        json!({
            "name": "Mix",
            "barcode": "42",
            "quantities": [
                {"value": 2, "unit": "kg"},
                {"value": 500, "unit": "g"}
            ]
        }),
    );
    let (status, _) = call(&mut app, request).await;
    assert_eq!(status, StatusCode::OK);

    let zpl = String::from_utf8(received.await.unwrap()).unwrap();
    assert!(zpl.contains("^FD2 kg / 500 g^FS"));
}

#[tokio::test]
async fn print_product_label_clamps_copies() {
    let (port, received) = mock_printer().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = post_json(
        "/printers/127.0.0.1/print-product-label",
        json!({"name": "X", "barcode": "1", "copies": 999}),
    );
    let (status, _) = call(&mut app, request).await;
    assert_eq!(status, StatusCode::OK);

    let zpl = String::from_utf8(received.await.unwrap()).unwrap();
    assert!(zpl.contains("^PQ50"));
}

#[tokio::test]
async fn print_product_label_transport_failure() {
    let port = closed_port().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = post_json(
        "/printers/127.0.0.1/print-product-label",
        json!({"name": "X", "barcode": "1"}),
    );
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("127.0.0.1"));
}

#[tokio::test]
async fn print_product_label_rejects_malformed_body() {
    let mut app = build_app(ServerState::new(test_config(9100)));

    let request = Request::builder()
        .method("POST")
        .uri("/printers/127.0.0.1/print-product-label")
        .header("content-type", "application/json")
        .body(Body::from("this is not json"))
        .unwrap();
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn print_product_label_rejects_missing_content_type() {
    let mut app = build_app(ServerState::new(test_config(9100)));

    let request = Request::builder()
        .method("POST")
        .uri("/printers/127.0.0.1/print-product-label")
        .body(Body::from(r#"{"name": "X", "barcode": "1"}"#))
        .unwrap();
    let (status, body) = call(&mut app, request).await;

    // Not a JSON request: structured 400, not the extractor's default 415
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn print_list_label_rejects_mistyped_field() {
    let mut app = build_app(ServerState::new(test_config(9100)));

    let request = post_json(
        "/printers/127.0.0.1/print-list-label",
        json!({"name": "X", "qr_data": "1", "copies": "abc"}),
    );
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn print_list_label_end_to_end() {
    let (port, received) = mock_printer().await;
    let mut app = build_app(ServerState::new(test_config(port)));

    let request = post_json(
        "/printers/127.0.0.1/print-list-label",
        json!({"name": "Pallet A", "qr_data": "PL-2026-000123456789", "copies": 1}),
    );
    let (status, body) = call(&mut app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let zpl = String::from_utf8(received.await.unwrap()).unwrap();
    assert!(zpl.contains("^FDLA,PL-2026-000123456789^FS"));
    // Human-readable echo capped at 15 chars
    assert!(zpl.contains("^FDPL-2026-0001234^FS"));
    assert!(zpl.contains("^PQ1"));
}

#[tokio::test]
async fn cors_headers_present() {
    let mut app = build_app(ServerState::new(test_config(9100)));

    let request = Request::builder()
        .uri("/")
        .header("origin", "http://192.168.1.20:8080")
        .body(Body::empty())
        .unwrap();
    let response = app.call(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
