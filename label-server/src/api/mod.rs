//! API routes
//!
//! - [`health`] - service info
//! - [`printers`] - liveness check and label printing

use axum::{Router, middleware};
use http::Method;
use http::header::CONTENT_TYPE;
use tower_http::cors::{Any, CorsLayer};

pub mod health;
pub mod printers;

use crate::core::ServerState;

/// HTTP request logging middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = std::time::Instant::now();
    let response = next.run(request).await;
    let status = response.status();

    tracing::info!(
        target: "http_access",
        "{} {} {} in {}ms",
        method,
        uri,
        status,
        start.elapsed().as_millis()
    );

    response
}

/// Build the Axum router (without state or middleware)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(printers::router())
}

/// Build the fully configured application
///
/// The ERP front-end is served from arbitrary LAN origins, so CORS is
/// wildcard for GET/POST/OPTIONS with Content-Type.
pub fn build_app(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    build_router()
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(log_request))
}
