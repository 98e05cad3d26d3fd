//! Service info route - public, used by the ERP to detect the relay

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

#[derive(Serialize)]
pub struct ServiceInfo {
    service: &'static str,
    status: &'static str,
    version: &'static str,
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Label Print Server",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
