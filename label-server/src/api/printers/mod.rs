//! Printer API module
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /printers/{ip}/status | GET | Liveness probe |
//! | /printers/{ip}/print-product-label | POST | Product label |
//! | /printers/{ip}/print-list-label | POST | List/pallet label |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Printer router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/printers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{ip}/status", get(handler::status))
        .route("/{ip}/print-product-label", post(handler::print_product))
        .route("/{ip}/print-list-label", post(handler::print_list))
}
