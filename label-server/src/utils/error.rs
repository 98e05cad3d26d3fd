//! Unified error handling
//!
//! Every failure is caught at the request boundary and turned into a
//! structured JSON response; nothing crashes the process.
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | [`AppError::BadRequest`] | 400 | `{"error": ...}` |
//! | [`AppError::PrintFailed`] | 500 | `{"success": false, "error": ...}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;
use zpl_printer::PrintError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-side input problem (malformed device address)
    #[error("{0}")]
    BadRequest(String),

    /// Label generation or transport failure
    #[error("{0}")]
    PrintFailed(String),
}

impl From<PrintError> for AppError {
    fn from(e: PrintError) -> Self {
        if e.is_address_error() {
            AppError::BadRequest(e.to_string())
        } else {
            AppError::PrintFailed(e.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::PrintFailed(msg) => {
                error!(target: "printing", error = %msg, "Print request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": msg })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
