//! Printer API handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use zpl_printer::{Printer, build_unit_info, generate_list_label, generate_product_label};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// A field the ERP may send either as a JSON number or a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn as_text(&self) -> String {
        match self {
            // f64 Display already omits a superfluous fractional part
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// One quantity/unit pair from the `quantities` list
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct QuantityEntry {
    pub value: Option<FieldValue>,
    pub unit: String,
}

fn default_copies() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProductLabelRequest {
    pub name: String,
    pub barcode: String,
    pub quantity: Option<FieldValue>,
    pub quantities: Vec<QuantityEntry>,
    pub unit_info: Option<String>,
    pub copies: i64,
}

impl Default for ProductLabelRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            barcode: String::new(),
            quantity: None,
            quantities: Vec::new(),
            unit_info: None,
            copies: default_copies(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListLabelRequest {
    pub name: String,
    pub qr_data: String,
    pub copies: i64,
}

impl Default for ListLabelRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            qr_data: String::new(),
            copies: default_copies(),
        }
    }
}

#[derive(Serialize)]
pub struct PrinterStatus {
    pub ip: String,
    pub online: bool,
    pub checked_at: String,
}

#[derive(Serialize)]
pub struct PrintResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /printers/{ip}/status - fast reachability probe for the UI indicator
pub async fn status(
    State(state): State<ServerState>,
    Path(ip): Path<String>,
) -> AppResult<Json<PrinterStatus>> {
    let printer = state.printer(&ip)?;
    let online = printer.is_online().await;
    info!(
        "Printer {} status requested -> {}",
        ip,
        if online { "online" } else { "offline" }
    );

    Ok(Json(PrinterStatus {
        ip,
        online,
        checked_at: Local::now().format("%H:%M:%S").to_string(),
    }))
}

/// Unwrap a JSON body, turning every extractor rejection (wrong
/// content-type, syntax error, mistyped field) into a structured 400
fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(body)
}

/// POST /printers/{ip}/print-product-label
pub async fn print_product(
    State(state): State<ServerState>,
    Path(ip): Path<String>,
    payload: Result<Json<ProductLabelRequest>, JsonRejection>,
) -> AppResult<Json<PrintResponse>> {
    let req = require_json(payload)?;
    let printer = state.printer(&ip)?;

    let pairs: Vec<(String, String)> = req
        .quantities
        .iter()
        .map(|q| {
            let value = q.value.as_ref().map(FieldValue::as_text).unwrap_or_default();
            (value, q.unit.clone())
        })
        .collect();
    let quantity = req.quantity.as_ref().map(FieldValue::as_text);
    let unit_info = build_unit_info(req.unit_info.as_deref(), &pairs, quantity.as_deref());

    let zpl = generate_product_label(
        &req.name,
        &req.barcode,
        &unit_info,
        req.copies,
        &state.label_options(),
        Local::now(),
    );
    printer.print(zpl.as_bytes()).await?;

    info!("Product label sent to {}", ip);
    Ok(Json(PrintResponse {
        success: true,
        message: "Product label sent",
    }))
}

/// POST /printers/{ip}/print-list-label
pub async fn print_list(
    State(state): State<ServerState>,
    Path(ip): Path<String>,
    payload: Result<Json<ListLabelRequest>, JsonRejection>,
) -> AppResult<Json<PrintResponse>> {
    let req = require_json(payload)?;
    let printer = state.printer(&ip)?;

    let zpl = generate_list_label(&req.name, &req.qr_data, req.copies, &state.label_options());
    printer.print(zpl.as_bytes()).await?;

    info!("List label sent to {}", ip);
    Ok(Json(PrintResponse {
        success: true,
        message: "List label sent",
    }))
}
