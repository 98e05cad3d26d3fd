//! # zpl-printer
//!
//! ZPL label printer library - low-level label generation and delivery only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ZPL document building
//! - Text sanitation for `^FD` fields
//! - Quantity/unit display formatting
//! - Network printing (TCP port 9100) with bounded timeouts
//!
//! Business logic (WHAT to print, HTTP surface) should stay in application
//! code - see `label-server`.
//!
//! ## Example
//!
//! ```ignore
//! use zpl_printer::{LabelOptions, NetworkPrinter, Printer, generate_product_label};
//!
//! let opts = LabelOptions::default();
//! let zpl = generate_product_label(
//!     "Cement 50kg",
//!     "123456",
//!     "5 pcs",
//!     2,
//!     &opts,
//!     chrono::Local::now(),
//! );
//!
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(zpl.as_bytes()).await?;
//! ```

mod error;
mod label;
mod printer;
mod text;
mod zpl;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use label::{
    LabelOptions, build_unit_info, clamp_copies, generate_list_label, generate_product_label,
};
pub use printer::{NetworkPrinter, PRINTER_PORT, Printer};
pub use text::{MAX_TEXT_LEN, clean_text, clean_text_limited, format_smart_numbers};
pub use zpl::{Justify, ZplBuilder};
