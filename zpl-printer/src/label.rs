//! Label document generators
//!
//! Turns sanitized request fields into complete ZPL documents for a fixed
//! 400x240 dot canvas (50x30mm at 203dpi). Output is deterministic given
//! identical inputs and timestamp.

use chrono::{DateTime, Local};

use crate::text::{clean_text, format_smart_numbers};
use crate::zpl::{Justify, ZplBuilder};

/// List labels print on fixed 30mm stock (240 dots at 203dpi)
const LIST_LABEL_HEIGHT: u32 = 240;

/// Canvas and safety limits for label generation
///
/// Passed explicitly at call time so generation carries no ambient state.
#[derive(Debug, Clone)]
pub struct LabelOptions {
    /// Canvas width in dots
    pub width: u32,
    /// Canvas height in dots
    pub height: u32,
    /// Upper bound for the `^PQ` repeat count
    pub max_copies: u32,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 240,
            max_copies: 50,
        }
    }
}

/// Clamp a requested copy count to `[1, max_copies]`
pub fn clamp_copies(copies: i64, max_copies: u32) -> u32 {
    copies.clamp(1, i64::from(max_copies.max(1))) as u32
}

/// Resolve a single display string for quantity/unit information.
///
/// Exactly one source wins, in this order:
/// 1. `unit_info` - a pre-formatted string, returned as-is after sanitation
///    and number formatting when the raw input is non-empty.
/// 2. `quantities` - ordered `(value, unit)` pairs, rendered as
///    `"<value> <unit>"` and joined with `" / "`. Pairs whose value sanitizes
///    to empty are dropped, as is a unit that sanitizes to empty.
/// 3. `quantity` - a single scalar.
pub fn build_unit_info(
    unit_info: Option<&str>,
    quantities: &[(String, String)],
    quantity: Option<&str>,
) -> String {
    if let Some(info) = unit_info
        && !info.is_empty()
    {
        return format_smart_numbers(&clean_text(info));
    }

    let rendered: Vec<String> = quantities
        .iter()
        .filter_map(|(value, unit)| {
            let value = clean_text(value);
            if value.is_empty() {
                return None;
            }
            let unit = clean_text(unit);
            if unit.is_empty() {
                Some(value)
            } else {
                Some(format!("{} {}", value, unit))
            }
        })
        .collect();
    if !rendered.is_empty() {
        return rendered.join(" / ");
    }

    match quantity {
        Some(q) => format_smart_numbers(&clean_text(q)),
        None => String::new(),
    }
}

/// Generate the product label document.
///
/// Top to bottom: right-aligned timestamp (`DD.MM.YY HH:MM`), centered
/// two-line product name, Code 128 barcode, centered human-readable barcode
/// echo, and the unit-info line reversed out of a solid band.
pub fn generate_product_label(
    name: &str,
    barcode: &str,
    unit_info: &str,
    copies: i64,
    opts: &LabelOptions,
    now: DateTime<Local>,
) -> String {
    let copies = clamp_copies(copies, opts.max_copies);
    let name = clean_text(name);
    let barcode = clean_text(barcode);
    let unit_info = format_smart_numbers(&clean_text(unit_info));
    let timestamp = now.format("%d.%m.%y %H:%M").to_string();

    let mut doc = ZplBuilder::new(opts.width, opts.height);
    doc.text_block(150, 5, 18, 240, 1, Justify::Right, &timestamp)
        .text_block(10, 25, 24, 380, 2, Justify::Center, &name)
        .barcode_128(60, 85, 2, 50, &barcode)
        .text_block(10, 145, 22, 380, 1, Justify::Center, &barcode)
        .band(0, 175, opts.width, 65)
        .text_block_reversed(10, 192, 24, 380, 1, Justify::Center, &unit_info)
        .copies(copies);
    doc.build()
}

/// Generate the list/pallet label document.
///
/// A two-line title on the left, a QR code of the payload on the right and a
/// truncated human-readable echo of the payload under the code.
pub fn generate_list_label(
    title: &str,
    qr_data: &str,
    copies: i64,
    opts: &LabelOptions,
) -> String {
    let copies = clamp_copies(copies, opts.max_copies);
    let title = clean_text(title);
    let qr_data = clean_text(qr_data);

    let line1: String = title.chars().take(20).collect();
    let line2: String = title.chars().skip(20).take(20).collect();
    let echo: String = qr_data.chars().take(15).collect();

    // List labels always go on the 30mm stock; only the product label
    // tracks a configured height
    let mut doc = ZplBuilder::new(opts.width, LIST_LABEL_HEIGHT);
    doc.text(15, 20, 32, &line1);
    if !line2.is_empty() {
        doc.text(15, 60, 28, &line2);
    }
    doc.qr(240, 30, 5, &qr_data)
        .text(230, 190, 18, &echo)
        .copies(copies);
    doc.build()
}
