//! Text helpers for `^FD` field data
//!
//! ZPL treats `^` and `~` as command prefixes, so any user-supplied text has
//! to be stripped before it is embedded in a document.

use regex::Regex;
use std::sync::OnceLock;

/// Default maximum length for embedded free-text fields
pub const MAX_TEXT_LEN: usize = 50;

/// Sanitize arbitrary text for embedding in a `^FD` field.
///
/// Strips the ZPL control characters `^` and `~`, collapses newlines to
/// spaces, trims surrounding whitespace and caps the result at
/// [`MAX_TEXT_LEN`] characters.
pub fn clean_text(text: &str) -> String {
    clean_text_limited(text, MAX_TEXT_LEN)
}

/// [`clean_text`] with an explicit length cap
pub fn clean_text_limited(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned: String = text
        .chars()
        .filter(|c| *c != '^' && *c != '~')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    cleaned.trim().chars().take(max_len).collect()
}

fn decimal_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\d+").expect("decimal pattern is valid"))
}

/// Rewrite decimal substrings without a superfluous fractional part.
///
/// `"2.00 kg"` becomes `"2 kg"`, `"2.50"` becomes `"2.5"`. Substrings that
/// fail to parse pass through unchanged.
pub fn format_smart_numbers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    decimal_pattern()
        .replace_all(text, |caps: &regex::Captures| {
            let raw = &caps[0];
            match raw.parse::<f64>() {
                Ok(value) if value.fract() == 0.0 => format!("{:.0}", value),
                Ok(value) => {
                    let formatted = format!("{:.2}", value);
                    formatted
                        .trim_end_matches('0')
                        .trim_end_matches('.')
                        .to_string()
                }
                Err(_) => raw.to_string(),
            }
        })
        .into_owned()
}
