//! Opportunistic type inference for CSV cells
//!
//! Numeric-looking cells become numbers and `true`/`false` cells become
//! booleans. The original text is always kept alongside the inferred kind.

use crate::app::models::{RawValue, ValueKind};
use crate::constants::MAX_EXACT_FLOAT;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?([0-9]+\.?|\.[0-9]+|[0-9]+\.[0-9]+)([eE][-+]?[0-9]+)?\s*$")
        .expect("number pattern is a valid regex")
});

/// Infer the kind of a single cell
pub fn infer_kind(text: &str) -> ValueKind {
    if text.is_empty() {
        return ValueKind::Empty;
    }

    match text {
        "true" | "TRUE" | "True" => return ValueKind::Boolean(true),
        "false" | "FALSE" | "False" => return ValueKind::Boolean(false),
        _ => {}
    }

    if NUMBER_PATTERN.is_match(text) {
        if let Ok(value) = text.trim().parse::<f64>() {
            // Keep very large integers as text so no digits are silently lost
            if value.abs() <= MAX_EXACT_FLOAT {
                return ValueKind::Number(value);
            }
        }
    }

    ValueKind::Text
}

/// Build a raw value from cell text
pub fn infer(text: &str) -> RawValue {
    RawValue::new(text, infer_kind(text))
}
