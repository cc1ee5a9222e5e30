//! Canonical field resolution through header aliases
//!
//! Each canonical field is read from the first alias header that is present
//! in the row with a non-empty cell. Numeric fields are re-coerced from the
//! cell text; the normalizer's inferred kinds are never trusted here.

use crate::app::models::{RawRow, RawValue};
use crate::constants::{DEFAULT_SCORE, DEFAULT_WINS, LEVEL_PLACEHOLDER, aliases};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern is a valid regex")
});

static INTEGER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("integer prefix pattern is a valid regex"));

/// A cell picked by alias resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCell<'r> {
    /// Alias header the cell was found under
    pub header: &'static str,
    pub value: &'r RawValue,
}

/// Where a numeric field's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Parsed from the cell under this header
    Parsed(&'static str),
    /// The cell under this header was replaced by the default or clamped
    Coerced(&'static str),
    /// No alias header carried a value
    Default,
}

/// A resolved numeric field value with its provenance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: FieldSource,
}

impl<T> Resolved<T> {
    /// True when a present cell could not be used as written
    pub fn was_coerced(&self) -> bool {
        matches!(self.source, FieldSource::Coerced(_))
    }
}

/// Find the first alias header with a non-empty cell
pub fn resolve_cell<'r>(
    row: &'r RawRow,
    candidates: &[&'static str],
) -> Option<ResolvedCell<'r>> {
    candidates.iter().find_map(|&header| {
        row.get(header)
            .filter(|value| !value.is_empty())
            .map(|value| ResolvedCell { header, value })
    })
}

/// Resolve the participant name, trimmed; empty when no alias matched
pub fn resolve_name(row: &RawRow) -> String {
    resolve_cell(row, aliases::NAME)
        .map(|cell| cell.value.text().trim().to_string())
        .unwrap_or_default()
}

/// Resolve the level label, falling back to the placeholder
pub fn resolve_level(row: &RawRow) -> String {
    resolve_cell(row, aliases::LEVEL)
        .map(|cell| cell.value.text().trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(LEVEL_PLACEHOLDER)
        .to_string()
}

/// Resolve the score; anything that does not yield a finite number becomes 0
pub fn resolve_score(row: &RawRow) -> Resolved<f64> {
    let Some(cell) = resolve_cell(row, aliases::SCORE) else {
        return Resolved {
            value: DEFAULT_SCORE,
            source: FieldSource::Default,
        };
    };

    match parse_float_prefix(cell.value.text()).filter(|v| v.is_finite()) {
        // Fold -0 into 0 so equal scores compare and serialize identically
        Some(value) => Resolved {
            value: if value == 0.0 { 0.0 } else { value },
            source: FieldSource::Parsed(cell.header),
        },
        None => {
            debug!(
                "Score '{}' under '{}' is not numeric, using {}",
                cell.value.text(),
                cell.header,
                DEFAULT_SCORE
            );
            Resolved {
                value: DEFAULT_SCORE,
                source: FieldSource::Coerced(cell.header),
            }
        }
    }
}

/// Resolve the win count, truncating fractions
///
/// Non-numeric cells become 0. Numbers beyond the `i64` range are clamped to
/// the nearest bound; both cases count as coerced.
pub fn resolve_wins(row: &RawRow) -> Resolved<i64> {
    let Some(cell) = resolve_cell(row, aliases::WINS) else {
        return Resolved {
            value: DEFAULT_WINS,
            source: FieldSource::Default,
        };
    };

    match coerce_integer(cell.value.text()) {
        IntegerCoercion::Parsed(value) => Resolved {
            value,
            source: FieldSource::Parsed(cell.header),
        },
        IntegerCoercion::Saturated(value) => {
            debug!(
                "Wins '{}' under '{}' is out of range, clamped to {}",
                cell.value.text(),
                cell.header,
                value
            );
            Resolved {
                value,
                source: FieldSource::Coerced(cell.header),
            }
        }
        IntegerCoercion::NotNumeric => {
            debug!(
                "Wins '{}' under '{}' is not numeric, using {}",
                cell.value.text(),
                cell.header,
                DEFAULT_WINS
            );
            Resolved {
                value: DEFAULT_WINS,
                source: FieldSource::Coerced(cell.header),
            }
        }
    }
}

/// Parse the longest leading floating-point number, ignoring leading
/// whitespace and any trailing garbage (`"12.5pts"` → 12.5)
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let candidate = text.trim_start();
    FLOAT_PREFIX
        .find(candidate)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Outcome of coercing a cell to an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerCoercion {
    Parsed(i64),
    /// Numeric, but beyond the `i64` range; holds the nearest bound
    Saturated(i64),
    NotNumeric,
}

/// Coerce cell text to an integer
///
/// Whole-cell numbers (including exponent forms such as `1e3`) are truncated
/// towards zero; otherwise the leading run of digits is used (`"7 wins"` → 7).
/// Spelled-out `inf` and `NaN` are not numbers here.
pub fn coerce_integer(text: &str) -> IntegerCoercion {
    let trimmed = text.trim();

    if let Ok(value) = trimmed.parse::<i64>() {
        return IntegerCoercion::Parsed(value);
    }

    let has_digits = trimmed.bytes().any(|b| b.is_ascii_digit());
    if let Some(value) = trimmed.parse::<f64>().ok().filter(|_| has_digits) {
        let truncated = value.trunc();
        return if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
            IntegerCoercion::Parsed(truncated as i64)
        } else {
            IntegerCoercion::Saturated(saturate(truncated.is_sign_negative()))
        };
    }

    match INTEGER_PREFIX.find(trimmed) {
        Some(m) => {
            let digits = m.as_str();
            digits.parse::<i64>().map_or_else(
                |_| IntegerCoercion::Saturated(saturate(digits.starts_with('-'))),
                IntegerCoercion::Parsed,
            )
        }
        None => IntegerCoercion::NotNumeric,
    }
}

fn saturate(negative: bool) -> i64 {
    if negative { i64::MIN } else { i64::MAX }
}
