//! CSV normalizer for leaderboard score feeds
//!
//! This module turns raw CSV text into loosely-typed [`RawRow`] mappings keyed by
//! the header row. It is forgiving about everything except
//! structure: ragged rows, duplicated headers and odd cell contents are
//! tolerated, while unterminated quotes and invalid UTF-8 are reported as
//! [`ParseError`].
//!
//! ## Architecture
//!
//! - [`parser`] - Parsing orchestration on top of the `csv` reader
//! - [`header`] - Header row analysis (trimming, duplicate handling)
//! - [`inference`] - Opportunistic cell type inference
//! - [`quoting`] - Structural pre-scan for unterminated quoted fields
//! - [`stats`] - Parsing statistics and result structures
//! - [`error`] - Parse error type
//!
//! ## Usage
//!
//! ```rust
//! use leaderboard_processor::app::services::csv_normalizer;
//!
//! let rows = csv_normalizer::parse("name,score\nAda,100\n").unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get("name").unwrap().text(), "Ada");
//! ```
//!
//! [`RawRow`]: crate::app::models::RawRow

pub mod error;
pub mod header;
pub mod inference;
pub mod parser;
pub mod quoting;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use error::ParseError;
pub use header::HeaderMap;
pub use parser::CsvNormalizer;
pub use stats::{ParseResult, ParseStats};

use crate::app::models::RawRow;

/// Parse CSV text into raw rows using the first line as headers
pub fn parse(text: &str) -> Result<Vec<RawRow>, ParseError> {
    CsvNormalizer::new().parse(text)
}

/// Parse CSV bytes, rejecting input that is not valid UTF-8
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<RawRow>, ParseError> {
    CsvNormalizer::new().parse_bytes(bytes)
}

/// Parse CSV text and return the rows together with parsing statistics
pub fn parse_with_stats(text: &str) -> Result<ParseResult, ParseError> {
    CsvNormalizer::new().parse_with_stats(text)
}
