//! Parsing statistics and result structures for CSV normalization
//!
//! This module provides types for tracking how well a feed matched its
//! header row and for handing parsed rows to the ranking pipeline.

use crate::app::models::RawRow;

/// Parsing result with rows and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed data rows in file order
    pub rows: Vec<RawRow>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of columns in the header row
    pub columns: usize,

    /// Total number of data records encountered
    pub total_records: usize,

    /// Records with fewer fields than the header row
    pub short_rows: usize,

    /// Records with more fields than the header row (extra fields ignored)
    pub long_rows: usize,

    /// Header names that appeared more than once
    pub duplicate_headers: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            columns: 0,
            total_records: 0,
            short_rows: 0,
            long_rows: 0,
            duplicate_headers: Vec::new(),
        }
    }

    /// Number of records whose field count differed from the header row
    pub fn ragged_rows(&self) -> usize {
        self.short_rows + self.long_rows
    }

    /// True when every record matched the header row exactly
    pub fn is_rectangular(&self) -> bool {
        self.ragged_rows() == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
