//! Header row analysis for leaderboard CSV feeds
//!
//! Header names are untrusted: they may carry stray whitespace, repeat, or be
//! blank. This module maps column positions to usable header names.

use csv::StringRecord;
use std::collections::HashSet;
use tracing::debug;

/// Column position to header name mapping for one CSV file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    /// Header name per column; `None` when the column repeats an earlier header
    columns: Vec<Option<String>>,

    /// Header names that appeared more than once
    duplicates: Vec<String>,
}

impl HeaderMap {
    /// Analyze a header record, trimming names and keeping the first column
    /// for any repeated header
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(headers.len());
        let mut duplicates = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();

            if seen.insert(column_name.clone()) {
                columns.push(Some(column_name));
            } else {
                debug!(
                    "Ignoring duplicate header '{}' in column {}",
                    column_name,
                    index + 1
                );
                if !duplicates.contains(&column_name) {
                    duplicates.push(column_name);
                }
                columns.push(None);
            }
        }

        Self {
            columns,
            duplicates,
        }
    }

    /// Number of columns in the header row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header name used for a column, if the column is usable
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).and_then(|c| c.as_deref())
    }

    /// Check if a header exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.columns
            .iter()
            .any(|c| c.as_deref() == Some(column_name))
    }

    /// Header names that were repeated in the header row
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}
