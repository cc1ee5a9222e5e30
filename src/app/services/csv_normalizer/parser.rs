//! Core CSV normalizer implementation
//!
//! This module drives the `csv` reader over a score feed, maps each record
//! onto the header row and attaches inferred cell kinds.

use csv::StringRecord;
use tracing::{debug, info, warn};

use super::error::ParseError;
use super::header::HeaderMap;
use super::inference::infer;
use super::quoting::find_unterminated_quote;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::RawRow;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// CSV normalizer for leaderboard score feeds
///
/// The normalizer holds no state between calls; every parse starts from
/// scratch and returns a complete, independent set of rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvNormalizer;

impl CsvNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text into raw rows
    pub fn parse(&self, text: &str) -> Result<Vec<RawRow>, ParseError> {
        self.parse_with_stats(text).map(|result| result.rows)
    }

    /// Parse CSV bytes, validating the encoding first
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRow>, ParseError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            warn!("CSV feed is not valid UTF-8 at byte {}", e.valid_up_to());
            ParseError::InvalidEncoding {
                offset: e.valid_up_to(),
            }
        })?;
        self.parse(text)
    }

    /// Parse CSV text and collect statistics about how well rows matched
    /// the header row
    pub fn parse_with_stats(&self, text: &str) -> Result<ParseResult, ParseError> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        if let Some(line) = find_unterminated_quote(text) {
            warn!("Unterminated quoted field starting on line {}", line);
            return Err(ParseError::UnterminatedQuote { line });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let header_map = HeaderMap::analyze(&headers);

        let mut stats = ParseStats::new();
        stats.columns = header_map.len();
        stats.duplicate_headers = header_map.duplicates().to_vec();
        debug!(
            "Header row: {} columns, {} duplicated",
            stats.columns,
            stats.duplicate_headers.len()
        );

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            stats.total_records += 1;

            if record.len() < header_map.len() {
                stats.short_rows += 1;
                debug!(
                    "Record {} has {} of {} fields",
                    stats.total_records,
                    record.len(),
                    header_map.len()
                );
            } else if record.len() > header_map.len() {
                stats.long_rows += 1;
                debug!(
                    "Record {} has {} extra fields, ignoring them",
                    stats.total_records,
                    record.len() - header_map.len()
                );
            }

            rows.push(map_record(&record, &header_map));
        }

        info!(
            "Parsed {} rows ({} ragged) from CSV feed",
            rows.len(),
            stats.ragged_rows()
        );

        Ok(ParseResult { rows, stats })
    }
}

/// Map one record onto the header row
fn map_record(record: &StringRecord, header_map: &HeaderMap) -> RawRow {
    record
        .iter()
        .enumerate()
        .filter_map(|(index, field)| header_map.name(index).map(|name| (name, infer(field))))
        .collect()
}
