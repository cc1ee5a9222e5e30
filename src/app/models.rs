//! Data models for leaderboard processing
//!
//! This module contains the data structures that flow through the pipeline:
//! loosely-typed rows straight out of the CSV normalizer, the canonical
//! participant record, and the ranked leaderboard handed to the presentation
//! layer.

use crate::constants::PODIUM_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Raw Rows
// =============================================================================

/// Opportunistically inferred kind of a CSV cell
///
/// Inference is a convenience for callers that inspect raw rows. The ranking
/// pipeline always re-coerces from [`RawValue::text`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// The cell was present but held no characters
    Empty,
    /// `true` / `false` in one of the recognised spellings
    Boolean(bool),
    /// Numeric-looking text
    Number(f64),
    /// Anything else
    Text,
}

/// A single CSV cell: the original text plus its inferred kind
#[derive(Debug, Clone, PartialEq)]
pub struct RawValue {
    text: String,
    kind: ValueKind,
}

impl RawValue {
    /// Create a value from cell text and an already inferred kind
    pub fn new(text: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Original cell text, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Inferred kind of the cell
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// True when the cell held no characters at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inferred number, if the cell looked numeric
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            ValueKind::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Inferred boolean, if the cell looked boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            ValueKind::Boolean(value) => Some(value),
            _ => None,
        }
    }
}

/// One parsed CSV data row keyed by header name
///
/// Header names come straight from the file and are not normalised beyond
/// trimming; a header missing from the file is simply absent from the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, RawValue>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, returning any value previously stored under the header
    pub fn insert(&mut self, header: impl Into<String>, value: RawValue) -> Option<RawValue> {
        self.cells.insert(header.into(), value)
    }

    /// Look up a cell by exact header name
    pub fn get(&self, header: &str) -> Option<&RawValue> {
        self.cells.get(header)
    }

    /// Check whether the row carries a header
    pub fn contains(&self, header: &str) -> bool {
        self.cells.contains_key(header)
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// =============================================================================
// Canonical Records
// =============================================================================

/// Normalized, typed representation of one participant's row
///
/// Built fresh on every refresh cycle. `id` is the zero-based index of the row
/// in the original file and is only stable within a single cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Zero-based index of the source row, before filtering and sorting
    pub id: usize,

    /// Trimmed participant name, never empty in pipeline output
    pub name: String,

    /// Finite score; missing or non-numeric input becomes 0
    pub score: f64,

    /// Level label, or `"-"` when the row has none
    pub level: String,

    /// Win count; missing or non-numeric input becomes 0
    pub wins: i64,
}

/// Podium medal for the top three positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 0-based leaderboard position, if it is on the podium
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Medal::Gold => "gold",
            Medal::Silver => "silver",
            Medal::Bronze => "bronze",
        };
        f.write_str(label)
    }
}

/// A canonical record together with its position in the sorted output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    #[serde(flatten)]
    pub record: CanonicalRecord,

    /// 0-based index in the sorted leaderboard
    pub position: usize,
}

impl RankedRecord {
    pub fn new(record: CanonicalRecord, position: usize) -> Self {
        Self { record, position }
    }

    /// 1-based rank for display
    pub fn display_rank(&self) -> usize {
        self.position + 1
    }

    /// Medal awarded for this position, if any
    pub fn medal(&self) -> Option<Medal> {
        Medal::for_position(self.position)
    }

    /// True for the top three positions
    pub fn is_podium(&self) -> bool {
        self.position < PODIUM_SIZE
    }
}

// =============================================================================
// Leaderboard
// =============================================================================

/// Headline figures shown above the leaderboard table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSummary {
    /// Number of ranked participants
    pub participants: usize,

    /// Highest score, 0 when the board is empty
    pub top_score: f64,

    /// Name of the participant in first place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
}

impl LeaderboardSummary {
    /// Summarise an already sorted list of ranked records
    pub fn from_ranked(records: &[RankedRecord]) -> Self {
        let first = records.first();
        Self {
            participants: records.len(),
            top_score: first.map(|r| r.record.score).unwrap_or(0.0),
            leader: first.map(|r| r.record.name.clone()),
        }
    }
}

/// Complete ranked result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub records: Vec<RankedRecord>,
    pub summary: LeaderboardSummary,
}

impl Leaderboard {
    /// Build a leaderboard from ranked records in final order
    pub fn new(records: Vec<RankedRecord>) -> Self {
        let summary = LeaderboardSummary::from_ranked(&records);
        Self { records, summary }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the canonical records in rank order
    pub fn canonical_records(&self) -> impl Iterator<Item = &CanonicalRecord> {
        self.records.iter().map(|r| &r.record)
    }
}
