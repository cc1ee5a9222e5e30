//! Ranking pipeline for leaderboard feeds
//!
//! This module turns raw CSV rows into an ordered leaderboard. It tolerates
//! inconsistent header naming through alias resolution, coerces malformed
//! numbers to safe defaults, and produces a deterministic order.
//!
//! # Architecture
//!
//! - [`processor`] - Main RankingPipeline struct and pipeline orchestration
//! - [`field_resolution`] - Header alias resolution and numeric coercion
//! - [`name_filter`] - Removal of records without a display name
//! - [`ordering`] - Stable score ordering and position assignment
//! - [`stats`] - Ranking statistics and result structures
//! - [`error`] - Processing error for out-of-order output
//!
//! # Processing Pipeline
//!
//! 1. **Field Resolution**: for each canonical field try its alias headers in
//!    priority order; the first non-empty cell wins, otherwise the default
//! 2. **Filtering**: drop records whose trimmed name is empty
//! 3. **Ordering**: stable sort by score, highest first
//! 4. **Positioning**: each record's 0-based index in the sorted output
//!
//! | field | aliases | default |
//! |-------|---------|---------|
//! | name  | `name`, `Name`, `player`, `Player` | `""` |
//! | score | `score`, `Score`, `points`, `Points` | `0` |
//! | level | `level`, `Level`, `rank`, `Rank` | `"-"` |
//! | wins  | `wins`, `Wins`, `games`, `Games` | `0` |

pub mod error;
pub mod field_resolution;
pub mod name_filter;
pub mod ordering;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use error::ProcessingError;
pub use processor::RankingPipeline;
pub use stats::{RankingResult, RankingStats};
