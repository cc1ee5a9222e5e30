//! Ranking statistics and result structures for the ranking pipeline
//!
//! This module provides types for tracking how many rows survived the
//! pipeline and how many cells had to be coerced on the way.

use crate::app::models::Leaderboard;

/// Statistics for one ranking run
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct RankingStats {
    /// Number of raw rows handed to the pipeline
    pub rows_in: usize,
    /// Rows dropped because their name was empty
    pub dropped_empty_name: usize,
    /// Present score cells that were not numeric and became 0
    pub score_coerced: usize,
    /// Present wins cells that were not numeric and became 0
    pub wins_coerced: usize,
    /// Number of ranked records produced
    pub records_out: usize,
}

impl RankingStats {
    /// Create new empty ranking statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of coerced cells across numeric fields
    pub fn coerced_cells(&self) -> usize {
        self.score_coerced + self.wins_coerced
    }

    /// Percentage of input rows that made it onto the leaderboard
    pub fn retention_rate(&self) -> f64 {
        if self.rows_in == 0 {
            100.0
        } else {
            (self.records_out as f64 / self.rows_in as f64) * 100.0
        }
    }

    /// Get summary of ranking statistics
    pub fn summary(&self) -> String {
        format!(
            "Ranking Summary: {} -> {} records ({:.1}% kept) | \
             Dropped (no name): {} | Coerced scores: {} | Coerced wins: {}",
            self.rows_in,
            self.records_out,
            self.retention_rate(),
            self.dropped_empty_name,
            self.score_coerced,
            self.wins_coerced
        )
    }
}

/// Result of a ranking run
#[derive(Debug, Clone)]
pub struct RankingResult {
    pub leaderboard: Leaderboard,
    pub stats: RankingStats,
}

impl RankingResult {
    pub fn new(leaderboard: Leaderboard, stats: RankingStats) -> Self {
        Self { leaderboard, stats }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
