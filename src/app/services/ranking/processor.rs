//! Main ranking pipeline implementation
//!
//! This module coordinates the complete ranking pipeline: mapping raw rows to
//! canonical records, dropping unnamed records, sorting by score and assigning
//! positions.

use crate::app::models::{CanonicalRecord, Leaderboard, RankedRecord, RawRow};
use tracing::{debug, info, warn};

use super::{
    error::ProcessingError,
    field_resolution::{resolve_level, resolve_name, resolve_score, resolve_wins},
    name_filter::retain_named,
    ordering::{assign_positions, first_out_of_order, sort_by_score},
    stats::{RankingResult, RankingStats},
};

/// Ranking pipeline for leaderboard feeds
///
/// The pipeline is stateless: every call builds a complete leaderboard from
/// the rows it is given, and the same rows always produce the same result.
///
/// # Example
///
/// ```rust
/// use leaderboard_processor::app::services::{csv_normalizer, ranking::RankingPipeline};
///
/// let rows = csv_normalizer::parse("name,score\nAda,100\nLin,250\n").unwrap();
/// let leaderboard = RankingPipeline::new().rank(&rows).unwrap();
///
/// assert_eq!(leaderboard.records[0].record.name, "Lin");
/// assert_eq!(leaderboard.summary.participants, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingPipeline;

impl RankingPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Rank raw rows into a leaderboard
    pub fn rank(&self, rows: &[RawRow]) -> Result<Leaderboard, ProcessingError> {
        self.rank_with_stats(rows).map(|result| result.leaderboard)
    }

    /// Rank raw rows and report pipeline statistics
    ///
    /// The run is atomic: if the sorted output is not in leaderboard order,
    /// no leaderboard is produced.
    pub fn rank_with_stats(&self, rows: &[RawRow]) -> Result<RankingResult, ProcessingError> {
        let mut stats = RankingStats::new();
        stats.rows_in = rows.len();

        info!("Starting ranking pipeline for {} rows", rows.len());

        // Step 1: Map every row to a canonical record
        let records: Vec<CanonicalRecord> = rows
            .iter()
            .enumerate()
            .map(|(id, row)| to_canonical(id, row, &mut stats))
            .collect();

        // Step 2: Drop records without a name
        let named = retain_named(records, &mut stats);

        // Step 3: Stable sort by score, then assign positions
        let ranked = assign_positions(sort_by_score(named));
        check_order(&ranked)?;
        stats.records_out = ranked.len();

        info!(
            "Ranking complete: {} -> {} records",
            stats.rows_in, stats.records_out
        );
        if stats.coerced_cells() > 0 {
            debug!("{}", stats.summary());
        }

        Ok(RankingResult::new(Leaderboard::new(ranked), stats))
    }
}

/// Reject a ranking whose scores do not descend
pub(crate) fn check_order(ranked: &[RankedRecord]) -> Result<(), ProcessingError> {
    match first_out_of_order(ranked) {
        Some(position) => {
            let name = &ranked[position].record.name;
            warn!("Ranking aborted: '{}' is out of order at position {}", name, position);
            Err(ProcessingError::out_of_order(position, name.as_str()))
        }
        None => Ok(()),
    }
}

/// Map one raw row to a canonical record
fn to_canonical(id: usize, row: &RawRow, stats: &mut RankingStats) -> CanonicalRecord {
    let score = resolve_score(row);
    let wins = resolve_wins(row);

    if score.was_coerced() {
        stats.score_coerced += 1;
    }
    if wins.was_coerced() {
        stats.wins_coerced += 1;
    }

    CanonicalRecord {
        id,
        name: resolve_name(row),
        score: score.value,
        level: resolve_level(row),
        wins: wins.value,
    }
}
