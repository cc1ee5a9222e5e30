//! Score ordering and rank assignment

use crate::app::models::{CanonicalRecord, RankedRecord};
use std::cmp::Ordering;

/// Compare two records for leaderboard order: higher score first, then
/// original row order
///
/// Scores reaching this point are always finite, so the `partial_cmp`
/// fallback is never taken.
pub fn leaderboard_order(a: &CanonicalRecord, b: &CanonicalRecord) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort records by score descending; equal scores keep their input order
pub fn sort_by_score(mut records: Vec<CanonicalRecord>) -> Vec<CanonicalRecord> {
    records.sort_by(leaderboard_order);
    records
}

/// Attach 0-based positions to records that are already in leaderboard order
pub fn assign_positions(records: Vec<CanonicalRecord>) -> Vec<RankedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| RankedRecord::new(record, position))
        .collect()
}

/// Position of the first record that scores above its predecessor
pub fn first_out_of_order(records: &[RankedRecord]) -> Option<usize> {
    records
        .windows(2)
        .position(|pair| pair[0].record.score < pair[1].record.score)
        .map(|index| index + 1)
}

/// Check that records are in non-increasing score order
pub fn is_score_descending(records: &[RankedRecord]) -> bool {
    first_out_of_order(records).is_none()
}
