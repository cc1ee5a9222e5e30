//! Name filtering for canonical records
//!
//! A record without a name cannot be shown on the leaderboard. This is the
//! only reason a row is ever excluded; bad numeric fields are coerced, never
//! rejected.

use crate::app::models::CanonicalRecord;
use tracing::debug;

use super::stats::RankingStats;

/// Check if a record has a name to display
pub fn has_display_name(record: &CanonicalRecord) -> bool {
    !record.name.trim().is_empty()
}

/// Keep only records with a display name, counting the rest in `stats`
pub fn retain_named(
    records: Vec<CanonicalRecord>,
    stats: &mut RankingStats,
) -> Vec<CanonicalRecord> {
    let before = records.len();

    let kept: Vec<CanonicalRecord> = records
        .into_iter()
        .filter(|record| {
            let keep = has_display_name(record);
            if !keep {
                debug!("Row {} dropped: empty name", record.id + 1);
            }
            keep
        })
        .collect();

    stats.dropped_empty_name += before - kept.len();
    kept
}
