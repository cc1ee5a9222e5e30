//! Application state owned by the presentation layer
//!
//! The pipeline itself is stateless. This type is the explicit home for the
//! currently displayed leaderboard, when it was produced, and the most recent
//! failure, so a failed refresh never clears good data.

use crate::app::models::Leaderboard;
use chrono::{DateTime, Utc};

use super::outcome::{CycleFailure, CycleOutcome};

/// Last-known-good leaderboard plus the latest failure, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardState {
    leaderboard: Option<Leaderboard>,
    last_updated: Option<DateTime<Utc>>,
    last_failure: Option<CycleFailure>,
    cycles: u64,
}

impl LeaderboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a cycle outcome into the state
    ///
    /// Success replaces the leaderboard wholesale and clears any earlier
    /// failure; failure records the error and leaves the leaderboard as is.
    pub fn apply(&mut self, outcome: CycleOutcome) {
        self.cycles += 1;
        match outcome {
            CycleOutcome::Success {
                leaderboard,
                timestamp,
            } => {
                self.leaderboard = Some(leaderboard);
                self.last_updated = Some(timestamp);
                self.last_failure = None;
            }
            CycleOutcome::Failure(failure) => {
                self.last_failure = Some(failure);
            }
        }
    }

    /// Leaderboard currently on display
    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        self.leaderboard.as_ref()
    }

    /// Time of the last successful refresh
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Failure from the most recent cycle, if it failed
    pub fn last_failure(&self) -> Option<&CycleFailure> {
        self.last_failure.as_ref()
    }

    /// Number of cycles applied so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True until the first cycle has finished
    pub fn is_loading(&self) -> bool {
        self.cycles == 0
    }

    /// True when old data is on display because the latest refresh failed
    pub fn is_stale(&self) -> bool {
        self.leaderboard.is_some() && self.last_failure.is_some()
    }
}
