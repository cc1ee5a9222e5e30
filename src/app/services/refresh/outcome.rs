//! Refresh cycle outcomes
//!
//! Every cycle ends in exactly one [`CycleOutcome`]; errors are values here,
//! never faults propagated to the caller.

use crate::Error;
use crate::app::models::Leaderboard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the refresh cycle that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Fetch,
    Parse,
    Processing,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureStage::Fetch => "fetch",
            FailureStage::Parse => "parse",
            FailureStage::Processing => "processing",
        };
        f.write_str(label)
    }
}

/// A failed cycle, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleFailure {
    pub stage: FailureStage,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl CycleFailure {
    /// Classify a pipeline error by the stage it came from
    pub fn from_error(error: &Error, occurred_at: DateTime<Utc>) -> Self {
        let stage = match error {
            Error::Fetch(_) => FailureStage::Fetch,
            Error::Parse(_) => FailureStage::Parse,
            // Anything else went wrong while turning rows into records
            _ => FailureStage::Processing,
        };

        Self {
            stage,
            message: error.to_string(),
            occurred_at,
        }
    }
}

/// Result of one refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A complete replacement leaderboard
    Success {
        leaderboard: Leaderboard,
        timestamp: DateTime<Utc>,
    },
    /// The cycle failed; the previous leaderboard should stay on screen
    Failure(CycleFailure),
}

impl CycleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CycleOutcome::Success { .. })
    }

    /// Failure details, if the cycle failed
    pub fn failure(&self) -> Option<&CycleFailure> {
        match self {
            CycleOutcome::Failure(failure) => Some(failure),
            CycleOutcome::Success { .. } => None,
        }
    }

    /// Leaderboard, if the cycle succeeded
    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        match self {
            CycleOutcome::Success { leaderboard, .. } => Some(leaderboard),
            CycleOutcome::Failure(_) => None,
        }
    }
}
