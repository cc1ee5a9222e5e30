//! Refresh cycles for the leaderboard
//!
//! A refresh cycle is one fetch → parse → rank unit of work that produces a
//! complete replacement leaderboard or a reportable failure.
//!
//! # Architecture
//!
//! - [`cycle`] - RefreshCycle: runs the three stages against a source
//! - [`outcome`] - CycleOutcome and failure classification by stage
//! - [`state`] - LeaderboardState: last-known-good data owned by the caller
//! - [`scheduler`] - RefreshScheduler: interval and manual triggering
//!
//! # Failure Policy
//!
//! Fetch, parse and processing errors are all caught at the cycle boundary.
//! The previous leaderboard stays in [`LeaderboardState`] next to the new
//! error, and the next trigger is the only retry.

pub mod cycle;
pub mod outcome;
pub mod scheduler;
pub mod state;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cycle::RefreshCycle;
pub use outcome::{CycleFailure, CycleOutcome, FailureStage};
pub use scheduler::RefreshScheduler;
pub use state::LeaderboardState;
