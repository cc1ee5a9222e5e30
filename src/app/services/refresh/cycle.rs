//! One fetch → parse → rank refresh cycle

use crate::Result;
use crate::app::adapters::source::TextSource;
use crate::app::models::Leaderboard;
use crate::app::services::csv_normalizer::CsvNormalizer;
use crate::app::services::ranking::RankingPipeline;
use chrono::Utc;
use tracing::{info, warn};

use super::outcome::{CycleFailure, CycleOutcome};

/// A refresh cycle bound to one feed source
///
/// The cycle is a single logical unit of work with no mid-flight
/// cancellation, and it holds no state between runs.
#[derive(Debug, Clone)]
pub struct RefreshCycle<S> {
    source: S,
    normalizer: CsvNormalizer,
    pipeline: RankingPipeline,
}

impl<S: TextSource> RefreshCycle<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            normalizer: CsvNormalizer::new(),
            pipeline: RankingPipeline::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the cycle and convert every failure into an outcome
    pub async fn run(&self) -> CycleOutcome {
        info!("Refreshing leaderboard from {}", self.source.describe());

        match self.execute().await {
            Ok(leaderboard) => {
                info!(
                    "Refresh complete: {} participants",
                    leaderboard.summary.participants
                );
                CycleOutcome::Success {
                    leaderboard,
                    timestamp: Utc::now(),
                }
            }
            Err(error) => {
                let failure = CycleFailure::from_error(&error, Utc::now());
                warn!("Refresh failed at {} stage: {}", failure.stage, failure.message);
                CycleOutcome::Failure(failure)
            }
        }
    }

    /// Run the cycle, propagating the first error
    pub async fn execute(&self) -> Result<Leaderboard> {
        let bytes = self.source.fetch_text().await?;
        let rows = self.normalizer.parse_bytes(&bytes)?;
        let leaderboard = self.pipeline.rank(&rows)?;
        Ok(leaderboard)
    }
}
