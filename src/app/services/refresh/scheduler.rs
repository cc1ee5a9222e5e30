//! Periodic and manual refresh triggering
//!
//! The scheduler owns no leaderboard data. It runs cycles one at a time and
//! folds each outcome into the caller's [`LeaderboardState`].

use crate::app::adapters::source::TextSource;
use crate::config::RefreshConfig;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::cycle::RefreshCycle;
use super::state::LeaderboardState;

/// Drives refresh cycles on an interval and on manual triggers
#[derive(Debug)]
pub struct RefreshScheduler<S> {
    cycle: RefreshCycle<S>,
    config: RefreshConfig,
}

impl<S: TextSource> RefreshScheduler<S> {
    pub fn new(cycle: RefreshCycle<S>, config: RefreshConfig) -> Self {
        Self { cycle, config }
    }

    /// Run cycles until cancelled
    ///
    /// One cycle runs immediately, then another on every interval tick (when
    /// auto-refresh is on) and every message on `triggers`. Cycles never
    /// overlap: a tick that falls due during a slow cycle is delayed, not
    /// queued. With auto-refresh off the scheduler also stops once every
    /// trigger sender has been dropped. `on_update` is called after each
    /// cycle. Returns the number of cycles run.
    pub async fn run<F>(
        &self,
        state: &mut LeaderboardState,
        mut triggers: mpsc::Receiver<()>,
        cancel: CancellationToken,
        mut on_update: F,
    ) -> u64
    where
        F: FnMut(&LeaderboardState),
    {
        let mut cycles = 0;

        state.apply(self.cycle.run().await);
        cycles += 1;
        on_update(state);

        let period = Duration::from_millis(self.config.interval_ms);
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let auto_refresh = self.config.auto_refresh;
        let mut triggers_open = true;

        info!(
            "Refresh scheduler started ({})",
            if auto_refresh {
                format!("every {} ms", self.config.interval_ms)
            } else {
                "manual only".to_string()
            }
        );

        loop {
            if cancel.is_cancelled() {
                break;
            }
            if !auto_refresh && !triggers_open {
                debug!("No refresh triggers remain, stopping scheduler");
                break;
            }

            tokio::select! {
                biased;

                _ = cancel.cancelled() => break,
                _ = ticker.tick(), if auto_refresh => {
                    debug!("Scheduled refresh");
                }
                trigger = triggers.recv(), if triggers_open => {
                    if trigger.is_none() {
                        triggers_open = false;
                        continue;
                    }
                    debug!("Manual refresh");
                }
            }

            state.apply(self.cycle.run().await);
            cycles += 1;
            on_update(state);
        }

        info!("Refresh scheduler stopped after {} cycles", cycles);
        cycles
    }
}
