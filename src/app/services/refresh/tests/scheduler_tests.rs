//! Tests for RefreshScheduler triggering and shutdown

use super::*;
use crate::app::services::refresh::{LeaderboardState, RefreshCycle, RefreshScheduler};
use crate::config::RefreshConfig;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn manual_only() -> RefreshConfig {
    RefreshConfig {
        auto_refresh: false,
        interval_ms: 60_000,
    }
}

#[tokio::test]
async fn test_manual_triggers_run_one_cycle_each() {
    let source = ScriptedSource::fixed(GOOD_FEED);
    let scheduler = RefreshScheduler::new(RefreshCycle::new(&source), manual_only());
    let (tx, rx) = mpsc::channel(4);

    tx.send(()).await.unwrap();
    tx.send(()).await.unwrap();
    drop(tx);

    let mut state = LeaderboardState::new();
    let mut updates = 0;
    let cycles = scheduler
        .run(&mut state, rx, CancellationToken::new(), |_| updates += 1)
        .await;

    assert_eq!(cycles, 3);
    assert_eq!(updates, 3);
    assert_eq!(source.fetches(), 3);
    assert_eq!(state.cycles(), 3);
}

#[tokio::test]
async fn test_initial_cycle_runs_without_triggers() {
    let source = ScriptedSource::fixed(GOOD_FEED);
    let scheduler = RefreshScheduler::new(RefreshCycle::new(&source), manual_only());
    let (tx, rx) = mpsc::channel::<()>(1);
    drop(tx);

    let mut state = LeaderboardState::new();
    let cycles = scheduler
        .run(&mut state, rx, CancellationToken::new(), |_| {})
        .await;

    assert_eq!(cycles, 1);
    assert_eq!(state.leaderboard().unwrap().len(), 2);
}

#[tokio::test]
async fn test_auto_refresh_until_cancelled() {
    let source = ScriptedSource::fixed(GOOD_FEED);
    let config = RefreshConfig {
        auto_refresh: true,
        interval_ms: 100,
    };
    let scheduler = RefreshScheduler::new(RefreshCycle::new(&source), config);
    let (_tx, rx) = mpsc::channel::<()>(1);
    let cancel = CancellationToken::new();

    let mut state = LeaderboardState::new();
    let stopper = cancel.clone();
    let cycles = tokio::time::timeout(
        Duration::from_secs(5),
        scheduler.run(&mut state, rx, cancel, |state| {
            if state.cycles() >= 3 {
                stopper.cancel();
            }
        }),
    )
    .await
    .expect("scheduler should stop once cancelled");

    assert_eq!(cycles, 3);
    assert_eq!(source.fetches(), 3);
}

#[tokio::test]
async fn test_failed_cycles_keep_scheduler_running() {
    let source = ScriptedSource::new(vec![
        Reply::Text(GOOD_FEED.to_string()),
        Reply::Missing,
        Reply::Text(UNTERMINATED_FEED.to_string()),
    ]);
    let scheduler = RefreshScheduler::new(RefreshCycle::new(&source), manual_only());
    let (tx, rx) = mpsc::channel(4);
    tx.send(()).await.unwrap();
    tx.send(()).await.unwrap();
    drop(tx);

    let mut state = LeaderboardState::new();
    let mut failures = Vec::new();
    scheduler
        .run(&mut state, rx, CancellationToken::new(), |state| {
            failures.push(state.last_failure().map(|f| f.stage));
        })
        .await;

    use crate::app::services::refresh::FailureStage;
    assert_eq!(
        failures,
        vec![None, Some(FailureStage::Fetch), Some(FailureStage::Parse)]
    );
    assert_eq!(state.leaderboard().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cancel_before_start_runs_only_initial_cycle() {
    let source = ScriptedSource::fixed(GOOD_FEED);
    let config = RefreshConfig {
        auto_refresh: true,
        interval_ms: 100,
    };
    let scheduler = RefreshScheduler::new(RefreshCycle::new(&source), config);
    let (_tx, rx) = mpsc::channel::<()>(1);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut state = LeaderboardState::new();
    let cycles = scheduler.run(&mut state, rx, cancel, |_| {}).await;

    assert_eq!(cycles, 1);
}
