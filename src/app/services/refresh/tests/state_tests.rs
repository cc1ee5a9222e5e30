//! Tests for LeaderboardState retention rules

use super::*;
use crate::app::services::refresh::{FailureStage, LeaderboardState, RefreshCycle};

#[test]
fn test_new_state_is_loading() {
    let state = LeaderboardState::new();

    assert!(state.is_loading());
    assert!(state.leaderboard().is_none());
    assert!(state.last_updated().is_none());
    assert!(!state.is_stale());
}

#[tokio::test]
async fn test_failure_keeps_previous_leaderboard() {
    let source = ScriptedSource::new(vec![
        Reply::Text(GOOD_FEED.to_string()),
        Reply::Missing,
    ]);
    let cycle = RefreshCycle::new(&source);
    let mut state = LeaderboardState::new();

    state.apply(cycle.run().await);
    let before = state.leaderboard().cloned().unwrap();
    let updated_at = state.last_updated();

    state.apply(cycle.run().await);

    assert_eq!(state.leaderboard(), Some(&before));
    assert_eq!(state.last_updated(), updated_at);
    assert_eq!(state.last_failure().unwrap().stage, FailureStage::Fetch);
    assert!(state.is_stale());
    assert_eq!(state.cycles(), 2);
}

#[tokio::test]
async fn test_success_clears_failure_and_replaces_board() {
    let source = ScriptedSource::new(vec![
        Reply::Text(GOOD_FEED.to_string()),
        Reply::Text(UNTERMINATED_FEED.to_string()),
        Reply::Text(OTHER_FEED.to_string()),
    ]);
    let cycle = RefreshCycle::new(&source);
    let mut state = LeaderboardState::new();

    for _ in 0..3 {
        state.apply(cycle.run().await);
    }

    assert!(state.last_failure().is_none());
    assert!(!state.is_stale());
    let leaderboard = state.leaderboard().unwrap();
    assert_eq!(leaderboard.len(), 1);
    assert_eq!(leaderboard.summary.leader.as_deref(), Some("Bo"));
}

#[tokio::test]
async fn test_failure_before_any_success_has_no_board() {
    let cycle = RefreshCycle::new(ScriptedSource::fixed(UNTERMINATED_FEED));
    let mut state = LeaderboardState::new();

    state.apply(cycle.run().await);

    assert!(!state.is_loading());
    assert!(state.leaderboard().is_none());
    assert!(!state.is_stale());
    assert_eq!(state.last_failure().unwrap().stage, FailureStage::Parse);
}
