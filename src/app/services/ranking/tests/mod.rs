//! Tests for the ranking pipeline module
//!
//! This module provides unit and integration tests for all ranking components.

pub mod ordering_tests;
pub mod processor_tests;

// Test helper functions and fixtures
use crate::app::models::{CanonicalRecord, Leaderboard, RawRow};
use crate::app::services::csv_normalizer::inference::infer;
use crate::app::services::csv_normalizer::parse;
use crate::app::services::ranking::RankingPipeline;

/// Build a raw row from header/cell pairs
pub fn create_row(cells: &[(&str, &str)]) -> RawRow {
    cells
        .iter()
        .map(|(header, text)| (*header, infer(text)))
        .collect()
}

/// Build a canonical record with the given id, name and score
pub fn create_record(id: usize, name: &str, score: f64) -> CanonicalRecord {
    CanonicalRecord {
        id,
        name: name.to_string(),
        score,
        level: "-".to_string(),
        wins: 0,
    }
}

/// Parse and rank CSV text in one step
pub fn rank_text(text: &str) -> Leaderboard {
    let rows = parse(text).expect("test feed should parse");
    RankingPipeline::new()
        .rank(&rows)
        .expect("test feed should rank")
}

/// Names and scores in leaderboard order
pub fn names_and_scores(leaderboard: &Leaderboard) -> Vec<(String, f64)> {
    leaderboard
        .canonical_records()
        .map(|r| (r.name.clone(), r.score))
        .collect()
}
