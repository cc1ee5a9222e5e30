//! Tests for the main RankingPipeline and end-to-end ranking scenarios

use super::*;
use crate::app::models::Medal;
use crate::app::services::csv_normalizer::parse;
use crate::app::services::ranking::ordering::{assign_positions, is_score_descending};
use crate::app::services::ranking::processor::check_order;
use crate::app::services::ranking::{ProcessingError, RankingPipeline};

#[test]
fn test_ties_keep_input_order_and_empty_names_drop() {
    let leaderboard = rank_text("name,score\nAda,100\nLin,250\n,999\nBo,250");

    assert_eq!(
        names_and_scores(&leaderboard),
        vec![
            ("Lin".to_string(), 250.0),
            ("Bo".to_string(), 250.0),
            ("Ada".to_string(), 100.0),
        ]
    );

    let ids: Vec<usize> = leaderboard.canonical_records().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 0]);
}

#[test]
fn test_alternate_headers_with_non_numeric_score() {
    let leaderboard = rank_text("Player,Points\nKim,abc");

    assert_eq!(leaderboard.len(), 1);
    let record = &leaderboard.records[0].record;
    assert_eq!(record.name, "Kim");
    assert_eq!(record.score, 0.0);
    assert_eq!(record.level, "-");
    assert_eq!(record.wins, 0);
}

#[test]
fn test_headers_only_is_empty_leaderboard() {
    let leaderboard = rank_text("name,score,level,wins\n");

    assert!(leaderboard.is_empty());
    assert_eq!(leaderboard.summary.participants, 0);
    assert_eq!(leaderboard.summary.top_score, 0.0);
    assert_eq!(leaderboard.summary.leader, None);
}

#[test]
fn test_all_fields_resolved() {
    let leaderboard = rank_text("Name,Score,Level,Wins\nAda,100,Gold,12\n");
    let record = &leaderboard.records[0].record;

    assert_eq!(record.name, "Ada");
    assert_eq!(record.score, 100.0);
    assert_eq!(record.level, "Gold");
    assert_eq!(record.wins, 12);
}

#[test]
fn test_output_is_sorted_descending() {
    let leaderboard = rank_text(
        "name,score\na,5\nb,-3\nc,17.5\nd,\ne,17.5\nf,abc\ng,1e2\nh,0\n",
    );

    assert!(is_score_descending(&leaderboard.records));
    assert_eq!(leaderboard.records[0].record.name, "g");
    assert_eq!(leaderboard.records.last().unwrap().record.name, "b");
}

#[test]
fn test_positions_are_contiguous() {
    let leaderboard = rank_text("name,score\na,1\nb,2\nc,3\nd,4\n");

    for (index, ranked) in leaderboard.records.iter().enumerate() {
        assert_eq!(ranked.position, index);
        assert_eq!(ranked.display_rank(), index + 1);
    }
    assert_eq!(leaderboard.records[0].medal(), Some(Medal::Gold));
    assert_eq!(leaderboard.records[1].medal(), Some(Medal::Silver));
    assert_eq!(leaderboard.records[2].medal(), Some(Medal::Bronze));
    assert_eq!(leaderboard.records[3].medal(), None);
    assert!(leaderboard.records[2].is_podium());
    assert!(!leaderboard.records[3].is_podium());
}

#[test]
fn test_blank_names_never_appear() {
    let leaderboard = rank_text(
        "name,Name,score\n   ,Shadow,900\n,Named,50\n\t,,700\nReal,,10\n",
    );

    let names: Vec<&str> = leaderboard
        .canonical_records()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Named", "Real"]);
    assert!(leaderboard.canonical_records().all(|r| !r.name.is_empty()));
}

#[test]
fn test_invalid_numbers_never_reject_rows() {
    let leaderboard = rank_text("name,score,wins\nAda,n/a,many\nLin,,\n");

    assert_eq!(leaderboard.len(), 2);
    assert!(leaderboard.canonical_records().all(|r| r.score == 0.0 && r.wins == 0));
}

#[test]
fn test_ranking_is_idempotent() {
    let text = "player,points,rank,games\nZed,10,A,1\nYan,10,B,2\nXi,30,C,3\n";
    let first = rank_text(text);
    let second = rank_text(text);

    assert_eq!(first, second);
}

#[test]
fn test_summary_reports_leader() {
    let leaderboard = rank_text("name,score\nAda,100\nLin,250\n");

    assert_eq!(leaderboard.summary.participants, 2);
    assert_eq!(leaderboard.summary.top_score, 250.0);
    assert_eq!(leaderboard.summary.leader.as_deref(), Some("Lin"));
}

#[test]
fn test_rank_with_stats() {
    let rows = parse("name,score,wins\nAda,abc,1\n,10,2\nLin,20,x\nBo,5,3\n").unwrap();
    let result = RankingPipeline::new().rank_with_stats(&rows).unwrap();

    assert_eq!(result.stats.rows_in, 4);
    assert_eq!(result.stats.dropped_empty_name, 1);
    assert_eq!(result.stats.score_coerced, 1);
    assert_eq!(result.stats.wins_coerced, 1);
    assert_eq!(result.stats.records_out, 3);
    assert_eq!(result.stats.coerced_cells(), 2);
    assert!(result.summary().contains("4 -> 3 records"));
}

#[test]
fn test_out_of_range_wins_saturate_and_count_as_coerced() {
    let rows = parse("name,score,wins\nAda,1,2\nLin,2,1e30\nBo,3,-99999999999999999999\n").unwrap();
    let result = RankingPipeline::new().rank_with_stats(&rows).unwrap();

    let wins: Vec<(&str, i64)> = result
        .leaderboard
        .canonical_records()
        .map(|r| (r.name.as_str(), r.wins))
        .collect();
    assert_eq!(wins, vec![("Bo", i64::MIN), ("Lin", i64::MAX), ("Ada", 2)]);
    assert_eq!(result.stats.wins_coerced, 2);
    assert_eq!(result.stats.records_out, 3);
}

#[test]
fn test_out_of_order_output_is_rejected() {
    let ranked = assign_positions(vec![
        create_record(0, "Ada", 5.0),
        create_record(1, "Lin", 9.0),
    ]);
    let err: ProcessingError = check_order(&ranked).unwrap_err();

    assert_eq!(err, ProcessingError::out_of_order(1, "Lin"));
    assert_eq!(
        err.to_string(),
        "record 'Lin' at position 1 scores above the record ranked before it"
    );
    assert!(check_order(&ranked[..1]).is_ok());
}

#[test]
fn test_empty_rows_rank_to_empty_board() {
    let leaderboard = RankingPipeline::new().rank(&[]).unwrap();
    assert!(leaderboard.is_empty());
}
