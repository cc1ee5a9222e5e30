//! Tests for score ordering and name filtering

use super::*;
use crate::app::services::ranking::RankingStats;
use crate::app::services::ranking::name_filter::{has_display_name, retain_named};
use crate::app::services::ranking::ordering::{
    assign_positions, first_out_of_order, is_score_descending, leaderboard_order,
    sort_by_score,
};
use std::cmp::Ordering;

#[test]
fn test_leaderboard_order_prefers_higher_score() {
    let high = create_record(5, "high", 10.0);
    let low = create_record(0, "low", 1.0);

    assert_eq!(leaderboard_order(&high, &low), Ordering::Less);
    assert_eq!(leaderboard_order(&low, &high), Ordering::Greater);
}

#[test]
fn test_leaderboard_order_breaks_ties_by_id() {
    let early = create_record(1, "early", 10.0);
    let late = create_record(7, "late", 10.0);

    assert_eq!(leaderboard_order(&early, &late), Ordering::Less);
    assert_eq!(leaderboard_order(&late, &early), Ordering::Greater);
}

#[test]
fn test_sort_by_score_is_stable() {
    let records = vec![
        create_record(0, "a", 1.0),
        create_record(1, "b", 3.0),
        create_record(2, "c", 1.0),
        create_record(3, "d", 3.0),
        create_record(4, "e", 2.0),
    ];

    let sorted: Vec<String> = sort_by_score(records)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(sorted, vec!["b", "d", "e", "a", "c"]);
}

#[test]
fn test_assign_positions() {
    let ranked = assign_positions(vec![
        create_record(3, "x", 9.0),
        create_record(1, "y", 4.0),
    ]);

    assert_eq!(ranked[0].position, 0);
    assert_eq!(ranked[0].record.id, 3);
    assert_eq!(ranked[1].position, 1);
    assert!(is_score_descending(&ranked));
}

#[test]
fn test_is_score_descending_detects_disorder() {
    let ranked = assign_positions(vec![
        create_record(0, "x", 1.0),
        create_record(1, "y", 4.0),
    ]);
    assert!(!is_score_descending(&ranked));
    assert_eq!(first_out_of_order(&ranked), Some(1));
}

#[test]
fn test_retain_named_counts_dropped() {
    let mut stats = RankingStats::new();
    let kept = retain_named(
        vec![
            create_record(0, "Ada", 1.0),
            create_record(1, "", 2.0),
            create_record(2, "  ", 3.0),
        ],
        &mut stats,
    );

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "Ada");
    assert_eq!(stats.dropped_empty_name, 2);
}

#[test]
fn test_has_display_name() {
    assert!(has_display_name(&create_record(0, "Bo", 0.0)));
    assert!(!has_display_name(&create_record(0, "\t", 0.0)));
}
