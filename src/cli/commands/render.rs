//! Terminal and machine-readable rendering of leaderboards
//!
//! Human output is a colored table with stat cards and a footer; JSON and
//! CSV output are for piping into other tools.

use crate::app::models::{Leaderboard, LeaderboardSummary, Medal, RankedRecord};
use crate::app::services::refresh::{CycleFailure, LeaderboardState};
use crate::config::RefreshConfig;
use crate::{Error, Result};
use chrono::{DateTime, Local, Utc};
use colored::*;

const TITLE: &str = "Performance Leaderboard";
const SUBTITLE: &str = "Real-time rankings and metrics";

/// Full watch-mode screen for the current state
pub fn render_dashboard(
    state: &LeaderboardState,
    source: &str,
    refresh: &RefreshConfig,
) -> String {
    let mut output = render_header(state.last_updated());

    if let Some(failure) = state.last_failure() {
        output.push_str(&render_error_banner(failure, source));
        output.push('\n');
    }

    match state.leaderboard() {
        None if state.is_loading() => output.push_str("Loading data...\n"),
        Some(leaderboard) if !leaderboard.is_empty() => {
            output.push_str(&render_leaderboard(leaderboard));
            output.push('\n');
            output.push_str(&render_footer(
                leaderboard,
                refresh,
                state.last_failure().is_some(),
            ));
        }
        _ => output.push_str("No participants to show.\n"),
    }

    output.push_str(&format!(
        "\n{}\n",
        "Press Enter to refresh, Ctrl+C to quit".dimmed()
    ));
    output
}

/// One-shot report for the rank command
pub fn render_report(leaderboard: &Leaderboard, updated_at: DateTime<Utc>) -> String {
    let mut output = render_header(Some(updated_at));

    if leaderboard.is_empty() {
        output.push_str("No participants to show.\n");
    } else {
        output.push_str(&render_leaderboard(leaderboard));
        output.push_str(&format!("\n{}\n", showing_line(leaderboard.len())));
    }
    output
}

fn render_header(last_updated: Option<DateTime<Utc>>) -> String {
    let mut output = format!("🏆 {}\n", TITLE.bright_red().bold());
    output.push_str(&format!("   {}\n", SUBTITLE.dimmed()));
    if let Some(at) = last_updated {
        output.push_str(&format!(
            "   Last updated: {}\n",
            at.with_timezone(&Local).format("%H:%M:%S")
        ));
    }
    output.push('\n');
    output
}

/// Error banner naming the failing source
pub fn render_error_banner(failure: &CycleFailure, source: &str) -> String {
    format!(
        "{} {}\n  {}\n",
        "Error:".red().bold(),
        failure.message.red(),
        format!("CSV Path: {}", source).red()
    )
}

/// Stat cards followed by the ranking table
pub fn render_leaderboard(leaderboard: &Leaderboard) -> String {
    let mut output = render_stat_cards(&leaderboard.summary);
    output.push('\n');
    output.push_str(&render_table(&leaderboard.records));
    output
}

/// Participants, top score and leader
pub fn render_stat_cards(summary: &LeaderboardSummary) -> String {
    let cards = [
        ("TOTAL PARTICIPANTS", summary.participants.to_string()),
        ("TOP SCORE", format_score(summary.top_score)),
        (
            "LEADER",
            summary.leader.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
    ];

    cards
        .iter()
        .map(|(label, value)| format!("  {} {}", label.dimmed(), value.bold()))
        .collect::<Vec<_>>()
        .join("   ")
        + "\n"
}

/// Rank, participant, level, wins and score columns
pub fn render_table(records: &[RankedRecord]) -> String {
    let name_width = column_width("PARTICIPANT", records.iter().map(|r| r.record.name.as_str()));
    let level_width = column_width("LEVEL", records.iter().map(|r| r.record.level.as_str()));
    let scores: Vec<String> = records.iter().map(|r| format_score(r.record.score)).collect();
    let score_width = column_width("SCORE", scores.iter().map(String::as_str));

    let mut output = format!(
        "  {:<4}  {:<name_width$}  {:<level_width$}  {:>6}  {:>score_width$}\n",
        "RANK", "PARTICIPANT", "LEVEL", "WINS", "SCORE"
    )
    .dimmed()
    .to_string();

    for (record, score) in records.iter().zip(&scores) {
        let name = pad(&record.record.name, name_width);
        let name = match record.medal() {
            Some(Medal::Gold) => name.yellow().bold(),
            Some(Medal::Silver) => name.white().bold(),
            Some(Medal::Bronze) => name.truecolor(205, 127, 50).bold(),
            None => name.normal(),
        };

        output.push_str(&format!(
            "  {}  {}  {}  {:>6}  {}\n",
            rank_badge(record),
            name,
            pad(&record.record.level, level_width),
            record.record.wins,
            format!("{:>score_width$}", score).bold()
        ));
    }

    output
}

fn render_footer(leaderboard: &Leaderboard, refresh: &RefreshConfig, has_error: bool) -> String {
    let dot = if has_error { "●".red() } else { "●".green() };
    format!(
        "{} {}    {}\n",
        dot,
        refresh_mode_label(refresh),
        showing_line(leaderboard.len())
    )
}

/// Footer text describing the refresh mode
pub fn refresh_mode_label(refresh: &RefreshConfig) -> String {
    if refresh.auto_refresh {
        format!(
            "Auto-refresh enabled ({}s)",
            refresh.interval_ms as f64 / 1000.0
        )
    } else {
        "Manual refresh mode".to_string()
    }
}

fn showing_line(count: usize) -> String {
    let noun = if count == 1 { "participant" } else { "participants" };
    format!("Showing {} {}", count, noun)
}

/// Medal icon for podium places, the 1-based rank otherwise
///
/// Always four terminal columns wide.
fn rank_badge(record: &RankedRecord) -> String {
    match record.medal() {
        Some(Medal::Gold) => "🥇  ".to_string(),
        Some(Medal::Silver) => "🥈  ".to_string(),
        Some(Medal::Bronze) => "🥉  ".to_string(),
        None => format!("{:<4}", record.display_rank()),
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Format a score with thousands separators and at most three decimals
///
/// `1234567.5` → `1,234,567.5`, `250` → `250`.
pub fn format_score(score: f64) -> String {
    // Beyond 1e15 an f64 has no fractional digits left, and scaling could overflow
    let rounded = if score.abs() > 1e15 {
        score
    } else {
        (score * 1000.0).round() / 1000.0
    };
    let text = format!("{:.3}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Pretty-printed JSON document for the leaderboard
pub fn render_json(
    leaderboard: &Leaderboard,
    source: &str,
    updated_at: DateTime<Utc>,
) -> Result<String> {
    use serde_json::json;

    let records: Vec<_> = leaderboard
        .records
        .iter()
        .map(|ranked| {
            json!({
                "rank": ranked.display_rank(),
                "medal": ranked.medal(),
                "id": ranked.record.id,
                "name": ranked.record.name,
                "score": ranked.record.score,
                "level": ranked.record.level,
                "wins": ranked.record.wins,
            })
        })
        .collect();

    let report = json!({
        "source": source,
        "updated_at": updated_at.to_rfc3339(),
        "summary": leaderboard.summary,
        "records": records,
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::output(format!("Failed to serialize leaderboard: {}", e)))
}

/// CSV with a header row and one row per ranked participant
pub fn render_csv(leaderboard: &Leaderboard) -> Result<String> {
    let csv_error = |e: csv::Error| Error::output(format!("Failed to write CSV: {}", e));

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["rank", "name", "score", "level", "wins"])
        .map_err(csv_error)?;

    for ranked in &leaderboard.records {
        writer
            .write_record([
                ranked.display_rank().to_string(),
                ranked.record.name.clone(),
                ranked.record.score.to_string(),
                ranked.record.level.clone(),
                ranked.record.wins.to_string(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::output(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::output(format!("CSV output was not UTF-8: {}", e)))
}
