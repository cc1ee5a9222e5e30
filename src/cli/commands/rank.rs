//! Rank command: one refresh cycle printed to stdout

use super::render;
use super::shared::{build_cycle, load_configuration};
use crate::cli::args::{OutputFormat, RankArgs};
use crate::{Error, Result};
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Fetch, parse and rank the feed once, then print it in the requested format
///
/// A failed cycle is returned as an error so the process exits non-zero.
pub async fn run_rank(args: RankArgs, cancellation_token: CancellationToken) -> Result<()> {
    let config = load_configuration(&args.common, |config| config)?;
    let cycle = build_cycle(&config)?;

    let leaderboard = tokio::select! {
        result = cycle.execute() => result?,
        _ = cancellation_token.cancelled() => {
            return Err(Error::interrupted("Ranking interrupted by user"));
        }
    };
    let updated_at = Utc::now();

    info!(
        "Ranked {} participants from {}",
        leaderboard.len(),
        config.source
    );

    let output = match args.format {
        OutputFormat::Human => render::render_report(&leaderboard, updated_at),
        OutputFormat::Json => render::render_json(&leaderboard, &config.source, updated_at)?,
        OutputFormat::Csv => render::render_csv(&leaderboard)?,
    };

    print!("{}", output);
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
