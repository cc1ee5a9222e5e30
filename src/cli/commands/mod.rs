//! Command implementations for the leaderboard processor CLI
//!
//! Each command is implemented in its own module:
//! - `rank`: one refresh cycle printed as a table, JSON or CSV
//! - `watch`: live leaderboard refreshed on an interval or on Enter

pub mod rank;
pub mod render;
pub mod shared;
pub mod watch;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use tokio_util::sync::CancellationToken;

/// Dispatch to the subcommand handler
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    match args.command {
        Some(Commands::Rank(rank_args)) => rank::run_rank(rank_args, cancellation_token).await,
        Some(Commands::Watch(watch_args)) => watch::run_watch(watch_args, cancellation_token).await,
        None => Err(Error::configuration("no command given")),
    }
}
