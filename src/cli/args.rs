//! Command-line argument definitions for the leaderboard processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the leaderboard processor
///
/// Turns a CSV score feed into a ranked leaderboard, once or continuously.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "leaderboard",
    version,
    about = "Rank a CSV score feed into a live leaderboard",
    long_about = "Reads a loosely structured CSV score feed from a file or URL, resolves \
                  participant names, scores, levels and wins through common header spellings, \
                  and prints a leaderboard ordered by score. The watch command keeps the \
                  leaderboard refreshed on an interval or on demand."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch the feed once and print the leaderboard
    Rank(RankArgs),
    /// Show a live leaderboard that refreshes on an interval or when Enter is pressed
    Watch(WatchArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// CSV source: a file path or an http(s) URL
    ///
    /// Overrides the `source` setting from the config file and the
    /// LEADERBOARD_SOURCE environment variable. Defaults to leaderboard.csv.
    #[arg(short = 's', long = "source", value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/leaderboard-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the rank command
#[derive(Debug, Clone, ClapArgs)]
pub struct RankArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the leaderboard
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Arguments for the watch command
#[derive(Debug, Clone, ClapArgs)]
pub struct WatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Refresh interval in milliseconds (minimum 100)
    #[arg(short = 'i', long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Only refresh when Enter is pressed
    #[arg(long = "no-auto-refresh")]
    pub no_auto_refresh: bool,
}

/// Output formats supported by the rank command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored table for terminals
    Human,
    /// Pretty-printed JSON document
    Json,
    /// CSV with one row per ranked participant
    Csv,
}

impl CommonArgs {
    /// Log level requested on the command line, if any
    ///
    /// Returns `None` when neither -v nor -q was given so the configured
    /// level applies.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }
}
