use clap::Parser;
use leaderboard_processor::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Ctrl+C cancels the token; commands finish their current cycle and return
        let signal_token = cancellation_token.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                    signal_token.cancel();
                }
                Err(e) => eprintln!("Failed to install CTRL+C signal handler: {}", e),
            }
        });

        commands::run(args, cancellation_token).await
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Leaderboard Processor - CSV score feed to ranked leaderboard");
    println!("============================================================");
    println!();
    println!("Reads a CSV score feed from a file or URL and prints participants");
    println!("ordered by score, once or as a live refreshing dashboard.");
    println!();
    println!("USAGE:");
    println!("    leaderboard <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    rank        Fetch the feed once and print the leaderboard");
    println!("    watch       Live leaderboard with auto-refresh and Enter to refresh");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Rank the default feed (./leaderboard.csv):");
    println!("    leaderboard rank");
    println!();
    println!("    # Rank a remote feed as JSON:");
    println!("    leaderboard rank --source https://example.com/scores.csv --format json");
    println!();
    println!("    # Watch a feed, refreshing every 2 seconds:");
    println!("    leaderboard watch --source scores.csv --interval-ms 2000");
    println!();
    println!("    # Watch without auto-refresh (press Enter to refresh):");
    println!("    leaderboard watch --no-auto-refresh");
    println!();
    println!("For detailed help on any command, use:");
    println!("    leaderboard <COMMAND> --help");
}
