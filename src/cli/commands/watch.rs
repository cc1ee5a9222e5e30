//! Watch command: live leaderboard in the terminal
//!
//! The screen is redrawn after every refresh cycle. Each line read from stdin
//! (pressing Enter) requests a manual refresh; closing stdin stops manual
//! triggering.

use super::render;
use super::shared::{build_cycle, load_configuration};
use crate::Result;
use crate::app::services::refresh::{LeaderboardState, RefreshScheduler};
use crate::cli::args::WatchArgs;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Run the refresh scheduler until Ctrl+C
pub async fn run_watch(args: WatchArgs, cancellation_token: CancellationToken) -> Result<()> {
    let config = load_configuration(&args.common, |mut config| {
        if let Some(interval_ms) = args.interval_ms {
            config = config.with_interval_ms(interval_ms);
        }
        if args.no_auto_refresh {
            config = config.with_auto_refresh(false);
        }
        config
    })?;

    let cycle = build_cycle(&config)?;
    let scheduler = RefreshScheduler::new(cycle, config.refresh.clone());

    // Capacity 1: presses made while a refresh is already pending are dropped
    let (trigger_tx, trigger_rx) = mpsc::channel(1);
    tokio::spawn(forward_enter_presses(trigger_tx));

    let interactive = std::io::stdout().is_terminal();
    let source = config.source.clone();
    let refresh = config.refresh.clone();
    let mut state = LeaderboardState::new();

    let cycles = scheduler
        .run(&mut state, trigger_rx, cancellation_token, |state| {
            let screen = render::render_dashboard(state, &source, &refresh);
            let mut stdout = std::io::stdout().lock();
            if interactive {
                let _ = write!(stdout, "{}", CLEAR_SCREEN);
            }
            let _ = write!(stdout, "{}", screen);
            let _ = stdout.flush();
        })
        .await;

    info!("Watch stopped after {} refresh cycles", cycles);
    Ok(())
}

/// Send one trigger per line read from stdin until EOF
async fn forward_enter_presses(triggers: mpsc::Sender<()>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(_)) => match triggers.try_send(()) {
                Ok(()) => debug!("Manual refresh requested"),
                Err(mpsc::error::TrySendError::Full(())) => {
                    debug!("Refresh already pending, ignoring key press")
                }
                Err(mpsc::error::TrySendError::Closed(())) => break,
            },
            Ok(None) => {
                debug!("stdin closed, manual refresh unavailable");
                break;
            }
            Err(e) => {
                debug!("Failed to read stdin: {}", e);
                break;
            }
        }
    }
}
