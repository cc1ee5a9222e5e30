//! Shared components for CLI commands
//!
//! Logging setup and layered configuration loading used by every command.

use crate::app::adapters::source::SourceFetcher;
use crate::app::services::refresh::RefreshCycle;
use crate::cli::args::CommonArgs;
use crate::config::{Config, default_config_path};
use crate::{Error, Result};
use tracing::{debug, info};

/// Set up structured logging to stderr
///
/// RUST_LOG takes precedence; otherwise `level` applies to this crate only.
pub fn setup_logging(level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("leaderboard_processor={}", level)));

    let init_result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env -> args)
///
/// Logging is initialised here too, since the configured level is only known
/// once the file and environment have been read.
pub fn load_configuration<F>(common: &CommonArgs, overrides: F) -> Result<Config>
where
    F: FnOnce(Config) -> Config,
{
    let config = Config::load_layered(common.config_file.as_deref())?;
    let config = overrides(apply_cli_overrides(config, common));

    setup_logging(&config.logging.level, common.quiet)?;

    match &common.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => info!("Using config file: {}", path.display()),
            None => info!("No config file found, using defaults and environment variables"),
        },
    }

    config.validate()?;
    Ok(config)
}

/// Apply the options every command shares
pub fn apply_cli_overrides(config: Config, common: &CommonArgs) -> Config {
    let mut config = config;
    if let Some(source) = &common.source {
        config = config.with_source(source.clone());
    }
    if let Some(level) = common.get_log_level() {
        config = config.with_log_level(level);
    }
    config
}

/// Build a refresh cycle for the configured source
pub fn build_cycle(config: &Config) -> Result<RefreshCycle<SourceFetcher>> {
    let source = config.csv_source()?;
    let fetcher = SourceFetcher::new(source, config.fetch.timeout())?;
    Ok(RefreshCycle::new(fetcher))
}
