//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `LEADERBOARD_*` environment variables, then command-line flags applied by
//! the CLI through the `with_*` builders.

use crate::app::adapters::source::CsvSource;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LOG_LEVEL,
    DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_SOURCE, MIN_REFRESH_INTERVAL_MS, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Refresh scheduling settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Refresh on a fixed interval in addition to manual triggers
    pub auto_refresh: bool,

    /// Interval between scheduled refreshes in milliseconds
    pub interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Fetch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when neither RUST_LOG nor -v/-q is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Top-level configuration for the leaderboard processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV feed location: a file path or an http(s) URL
    pub source: String,

    pub refresh: RefreshConfig,

    pub fetch: FetchConfig,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            refresh: RefreshConfig::default(),
            fetch: FetchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Platform config file location, e.g. `~/.config/leaderboard-processor/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::configuration(format!("invalid TOML: {}", e)))
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| {
            Error::configuration(format!("invalid TOML in {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load defaults, then a config file, then environment overrides
    ///
    /// An explicit `file` must exist. Without one, the platform default path
    /// is used only if a file is present there.
    pub fn load_layered(file: Option<&Path>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `LEADERBOARD_*` variables from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(env_vars::SOURCE) {
            debug!("{} overrides source", env_vars::SOURCE);
            self.source = source;
        }

        if let Some(raw) = lookup(env_vars::REFRESH_MS) {
            self.refresh.interval_ms = raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of milliseconds, got '{}'",
                    env_vars::REFRESH_MS,
                    raw
                ))
            })?;
        }

        if let Some(raw) = lookup(env_vars::AUTO_REFRESH) {
            self.refresh.auto_refresh = parse_flag(&raw).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true or false, got '{}'",
                    env_vars::AUTO_REFRESH,
                    raw
                ))
            })?;
        }

        Ok(())
    }

    /// Check the settings before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::configuration("source must not be empty"));
        }
        if self.refresh.interval_ms < MIN_REFRESH_INTERVAL_MS {
            return Err(Error::configuration(format!(
                "refresh interval must be at least {} ms, got {} ms",
                MIN_REFRESH_INTERVAL_MS, self.refresh.interval_ms
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::configuration("fetch timeout must be at least 1 second"));
        }
        Ok(())
    }

    /// The configured source as a path or URL
    pub fn csv_source(&self) -> Result<CsvSource> {
        Ok(CsvSource::parse(&self.source)?)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.refresh.interval_ms = interval_ms;
        self
    }

    pub fn with_auto_refresh(mut self, auto_refresh: bool) -> Self {
        self.refresh.auto_refresh = auto_refresh;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
