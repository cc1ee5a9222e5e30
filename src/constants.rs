//! Application constants for the leaderboard processor
//!
//! This module contains the header alias tables, field defaults and refresh
//! settings used throughout the leaderboard processor.

// =============================================================================
// Header Aliases
// =============================================================================

/// Header aliases tried, in priority order, for each canonical field
///
/// Matching is case-sensitive: only the spellings listed here are recognised.
pub mod aliases {
    /// Headers that may carry the participant name
    pub const NAME: &[&str] = &["name", "Name", "player", "Player"];

    /// Headers that may carry the score
    pub const SCORE: &[&str] = &["score", "Score", "points", "Points"];

    /// Headers that may carry the level / tier label
    pub const LEVEL: &[&str] = &["level", "Level", "rank", "Rank"];

    /// Headers that may carry the win count
    pub const WINS: &[&str] = &["wins", "Wins", "games", "Games"];
}

// =============================================================================
// Field Defaults
// =============================================================================

/// Placeholder shown when a row has no level
pub const LEVEL_PLACEHOLDER: &str = "-";

/// Score used when the score cell is missing or not numeric
pub const DEFAULT_SCORE: f64 = 0.0;

/// Win count used when the wins cell is missing or not numeric
pub const DEFAULT_WINS: i64 = 0;

/// Number of podium positions that receive a medal
pub const PODIUM_SIZE: usize = 3;

// =============================================================================
// Type Inference
// =============================================================================

/// Largest magnitude converted to a number during type inference; larger
/// numeric-looking cells stay as text so no digits are lost
pub const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0; // 2^53

// =============================================================================
// Refresh & Fetch Defaults
// =============================================================================

/// Default CSV source when none is configured
pub const DEFAULT_SOURCE: &str = "leaderboard.csv";

/// Default refresh interval in milliseconds
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5_000;

/// Smallest refresh interval accepted by configuration validation
pub const MIN_REFRESH_INTERVAL_MS: u64 = 100;

/// Default fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default log level when neither -v nor -q is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Configuration Sources
// =============================================================================

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "leaderboard-processor";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables that override file configuration
pub mod env_vars {
    pub const SOURCE: &str = "LEADERBOARD_SOURCE";
    pub const REFRESH_MS: &str = "LEADERBOARD_REFRESH_MS";
    pub const AUTO_REFRESH: &str = "LEADERBOARD_AUTO_REFRESH";
}
