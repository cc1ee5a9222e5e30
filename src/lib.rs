//! Leaderboard Processor Library
//!
//! A Rust library for turning a periodically refreshed CSV score feed into a
//! ranked leaderboard.
//!
//! This library provides tools for:
//! - Parsing loosely-structured CSV text into typed rows with tolerant header handling
//! - Resolving canonical fields through prioritised header aliases
//! - Coercing malformed numeric cells to safe defaults instead of rejecting rows
//! - Producing a deterministic, stable score ordering with podium positions
//! - Running fetch → parse → rank refresh cycles that retain last-known-good data

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_normalizer;
        pub mod ranking;
        pub mod refresh;
    }
    pub mod adapters {
        pub mod source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::source::{CsvSource, FetchError, SourceFetcher, TextSource};
pub use app::models::{CanonicalRecord, Leaderboard, Medal, RankedRecord, RawRow, RawValue};
pub use app::services::csv_normalizer::ParseError;
pub use app::services::ranking::{ProcessingError, RankingPipeline};
pub use config::Config;

/// Result type alias for the leaderboard processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for leaderboard processing operations
///
/// The first three variants map onto the three stages of a refresh cycle and
/// carry the banner wording shown to users when a cycle fails.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The CSV source could not be read
    #[error("Error loading CSV file: {0}")]
    Fetch(#[from] FetchError),

    /// The CSV text was structurally malformed
    #[error("Error parsing CSV: {0}")]
    Parse(#[from] ParseError),

    /// Mapping rows to ranked records failed
    #[error("Error processing CSV data: {0}")]
    Processing(#[from] ProcessingError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Rendering results in a machine-readable format failed
    #[error("Output error: {message}")]
    Output { message: String },

    /// The user interrupted a running command
    #[error("Interrupted: {message}")]
    Interrupted { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an output formatting error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
