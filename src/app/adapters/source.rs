//! CSV feed sources
//!
//! Provides the fetch side of a refresh cycle: reading raw feed bytes from
//! a local file or an HTTP(S) URL. Sources implement [`TextSource`] so the
//! refresh cycle can be driven by any byte provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Location of a CSV feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CsvSource {
    /// Local file path
    Path(PathBuf),
    /// `http://` or `https://` URL
    Url(String),
}

impl CsvSource {
    /// Interpret a source string: HTTP(S) URLs become [`CsvSource::Url`],
    /// anything else a file path
    pub fn parse(source: &str) -> Result<Self, FetchError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(FetchError::EmptySource);
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(CsvSource::Url(trimmed.to_string()))
        } else {
            Ok(CsvSource::Path(PathBuf::from(trimmed)))
        }
    }

    /// True for HTTP(S) sources
    pub fn is_remote(&self) -> bool {
        matches!(self, CsvSource::Url(_))
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvSource::Path(path) => write!(f, "{}", path.display()),
            CsvSource::Url(url) => f.write_str(url),
        }
    }
}

impl FromStr for CsvSource {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CsvSource::parse(s)
    }
}

impl TryFrom<String> for CsvSource {
    type Error = FetchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CsvSource::parse(&value)
    }
}

impl From<CsvSource> for String {
    fn from(source: CsvSource) -> Self {
        source.to_string()
    }
}

/// Reasons a feed could not be fetched
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// No source was configured
    #[error("No CSV source configured")]
    EmptySource,

    /// Reading a local file failed
    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request could not be completed
    #[error("Failed to load CSV from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Failed to load CSV: {status} {reason}")]
    Status { url: String, status: u16, reason: String },

    /// The HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A provider of raw CSV bytes
pub trait TextSource {
    /// Fetch the current feed contents
    fn fetch_text(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;

    /// Human-readable description of where the feed comes from
    fn describe(&self) -> String;
}

/// Fetches a [`CsvSource`] from disk or over HTTP
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    source: CsvSource,
    client: reqwest::Client,
}

impl SourceFetcher {
    /// Create a fetcher whose HTTP requests give up after `timeout`
    pub fn new(source: CsvSource, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { source, client })
    }

    pub fn source(&self) -> &CsvSource {
        &self.source
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

impl TextSource for SourceFetcher {
    async fn fetch_text(&self) -> Result<Vec<u8>, FetchError> {
        match &self.source {
            CsvSource::Path(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| FetchError::File {
                        path: path.clone(),
                        source,
                    })?;
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            CsvSource::Url(url) => self.fetch_url(url).await,
        }
    }

    fn describe(&self) -> String {
        self.source.to_string()
    }
}
