//! Error types for search, persistence and download operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No API key was configured; only search operations need one.
    #[error("Missing API key. Add PIXABAY_API_KEY to config/.env or the environment")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The search term has no characters that survive slugification.
    #[error("Search term '{term}' does not produce a usable directory name")]
    InvalidTerm { term: String },

    /// The search endpoint answered with a non-success status. `url` has the
    /// API key redacted.
    #[error("Search request {url} failed with HTTP {status}")]
    Transport { url: String, status: u16 },

    /// Connection, timeout or body decoding failure inside reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Download was requested for a term that was never searched and saved.
    #[error("No saved search results at {}; run a search first", .path.display())]
    MissingSnapshot { path: PathBuf },

    /// A single image could not be fetched. Only surfaced under the abort policy.
    #[error("Failed to download '{url}': {message}")]
    ItemFetch { url: String, message: String },

    /// A hit record whose image URL carries no file extension.
    #[error("Cannot derive a file name for '{url}': {reason}")]
    InvalidHit { url: String, reason: String },

    #[error("File operation failed for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write credits: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn item_fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ItemFetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Whether the error only concerns one image of a batch.
    pub fn is_per_item(&self) -> bool {
        matches!(self, Self::ItemFetch { .. } | Self::InvalidHit { .. })
    }
}
