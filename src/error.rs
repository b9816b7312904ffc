//! Error types for the record browser.
//!
//! Engine operations on records, selection, edits and pagination never fail:
//! stale identifiers and out-of-range pages degrade to no-ops or empty pages.
//! Errors only come from configuration and from fetching the remote source.

use thiserror::Error;

/// Main error type for browser operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),
}

impl From<serde_json::Error> for BrowserError {
    fn from(e: serde_json::Error) -> Self {
        BrowserError::Deserialization(e.to_string())
    }
}

/// Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
