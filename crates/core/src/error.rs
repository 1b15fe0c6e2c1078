//! Error types for Sentira operations.
//!
//! This module defines the main error type [`SentiraError`] which represents
//! all possible errors that can occur during fetching, content extraction,
//! and sentiment scoring.
//!
//! # Example
//!
//! ```rust
//! use sentira_core::{SentiraError, Result};
//!
//! fn extracted_or_fail(text: &str) -> Result<&str> {
//!     if text.is_empty() {
//!         return Err(SentiraError::HtmlParseError("empty input".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the article sentiment pipeline.
///
/// The variants cover three failure domains, none of which is recovered
/// from by a later stage: fetch (network/HTTP), extraction (HTML), and
/// scoring (lexicon/polarity). A failure in any stage aborts the run.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status.
    ///
    /// Returned when the server responds with anything outside 2xx.
    /// The run aborts immediately; there is no retry.
    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when HTML cannot be queried, usually due to an invalid
    /// CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Polarity scoring failure.
    ///
    /// Returned when the sentiment scorer cannot process its input, for
    /// example when constructed over an empty lexicon. Never converted
    /// to a default label.
    #[error("Sentiment scoring failed: {0}")]
    ScoringError(String),

    /// Lexicon resource errors.
    ///
    /// Returned when the on-disk lexicon copy cannot be located or parsed.
    #[error("Lexicon error: {0}")]
    LexiconError(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for SentiraError.
///
/// This is a convenience alias for `std::result::Result<T, SentiraError>`.
pub type Result<T> = std::result::Result<T, SentiraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SentiraError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = SentiraError::HttpStatus { status: 404, url: "https://example.com".to_string() };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("example.com"));
    }

    #[test]
    fn test_timeout_error() {
        let err = SentiraError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_scoring_error_message() {
        let err = SentiraError::ScoringError("empty lexicon".to_string());
        assert!(err.to_string().contains("empty lexicon"));
    }
}
