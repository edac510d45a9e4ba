//! Error types for web analyser operations.
//!
//! This module defines the main error type [`AnalyserError`] which represents
//! everything that can go wrong before a page reaches the analysis engine:
//! fetching, reading local files, and serializing results. The traversal
//! itself never fails; malformed links are a classification outcome.
//!
//! # Example
//!
//! ```rust
//! use web_analyser_core::{AnalyserError, Result};
//!
//! fn require_body(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(AnalyserError::InvalidUrl("empty page".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and analysing web pages.
///
/// # Example
///
/// ```rust
/// use web_analyser_core::AnalyserError;
///
/// let err = AnalyserError::UnexpectedStatus { status: 404 };
/// assert_eq!(err.status_code(), Some(404));
/// ```
#[derive(Error, Debug)]
pub enum AnalyserError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or does not pass the URL gate.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page was fetched but the server did not answer with 200 OK.
    #[error("HTTP status code not 200, got: {status}")]
    UnexpectedStatus { status: u16 },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Wraps standard I/O errors for file and stdin input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Summary could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl AnalyserError {
    /// HTTP status code received from the remote server, if any.
    ///
    /// Connection failures and local errors carry no status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            #[cfg(feature = "fetch")]
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnalyserError {
    fn from(err: serde_json::Error) -> Self {
        AnalyserError::Serialization(err.to_string())
    }
}

/// Result type alias for AnalyserError.
pub type Result<T> = std::result::Result<T, AnalyserError>;
