//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from
//! various sources: HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "fetch")]
use url::Url;

use crate::{AnalyserError, Result};
#[cfg(feature = "fetch")]
use crate::{Summary, analyse_html};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; WebAnalyser/1.0)".to_string() }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs an HTTP GET, follows redirects, and returns the body as text.
/// Anything other than `200 OK` is an [`AnalyserError::UnexpectedStatus`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| AnalyserError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(AnalyserError::InvalidUrl(
            "URL must use the http:// or https:// scheme".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(AnalyserError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AnalyserError::Timeout { timeout: config.timeout }
            } else {
                AnalyserError::HttpError(e)
            }
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!(url, status = status.as_u16(), "page fetch rejected");
        return Err(AnalyserError::UnexpectedStatus { status: status.as_u16() });
    }

    let content = response.text().await?;
    tracing::debug!(url, bytes = content.len(), "page fetched");

    Ok(content)
}

/// Fetches `url` and analyses the returned page.
///
/// The URL itself is the baseline for internal/external link
/// classification, so redirects do not change which links count as
/// internal.
#[cfg(feature = "fetch")]
pub async fn fetch_and_analyse(url: &str, config: &FetchConfig) -> Result<Summary> {
    let source_url = Url::parse(url).map_err(|e| AnalyserError::InvalidUrl(e.to_string()))?;
    let html = fetch_url(url, config).await?;
    Ok(analyse_html(&html, &source_url))
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(AnalyserError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(AnalyserError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(AnalyserError::from)?;

    Ok(buffer)
}
