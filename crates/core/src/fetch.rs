//! Article fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from
//! various sources: HTTP/HTTPS URLs, local files, and standard input.
//! The URL path is the one network call in the pipeline; it is a plain
//! GET with a fixed timeout and fails on any non-2xx status.

use std::fs;
use std::path::PathBuf;

use crate::{Result, SentiraError};

/// HTTP client configuration for fetching article pages.
///
/// This struct controls timeout, user agent, and language settings for
/// HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// Accept-Language header value.
    pub accept_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Sentira/1.0; +https://github.com/stormlightlabs/sentira)"
                .to_string(),
            accept_language: "en-GB,en;q=0.9".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It respects the configured timeout, sends browser-like
/// `User-Agent` and `Accept-Language` headers, and fails with
/// [`SentiraError::HttpStatus`] on any non-success status. There is no
/// retry: a failed fetch aborts the whole run.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    use reqwest::Client;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| SentiraError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(SentiraError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SentiraError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", &config.accept_language)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SentiraError::Timeout { timeout: config.timeout }
            } else {
                SentiraError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SentiraError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SentiraError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SentiraError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SentiraError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Sentira"));
        assert!(config.accept_language.starts_with("en"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(SentiraError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(SentiraError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_reads_content() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "<html><body>hi</body></html>").unwrap();
        let content = fetch_file(tmp.path().to_str().unwrap()).unwrap();
        assert!(content.contains("hi"));
    }
}
