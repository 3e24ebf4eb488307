//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with the configured user agent
//! - GET requests for listing and article pages
//! - Error classification (network, status, body)

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Ways a single page fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    fn from_request(url: &str, e: reqwest::Error) -> Self {
        let url = url.to_string();
        if e.is_timeout() {
            FetchError::Timeout { url }
        } else if e.is_connect() {
            FetchError::Connect { url, source: e }
        } else {
            FetchError::Network { url, source: e }
        }
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value
    pub content_type: Option<String>,
    /// Page body content
    pub body: String,
}

impl FetchedPage {
    /// Returns true if the response declared an HTML content type
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("html"))
            .unwrap_or(false)
    }
}

/// Builds an HTTP client with proper configuration
///
/// The client follows up to 10 redirects and applies the configured
/// whole-request timeout; no other network limits are set.
///
/// # Example
///
/// ```
/// use blog_crawler::config::Config;
/// use blog_crawler::crawler::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.crawler, &config.user_agent).unwrap();
/// ```
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(FetchedPage)` |
/// | Non-2xx after redirects | `FetchError::Status` |
/// | Timeout | `FetchError::Timeout` |
/// | Connection refused, DNS, TLS | `FetchError::Connect` |
/// | Body decode failure | `FetchError::Body` |
///
/// There is no retry.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_request(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })?;

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}

/// Reports a failed fetch, whichever page it was for
pub fn log_fetch_error(url: &str, error: &FetchError) {
    tracing::error!(url = %url, "Error: {}", error);
}
