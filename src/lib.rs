//! blog-crawler: a single-site blog scraper
//!
//! This crate fetches a blog listing page, follows every article link it
//! finds there, extracts each article's title and body text, and writes the
//! collected articles to a timestamped JSON file.

pub mod article;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;

use thiserror::Error;

pub use crawler::FetchError;
pub use output::OutputError;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch seed page {url}: {source}")]
    SeedFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to fetch article {url}: {source}")]
    ArticleFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use article::Article;
pub use config::Config;
pub use crawler::{run_crawl, CrawlReport};
pub use extract::{extract_article, normalize};
