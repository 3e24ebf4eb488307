//! Configuration module for the blog crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; `Config::default()` targets the fly.io blog.
//!
//! # Example
//!
//! ```no_run
//! use blog_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawl starts at: {}", config.crawler.seed_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_ARTICLE_SELECTOR,
    DEFAULT_LINK_SELECTOR, DEFAULT_SEED_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::{parse_selector, validate};
