//! Output module for persisting crawl results
//!
//! Collected articles are written once per run to a pretty-printed JSON
//! file named after the local time the run finished.

mod json;

pub use json::{output_filename, save_articles, write_articles};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize articles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
