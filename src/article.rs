//! The article record collected by the crawler

use serde::{Deserialize, Serialize};

/// One scraped article
///
/// Field order here is the field order of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Normalized text of the article's first `<h1>`
    pub title: String,

    /// Absolute URL of the page the article was extracted from
    pub url: String,

    /// Markdown-like body built from the article's headings and paragraphs
    pub content: String,
}
