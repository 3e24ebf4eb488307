//! Article extraction
//!
//! This module turns parsed article pages into [`Article`](crate::Article)
//! records:
//! - Whitespace normalization for every piece of extracted text
//! - Title lookup from the first `<h1>`
//! - Body assembly from `<h2>`, `<h3>` and `<p>` elements in document order

mod article;
mod normalize;

pub use article::{blocks, extract_article, extract_articles, Block};
pub use normalize::normalize;
