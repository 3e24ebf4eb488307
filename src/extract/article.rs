use crate::article::Article;
use crate::extract::normalize::normalize;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("hardcoded selector is valid"));

static BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, p").expect("hardcoded selector is valid"));

/// A body element that contributes to an article's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// `<h2>` or `<h3>`, carrying the heading level
    Heading(u8),
    /// `<p>`
    Paragraph,
}

impl Block {
    /// Maps an element name to a block kind
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "p" => Some(Self::Paragraph),
            _ => None,
        }
    }

    /// Formats already-normalized text as a content fragment
    ///
    /// Both heading levels render with the same `##` marker.
    pub fn render(self, text: &str) -> String {
        match self {
            Self::Heading(_) => format!("\n## {}\n\n", text),
            Self::Paragraph => format!("{}\n\n", text),
        }
    }
}

/// Lazily walks the body blocks under `element` in document order
///
/// Yields each block with its normalized text. Blocks whose text
/// normalizes to nothing are skipped.
pub fn blocks<'a>(element: ElementRef<'a>) -> impl Iterator<Item = (Block, String)> + 'a {
    element.select(&BLOCK_SELECTOR).filter_map(|el| {
        let block = Block::from_tag(el.value().name())?;
        let text = normalize(&el.text().collect::<String>());
        if text.is_empty() {
            None
        } else {
            Some((block, text))
        }
    })
}

/// Builds an [`Article`] from one article element
///
/// # Arguments
///
/// * `element` - The element matched by the article selector
/// * `url` - The resolved URL of the page, stored verbatim
pub fn extract_article(element: ElementRef<'_>, url: &str) -> Article {
    let title = element
        .select(&TITLE_SELECTOR)
        .next()
        .map(|h1| normalize(&h1.text().collect::<String>()))
        .unwrap_or_default();

    let content: String = blocks(element)
        .map(|(block, text)| block.render(&text))
        .collect();

    Article {
        title,
        url: url.to_string(),
        content: content.trim().to_string(),
    }
}

/// Extracts one [`Article`] per element matching `selector`
///
/// A page with no matching element yields nothing.
pub fn extract_articles(document: &Html, selector: &Selector, url: &str) -> Vec<Article> {
    document
        .select(selector)
        .map(|element| extract_article(element, url))
        .collect()
}
