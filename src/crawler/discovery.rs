//! Article link discovery on the listing page
//!
//! Links are read from anchors matching the configured selector, resolved
//! to absolute URLs, and handed out at most once per run.

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static BASE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("base[href]").expect("hardcoded selector is valid"));

/// Resolves an anchor href to an absolute URL
///
/// Hrefs starting with `http` are used as-is. Anything else is joined
/// against `base_url` with the fragment dropped. Empty and fragment-only
/// hrefs point back at the listing page and return `None`, as do hrefs
/// that cannot be joined.
///
/// # Example
///
/// ```
/// use blog_crawler::crawler::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://fly.io/blog/").unwrap();
/// assert_eq!(
///     resolve_href("/blog/post-1", &base).as_deref(),
///     Some("https://fly.io/blog/post-1")
/// );
/// ```
pub fn resolve_href(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("http") {
        return Some(href.to_string());
    }

    match base_url.join(href) {
        Ok(mut absolute_url) => {
            absolute_url.set_fragment(None);
            Some(absolute_url.to_string())
        }
        Err(e) => {
            tracing::debug!("Cannot resolve href {:?} against {}: {}", href, base_url, e);
            None
        }
    }
}

/// Returns the base URL relative links on `document` resolve against
///
/// A `<base href>` element overrides the request URL.
pub fn document_base(document: &Html, request_url: &Url) -> Url {
    document
        .select(&BASE_SELECTOR)
        .next()
        .and_then(|base| base.value().attr("href"))
        .and_then(|href| request_url.join(href.trim()).ok())
        .unwrap_or_else(|| request_url.clone())
}

/// Lazily yields the absolute URL of every anchor matching `selector`
///
/// Document order is preserved and duplicates are not filtered.
pub fn candidate_links<'a>(
    document: &'a Html,
    selector: &'a Selector,
    base_url: &'a Url,
) -> impl Iterator<Item = String> + 'a {
    document
        .select(selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(move |href| resolve_href(href, base_url))
}

/// Link discovery state for one crawl run
///
/// Owns the visited-URL set, which only grows. It is the only guard
/// against dispatching the same article twice.
#[derive(Debug)]
pub struct LinkDiscovery {
    selector: Selector,
    visited: HashSet<String>,
}

impl LinkDiscovery {
    /// Creates discovery state for anchors matching `selector`
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            visited: HashSet::new(),
        }
    }

    /// Returns the links on `document` that have not been seen this run
    ///
    /// Every returned URL is recorded as visited before this returns.
    ///
    /// # Arguments
    ///
    /// * `document` - The parsed listing page
    /// * `request_url` - The URL the listing page was fetched from
    pub fn discover(&mut self, document: &Html, request_url: &Url) -> Vec<String> {
        let base_url = document_base(document, request_url);
        let visited = &mut self.visited;

        candidate_links(document, &self.selector, &base_url)
            .filter(|link| {
                let fresh = visited.insert(link.clone());
                if !fresh {
                    tracing::trace!("Already visited: {}", link);
                }
                fresh
            })
            .collect()
    }

    /// Returns true if `url` was already handed out
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of distinct links handed out so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
