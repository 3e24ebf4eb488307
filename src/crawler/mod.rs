//! Crawler module for fetching the listing page and its articles
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching of listing and article pages
//! - Article link discovery with per-run deduplication
//! - Overall crawl coordination and result collection

mod coordinator;
mod discovery;
mod fetcher;

pub use coordinator::{run_crawl, Coordinator, CrawlReport, SEPARATOR};
pub use discovery::{candidate_links, document_base, resolve_href, LinkDiscovery};
pub use fetcher::{build_http_client, fetch_page, log_fetch_error, FetchError, FetchedPage};
