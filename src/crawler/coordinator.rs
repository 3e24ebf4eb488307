//! Crawler coordinator - main crawl orchestration logic
//!
//! This module runs the crawl from start to finish:
//! - Fetching the seed listing page
//! - Discovering article links on it
//! - Fetching and extracting each article in discovery order
//! - Handing the collected articles to the JSON writer

use crate::article::Article;
use crate::config::{parse_selector, validate, Config};
use crate::crawler::discovery::LinkDiscovery;
use crate::crawler::fetcher::{build_http_client, fetch_page, log_fetch_error, FetchedPage};
use crate::extract::extract_articles;
use crate::output::save_articles;
use crate::CrawlError;
use reqwest::Client;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};

/// Printed after each extracted article
pub const SEPARATOR: &str = "----------------------------------------";

/// Main crawler coordinator structure
///
/// Owns everything that changes during a run: the visited-URL set (inside
/// [`LinkDiscovery`]) and the ordered list of extracted articles.
pub struct Coordinator {
    config: Config,
    client: Client,
    discovery: LinkDiscovery,
    article_selector: Selector,
    articles: Vec<Article>,
    articles_failed: usize,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - Invalid configuration or HTTP client setup failed
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        validate(&config)?;

        let link_selector = parse_selector(&config.crawler.link_selector)?;
        let article_selector = parse_selector(&config.crawler.article_selector)?;
        let client = build_http_client(&config.crawler, &config.user_agent)?;

        Ok(Self {
            config,
            client,
            discovery: LinkDiscovery::new(link_selector),
            article_selector,
            articles: Vec::new(),
            articles_failed: 0,
        })
    }

    /// Runs the crawl
    ///
    /// 1. Fetches the seed listing page; failure here aborts the run
    /// 2. Discovers article links on it
    /// 3. Fetches each new link in document order and extracts its articles
    ///
    /// A failed article fetch is logged and skipped.
    pub async fn run(&mut self) -> Result<(), CrawlError> {
        let seed_url = self.config.crawler.seed_url.clone();
        tracing::info!("Fetching listing page {}", seed_url);

        let listing = match fetch_page(&self.client, &seed_url).await {
            Ok(page) => page,
            Err(e) => {
                log_fetch_error(&seed_url, &e);
                return Err(CrawlError::SeedFetch {
                    url: seed_url,
                    source: e,
                });
            }
        };

        let links = self.discover_links(&listing);
        tracing::info!("Discovered {} article links", links.len());

        for link in links {
            println!("\nProcessing: {}", link);

            if let Err(e) = self.process_article(&link).await {
                tracing::warn!("Skipping article: {}", e);
                self.articles_failed += 1;
            }
        }

        tracing::info!(
            "Crawl finished: {} articles extracted, {} links failed",
            self.articles.len(),
            self.articles_failed
        );

        Ok(())
    }

    /// Runs link discovery over the listing page
    fn discover_links(&mut self, listing: &FetchedPage) -> Vec<String> {
        if !listing.is_html() {
            tracing::warn!(
                "Listing page {} is not HTML ({}), no links to follow",
                listing.final_url,
                listing.content_type.as_deref().unwrap_or("no content type")
            );
            return Vec::new();
        }

        let document = Html::parse_document(&listing.body);
        self.discovery.discover(&document, &listing.final_url)
    }

    /// Fetches one article page and collects the articles on it
    ///
    /// Only the article selector is applied here, never the link selector.
    async fn process_article(&mut self, url: &str) -> Result<(), CrawlError> {
        let page = fetch_page(&self.client, url).await.map_err(|e| {
            log_fetch_error(url, &e);
            CrawlError::ArticleFetch {
                url: url.to_string(),
                source: e,
            }
        })?;

        if !page.is_html() {
            tracing::warn!("Article page {} is not HTML, nothing extracted", url);
            return Ok(());
        }

        let extracted = {
            let document = Html::parse_document(&page.body);
            extract_articles(&document, &self.article_selector, page.final_url.as_str())
        };

        if extracted.is_empty() {
            tracing::debug!("No article element on {}", url);
        }

        for article in extracted {
            println!("Title: {}", article.title);
            println!("{}", SEPARATOR);
            self.articles.push(article);
        }

        Ok(())
    }

    /// Articles collected so far, in extraction order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of distinct article links dispatched
    pub fn links_discovered(&self) -> usize {
        self.discovery.visited_count()
    }

    /// Number of article links whose fetch failed
    pub fn articles_failed(&self) -> usize {
        self.articles_failed
    }

    /// Consumes the coordinator, returning the collected articles
    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}

/// Outcome of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Every successfully extracted article, in extraction order
    pub articles: Vec<Article>,
    /// Where the JSON file was written; `None` if writing failed
    pub output_path: Option<PathBuf>,
    /// Distinct article links dispatched
    pub links_discovered: usize,
    /// Article links whose fetch failed
    pub articles_failed: usize,
}

/// Runs a complete crawl and writes the results
///
/// Seed fetch failure is the only error returned once the coordinator is
/// built. A failure to write the JSON file is logged and reported through
/// `output_path` being `None`.
///
/// # Example
///
/// ```no_run
/// use blog_crawler::config::Config;
/// use blog_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(Config::default()).await?;
/// println!("Scraped {} articles", report.articles.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    let output_dir = PathBuf::from(&config.output.directory);

    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await?;

    let links_discovered = coordinator.links_discovered();
    let articles_failed = coordinator.articles_failed();
    let articles = coordinator.into_articles();

    let output_path = persist(&articles, &output_dir);

    Ok(CrawlReport {
        articles,
        output_path,
        links_discovered,
        articles_failed,
    })
}

fn persist(articles: &[Article], output_dir: &Path) -> Option<PathBuf> {
    match save_articles(articles, output_dir) {
        Ok(path) => {
            tracing::info!("Saved {} articles to {}", articles.len(), path.display());
            Some(path)
        }
        Err(e) => {
            tracing::error!("Error saving articles to JSON: {}", e);
            None
        }
    }
}
