use serde::Deserialize;

/// Listing page the crawl starts from
pub const DEFAULT_SEED_URL: &str = "https://fly.io/blog/";

/// Anchors on the listing page that point at articles
pub const DEFAULT_LINK_SELECTOR: &str = r#"a[class="opacity-0 absolute inset-0"]"#;

/// Element on an article page holding the article itself
pub const DEFAULT_ARTICLE_SELECTOR: &str = "article";

/// Main configuration structure for the crawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Listing page to start crawling from
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// CSS selector for article links on the listing page
    #[serde(rename = "link-selector")]
    pub link_selector: String,

    /// CSS selector for the article element on an article page
    #[serde(rename = "article-selector")]
    pub article_selector: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            article_selector: DEFAULT_ARTICLE_SELECTOR.to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) => format!("{}/{} (+{})", self.crawler_name, self.crawler_version, url),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the `articles_<timestamp>.json` file is written to
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}
