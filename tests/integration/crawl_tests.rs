//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! listing -> article -> JSON cycle end-to-end.

use blog_crawler::config::Config;
use blog_crawler::crawler::{run_crawl, Coordinator};
use blog_crawler::{Article, CrawlError, FetchError};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the mock server's blog listing
fn create_test_config(server: &MockServer, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.crawler.seed_url = format!("{}/blog/", server.uri());
    config.crawler.request_timeout_secs = 5;
    config.user_agent.crawler_name = "TestBot".to_string();
    config.output.directory = output_dir.display().to_string();
    config
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

fn listing_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<article><h2>Card</h2><a class="opacity-0 absolute inset-0" href="{}"></a></article>"#,
                href
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Blog</title></head><body>
        <nav><a href="/about/">About</a></nav>
        {}
        </body></html>"#,
        anchors
    )
}

fn article_page(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();
    format!(
        r#"<html><body><header><p>Site header</p></header>
        <article><h1>{}</h1>{}</article>
        </body></html>"#,
        title, body
    )
}

async fn mount_listing(server: &MockServer, hrefs: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/blog/"))
        .respond_with(html(listing_page(hrefs)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_article(server: &MockServer, route: &str, title: &str, paragraphs: &[&str]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(article_page(title, paragraphs)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_duplicate_links_fetched_once() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["/blog/post-1/", "/blog/post-2/", "/blog/post-1/"]).await;
    mount_article(&server, "/blog/post-1/", "First", &["Hello.", "World."]).await;
    mount_article(&server, "/blog/post-2/", "Second", &["Only one."]).await;

    let mut coordinator = Coordinator::new(create_test_config(&server, out.path())).unwrap();
    coordinator.run().await.unwrap();

    let articles = coordinator.articles();
    assert_eq!(articles.len(), 2);
    assert_eq!(coordinator.links_discovered(), 2);

    assert_eq!(articles[0].title, "First");
    assert_eq!(articles[0].url, format!("{}/blog/post-1/", server.uri()));
    assert_eq!(articles[0].content, "Hello.\n\nWorld.");

    assert_eq!(articles[1].title, "Second");
    assert_eq!(articles[1].content, "Only one.");

    server.verify().await;
}

#[tokio::test]
async fn test_failed_article_is_skipped() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["/blog/good/", "/blog/broken/"]).await;
    mount_article(&server, "/blog/good/", "Good", &["Fine."]).await;
    Mock::given(method("GET"))
        .and(path("/blog/broken/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let report = run_crawl(create_test_config(&server, out.path()))
        .await
        .unwrap();

    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].title, "Good");
    assert_eq!(report.links_discovered, 2);
    assert_eq!(report.articles_failed, 1);
    assert!(report.output_path.is_some());
}

#[tokio::test]
async fn test_seed_failure_is_fatal() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/blog/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut coordinator = Coordinator::new(create_test_config(&server, out.path())).unwrap();
    let err = coordinator.run().await.unwrap_err();

    assert!(matches!(
        err,
        CrawlError::SeedFetch {
            source: FetchError::Status { status: 503, .. },
            ..
        }
    ));
    assert!(coordinator.articles().is_empty());
}

#[tokio::test]
async fn test_seed_failure_writes_no_file() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/blog/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = run_crawl(create_test_config(&server, out.path())).await;

    assert!(matches!(result, Err(CrawlError::SeedFetch { .. })));
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unreachable_seed_is_fatal() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let out = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.crawler.seed_url = format!("http://127.0.0.1:{}/blog/", port);
    config.output.directory = out.path().display().to_string();

    let result = run_crawl(config).await;
    assert!(matches!(result, Err(CrawlError::SeedFetch { .. })));
}

#[tokio::test]
async fn test_run_crawl_writes_json_file() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["/blog/a/", "/blog/b/"]).await;
    mount_article(&server, "/blog/a/", "Alpha", &["One.", "Two."]).await;
    mount_article(&server, "/blog/b/", "Beta", &["Three."]).await;

    let report = run_crawl(create_test_config(&server, out.path()))
        .await
        .unwrap();

    let output_path = report.output_path.expect("output file written");
    assert_eq!(output_path.parent().unwrap(), out.path());

    let name = output_path.file_name().unwrap().to_str().unwrap();
    let pattern = regex::Regex::new(r"^articles_\d{8}_\d{6}\.json$").unwrap();
    assert!(pattern.is_match(name), "unexpected file name {}", name);

    let raw = std::fs::read_to_string(&output_path).unwrap();
    let saved: Vec<Article> = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved, report.articles);
    assert_eq!(saved.len(), 2);
}

#[tokio::test]
async fn test_empty_listing_writes_empty_array() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &[]).await;

    let report = run_crawl(create_test_config(&server, out.path()))
        .await
        .unwrap();

    assert!(report.articles.is_empty());
    let raw = std::fs::read_to_string(report.output_path.unwrap()).unwrap();
    assert_eq!(raw, "[]");
}

#[tokio::test]
async fn test_article_url_is_final_url_after_redirect() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["/blog/old/"]).await;
    Mock::given(method("GET"))
        .and(path("/blog/old/"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/blog/new/", server.uri()).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_article(&server, "/blog/new/", "Moved", &["Here now."]).await;

    let mut coordinator = Coordinator::new(create_test_config(&server, out.path())).unwrap();
    coordinator.run().await.unwrap();

    let articles = coordinator.articles();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].url, format!("{}/blog/new/", server.uri()));
}

#[tokio::test]
async fn test_relative_links_resolve_against_listing() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["post-1/", "#top"]).await;
    mount_article(&server, "/blog/post-1/", "Relative", &["Resolved."]).await;

    let mut coordinator = Coordinator::new(create_test_config(&server, out.path())).unwrap();
    coordinator.run().await.unwrap();

    assert_eq!(coordinator.articles().len(), 1);
    assert_eq!(
        coordinator.articles()[0].url,
        format!("{}/blog/post-1/", server.uri())
    );
}

#[tokio::test]
async fn test_non_html_article_yields_nothing() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["/blog/feed.json"]).await;
    Mock::given(method("GET"))
        .and(path("/blog/feed.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut coordinator = Coordinator::new(create_test_config(&server, out.path())).unwrap();
    coordinator.run().await.unwrap();

    assert!(coordinator.articles().is_empty());
    assert_eq!(coordinator.articles_failed(), 0);
}

#[tokio::test]
async fn test_article_page_links_are_not_followed() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_listing(&server, &["/blog/a/"]).await;
    Mock::given(method("GET"))
        .and(path("/blog/a/"))
        .respond_with(html(
            r#"<html><body><article><h1>A</h1><p>Text.</p>
               <a class="opacity-0 absolute inset-0" href="/blog/hidden/"></a>
               </article></body></html>"#
                .to_string(),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blog/hidden/"))
        .respond_with(html(article_page("Hidden", &["No."])))
        .expect(0)
        .mount(&server)
        .await;

    let mut coordinator = Coordinator::new(create_test_config(&server, out.path())).unwrap();
    coordinator.run().await.unwrap();

    assert_eq!(coordinator.articles().len(), 1);
    assert_eq!(coordinator.articles()[0].title, "A");

    server.verify().await;
}
