//! blog-crawler main entry point
//!
//! This is the command-line interface for the blog crawler.

use anyhow::Context;
use blog_crawler::config::{load_config_with_hash, Config};
use blog_crawler::crawler::run_crawl;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// blog-crawler: scrape every article linked from a blog listing page
///
/// Fetches the listing page, follows each article link once, extracts the
/// title and body text, and writes everything to articles_<timestamp>.json.
#[derive(Parser, Debug)]
#[command(name = "blog-crawler")]
#[command(version)]
#[command(about = "Scrape a blog's articles into a JSON file", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults target the fly.io blog)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Directory to write the JSON file to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir.display().to_string();
    }

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("blog_crawler=info,warn"),
            1 => EnvFilter::new("blog_crawler=debug,info"),
            2 => EnvFilter::new("blog_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    blog_crawler::config::validate(config).context("invalid configuration")?;

    println!("=== blog-crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Link selector: {}", config.crawler.link_selector);
    println!("  Article selector: {}", config.crawler.article_selector);
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting crawl at {}", config.crawler.seed_url);

    let report = run_crawl(config).await.context("crawl failed")?;

    match &report.output_path {
        Some(path) => println!(
            "\nScraped {} articles and saved to JSON file {}",
            report.articles.len(),
            path.display()
        ),
        None => println!(
            "\nScraped {} articles (JSON file could not be written)",
            report.articles.len()
        ),
    }

    if report.articles_failed > 0 {
        tracing::warn!(
            "{} of {} article links failed",
            report.articles_failed,
            report.links_discovered
        );
    }

    Ok(())
}
