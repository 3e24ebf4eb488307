use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded regex pattern is valid"));

/// Collapses every run of whitespace into a single space and trims the ends
///
/// # Examples
///
/// ```
/// use blog_crawler::normalize;
///
/// assert_eq!(normalize("  a \t\n b  "), "a b");
/// ```
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
