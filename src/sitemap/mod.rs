//! Sitemap previewing
//!
//! Fetches the first declared sitemap and lists a handful of its page URLs.
//! `<loc>` entries are pulled out with a pattern match over the raw text
//! rather than an XML parser, so malformed sitemaps still yield URLs.

use crate::fetch::{fetch_text, FetchOutcome};
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Duration;

/// Maximum number of URLs kept in a preview
pub const SITEMAP_PREVIEW_LIMIT: usize = 5;

/// Outcome of previewing a site's sitemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SitemapPreview {
    /// robots.txt declared no sitemap
    NotApplicable,
    /// The sitemap could not be fetched (non-200 or network failure)
    FetchFailed(String),
    /// The sitemap was fetched but contained no `<loc>` entries
    NoUrlsFound,
    /// Up to five page URLs in document order
    Urls(Vec<String>),
}

impl SitemapPreview {
    /// Returns the previewed URLs, empty for every sentinel
    pub fn urls(&self) -> &[String] {
        match self {
            Self::Urls(urls) => urls,
            _ => &[],
        }
    }
}

fn loc_pattern() -> &'static Regex {
    static LOC: OnceLock<Regex> = OnceLock::new();
    // Static pattern, safe to panic
    LOC.get_or_init(|| Regex::new(r"<loc>(.*?)</loc>").expect("loc regex is valid"))
}

/// Extracts `<loc>` text contents in document order
///
/// Entries must open and close on the same line. Surrounding whitespace inside
/// the tag is trimmed.
///
/// # Examples
///
/// ```
/// use crawl_checker::sitemap::extract_locs;
///
/// let xml = "<urlset><url><loc>https://x.com/a</loc></url><url><loc>https://x.com/b</loc></url></urlset>";
/// assert_eq!(extract_locs(xml), vec!["https://x.com/a", "https://x.com/b"]);
/// ```
pub fn extract_locs(text: &str) -> Vec<String> {
    loc_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Previews the first sitemap in `sitemap_urls`
///
/// Only the first URL is fetched; the rest are ignored.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `sitemap_urls` - Sitemap URLs declared in robots.txt
/// * `timeout` - Upper bound for the sitemap request
pub async fn preview(client: &Client, sitemap_urls: &[String], timeout: Duration) -> SitemapPreview {
    let Some(first) = sitemap_urls.first() else {
        return SitemapPreview::NotApplicable;
    };

    match fetch_text(client, first, timeout).await {
        FetchOutcome::Success { body, .. } => {
            let mut urls = extract_locs(&body);
            if urls.is_empty() {
                tracing::debug!("Sitemap {} contained no <loc> entries", first);
                return SitemapPreview::NoUrlsFound;
            }
            urls.truncate(SITEMAP_PREVIEW_LIMIT);
            SitemapPreview::Urls(urls)
        }
        outcome => {
            let reason = outcome
                .failure_reason()
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::info!("Failed to preview sitemap {}: {}", first, reason);
            SitemapPreview::FetchFailed(reason)
        }
    }
}
