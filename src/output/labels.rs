//! Presentation labels for analysis results
//!
//! Turns a typed result into the flat, human-readable row shared by every
//! report format. Degraded results show "Unknown" instead of guessing.

use crate::analysis::{AccessStatus, SiteAnalysisResult};
use crate::classify::{BestMethod, SuggestedUse};
use crate::sitemap::SitemapPreview;

/// Column headers, in report order
pub const COLUMNS: [&str; 15] = [
    "Website",
    "Crawling Allowed",
    "Sitemap Found",
    "Known API",
    "Best Access Method",
    "All Crawling Methods Available",
    "Crawl Delay",
    "JS-Heavy Site",
    "RSS Feed Available",
    "Allowed Paths",
    "Disallowed Paths",
    "Advanced Crawling Suggestion",
    "Sitemap Preview",
    "Crawlability Score",
    "Suggested Use",
];

const UNKNOWN: &str = "Unknown";

/// One result rendered as labelled text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub website: String,
    pub crawling_allowed: String,
    pub sitemap_found: String,
    pub known_api: String,
    pub best_access_method: String,
    pub all_methods: String,
    pub crawl_delay: String,
    pub js_heavy: String,
    pub rss_available: String,
    pub allowed_paths: String,
    pub disallowed_paths: String,
    pub suggestion: String,
    pub sitemap_preview: String,
    pub score: u8,
    pub suggested_use: String,
}

impl ReportRow {
    pub fn from_result(result: &SiteAnalysisResult) -> Self {
        let suggestion = result.tool_recommendation.guidance().to_string();
        let suggested_use = suggested_use_label(result.suggested_use);

        let Some(policy) = result.policy.as_ref().filter(|_| result.fetch_succeeded) else {
            let reason = result
                .failure
                .as_ref()
                .map(|f| f.describe())
                .unwrap_or_else(|| "no policy".to_string());
            return Self {
                website: result.url.clone(),
                crawling_allowed: format!("⚠️ {} ({})", UNKNOWN, reason),
                sitemap_found: UNKNOWN.to_string(),
                known_api: UNKNOWN.to_string(),
                best_access_method: best_method_label(result.best_method).to_string(),
                all_methods: UNKNOWN.to_string(),
                crawl_delay: UNKNOWN.to_string(),
                js_heavy: UNKNOWN.to_string(),
                rss_available: UNKNOWN.to_string(),
                allowed_paths: UNKNOWN.to_string(),
                disallowed_paths: UNKNOWN.to_string(),
                suggestion,
                sitemap_preview: preview_label(&result.sitemap_preview),
                score: result.score,
                suggested_use,
            };
        };

        Self {
            website: result.url.clone(),
            crawling_allowed: access_label(result.access_status()).to_string(),
            sitemap_found: join_or(&policy.sitemap_urls, "No sitemap"),
            known_api: result
                .known_api_url
                .clone()
                .unwrap_or_else(|| "None".to_string()),
            best_access_method: best_method_label(result.best_method).to_string(),
            all_methods: if result.available_methods.is_empty() {
                "None".to_string()
            } else {
                result
                    .available_methods
                    .iter()
                    .map(|m| m.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
            crawl_delay: policy
                .crawl_delay_seconds
                .map(|delay| format!("{} sec", delay))
                .unwrap_or_else(|| "Not specified".to_string()),
            js_heavy: if result.js_heavy {
                "🧠 Likely JS-Rendered".to_string()
            } else {
                "✅ Mostly HTML".to_string()
            },
            rss_available: yes_no(result.rss_available).to_string(),
            allowed_paths: join_or(&policy.allow_rules, "None specified"),
            disallowed_paths: join_or(&policy.disallow_rules, "None specified"),
            suggestion,
            sitemap_preview: preview_label(&result.sitemap_preview),
            score: result.score,
            suggested_use,
        }
    }

    /// Field values in `COLUMNS` order
    pub fn values(&self) -> [String; 15] {
        [
            self.website.clone(),
            self.crawling_allowed.clone(),
            self.sitemap_found.clone(),
            self.known_api.clone(),
            self.best_access_method.clone(),
            self.all_methods.clone(),
            self.crawl_delay.clone(),
            self.js_heavy.clone(),
            self.rss_available.clone(),
            self.allowed_paths.clone(),
            self.disallowed_paths.clone(),
            self.suggestion.clone(),
            self.sitemap_preview.clone(),
            self.score.to_string(),
            self.suggested_use.clone(),
        ]
    }
}

pub fn best_method_label(method: BestMethod) -> &'static str {
    match method {
        BestMethod::Sitemap => "📦 Sitemap (Recommended)",
        BestMethod::NormalCrawl => "✅ Normal Crawling",
        BestMethod::NoAccess => "❌ No Access",
    }
}

pub fn access_label(status: AccessStatus) -> &'static str {
    match status {
        AccessStatus::Allowed => "✅ Yes",
        AccessStatus::Blocked => "❌ No",
        AccessStatus::Unknown => "⚠️ Unknown",
    }
}

pub fn suggested_use_label(category: SuggestedUse) -> String {
    let icon = match category {
        SuggestedUse::RecipeExtraction => "🍲",
        SuggestedUse::NewsAggregator => "📰",
        SuggestedUse::JobCrawler => "💼",
        SuggestedUse::BookRecommender => "📚",
        SuggestedUse::TravelMonitor => "🌍",
        SuggestedUse::ApiDashboard => "📡",
        SuggestedUse::SitemapIndexer => "🔍",
        SuggestedUse::ExperimentalHeadless => "🧪",
        SuggestedUse::NotRecommended => "🔴",
    };
    format!("{} {}", icon, category.label())
}

pub fn preview_label(preview: &SitemapPreview) -> String {
    match preview {
        SitemapPreview::NotApplicable => "N/A".to_string(),
        SitemapPreview::FetchFailed(_) => "Failed to preview".to_string(),
        SitemapPreview::NoUrlsFound => "No URLs Found".to_string(),
        SitemapPreview::Urls(urls) => urls.join("\n"),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "✅ Yes"
    } else {
        "❌ No"
    }
}

fn join_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}
