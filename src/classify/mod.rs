//! Site classification and scoring
//!
//! Turns a parsed robots policy plus the raw body into the derived fields of
//! an analysis result. Everything here is pure: no I/O, no shared mutable state.

mod category;
mod heuristics;
mod known_api;
mod scoring;

pub use category::{suggest_use, SuggestedUse};
pub use heuristics::{detect_feed, detect_script_rendering};
pub use known_api::known_api_for;
pub use scoring::{
    available_methods, best_method, crawlability_score, recommend_tool, AccessMethod, BestMethod,
    SiteSignals, ToolRecommendation,
};

use crate::robots::RobotsPolicy;
use crate::url::{extract_domain, parse_site_url};
use std::collections::BTreeSet;

/// Everything derived from a site's robots policy
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub known_api_url: Option<String>,
    pub rss_available: bool,
    pub js_heavy: bool,
    pub available_methods: BTreeSet<AccessMethod>,
    pub best_method: BestMethod,
    pub tool_recommendation: ToolRecommendation,
    pub score: u8,
    pub suggested_use: SuggestedUse,
}

/// Classifies a site from its robots.txt
///
/// # Arguments
///
/// * `url` - The site URL as supplied by the user
/// * `policy_body` - The raw robots.txt body
/// * `policy` - The parsed policy
/// * `crawl_allowed` - Whether robots.txt allows fetching `url`
pub fn classify(
    url: &str,
    policy_body: &str,
    policy: &RobotsPolicy,
    crawl_allowed: bool,
) -> Classification {
    let known_api_url = parse_site_url(url)
        .ok()
        .and_then(|site| extract_domain(&site))
        .and_then(|domain| known_api_for(&domain))
        .map(str::to_string);

    let signals = SiteSignals {
        crawl_allowed,
        has_sitemap: policy.has_sitemap(),
        rss_available: detect_feed(policy_body),
        has_known_api: known_api_url.is_some(),
        js_heavy: detect_script_rendering(policy_body),
    };

    Classification {
        known_api_url,
        rss_available: signals.rss_available,
        js_heavy: signals.js_heavy,
        available_methods: available_methods(&signals),
        best_method: best_method(&signals),
        tool_recommendation: recommend_tool(&signals),
        score: crawlability_score(&signals),
        suggested_use: suggest_use(url, signals.has_known_api, signals.has_sitemap),
    }
}
