//! Request and result records for a single site analysis

use crate::classify::{AccessMethod, BestMethod, Classification, SuggestedUse, ToolRecommendation};
use crate::robots::{ResolvedRobots, RobotsPolicy};
use crate::sitemap::SitemapPreview;
use crate::CheckerError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

/// Default timeout for the robots.txt request
pub const DEFAULT_ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// One site to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteAnalysisRequest {
    /// The site URL as supplied by the user
    pub url: String,

    /// Agent tested against robots.txt groups
    pub user_agent: String,

    /// Timeout for the robots.txt request
    pub timeout: Duration,
}

impl SiteAnalysisRequest {
    /// Creates a request for the wildcard agent with the default timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: "*".to_string(),
            timeout: DEFAULT_ROBOTS_TIMEOUT,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Why a site could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    /// The input was not a usable http(s) URL
    MalformedUrl(String),
    /// robots.txt answered something other than HTTP 200
    PolicyUnavailable(u16),
    /// robots.txt could not be reached (network failure or timeout)
    Unreachable(String),
    /// Any other failure inside the pipeline
    Internal(String),
}

impl FailureReason {
    pub fn from_error(error: &CheckerError) -> Self {
        match error {
            CheckerError::Url(e) => Self::MalformedUrl(e.to_string()),
            CheckerError::PolicyUnavailable { status, .. } => Self::PolicyUnavailable(*status),
            CheckerError::PolicyFetch { message, .. } => Self::Unreachable(message.clone()),
            other => Self::Internal(other.to_string()),
        }
    }

    /// Short human-readable description, e.g. `HTTP 404` or `Error: ...`
    pub fn describe(&self) -> String {
        match self {
            Self::PolicyUnavailable(status) => format!("HTTP {}", status),
            Self::MalformedUrl(message) | Self::Unreachable(message) | Self::Internal(message) => {
                format!("Error: {}", message)
            }
        }
    }
}

/// Whether crawling is confirmed allowed, confirmed blocked, or unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    Allowed,
    Blocked,
    Unknown,
}

/// The output record for one site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteAnalysisResult {
    pub url: String,
    pub fetch_succeeded: bool,
    pub http_status: Option<u16>,
    /// False whenever `fetch_succeeded` is false
    pub crawl_allowed: bool,
    pub policy: Option<RobotsPolicy>,
    pub known_api_url: Option<String>,
    pub js_heavy: bool,
    pub rss_available: bool,
    pub available_methods: BTreeSet<AccessMethod>,
    pub best_method: BestMethod,
    pub tool_recommendation: ToolRecommendation,
    pub sitemap_preview: SitemapPreview,
    pub score: u8,
    pub suggested_use: SuggestedUse,
    /// Set only on degraded results
    pub failure: Option<FailureReason>,
}

impl SiteAnalysisResult {
    /// Assembles a full result from the pipeline stages
    pub fn from_parts(
        url: impl Into<String>,
        robots: ResolvedRobots,
        classification: Classification,
        sitemap_preview: SitemapPreview,
    ) -> Self {
        Self {
            url: url.into(),
            fetch_succeeded: true,
            http_status: Some(robots.http_status),
            crawl_allowed: robots.crawl_allowed,
            policy: Some(robots.policy),
            known_api_url: classification.known_api_url,
            js_heavy: classification.js_heavy,
            rss_available: classification.rss_available,
            available_methods: classification.available_methods,
            best_method: classification.best_method,
            tool_recommendation: classification.tool_recommendation,
            sitemap_preview,
            score: classification.score,
            suggested_use: classification.suggested_use,
            failure: None,
        }
    }

    /// Builds the "unreachable" record used for every failure
    ///
    /// Nothing about the site is known: score is 0, there is no access
    /// method, and optional fields are empty.
    pub fn degraded(url: impl Into<String>, reason: FailureReason) -> Self {
        let http_status = match &reason {
            FailureReason::PolicyUnavailable(status) => Some(*status),
            _ => None,
        };

        Self {
            url: url.into(),
            fetch_succeeded: false,
            http_status,
            crawl_allowed: false,
            policy: None,
            known_api_url: None,
            js_heavy: false,
            rss_available: false,
            available_methods: BTreeSet::new(),
            best_method: BestMethod::NoAccess,
            tool_recommendation: ToolRecommendation::HeadlessFallback,
            sitemap_preview: SitemapPreview::NotApplicable,
            score: 0,
            suggested_use: SuggestedUse::NotRecommended,
            failure: Some(reason),
        }
    }

    /// Distinguishes a confirmed disallow from a policy that could not be read
    pub fn access_status(&self) -> AccessStatus {
        match (self.fetch_succeeded, self.crawl_allowed) {
            (false, _) => AccessStatus::Unknown,
            (true, true) => AccessStatus::Allowed,
            (true, false) => AccessStatus::Blocked,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.fetch_succeeded
    }
}
