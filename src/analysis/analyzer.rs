//! Per-site analysis pipeline
//!
//! robots.txt is resolved first; on success the classifier and the sitemap
//! previewer run against it. Any failure becomes a degraded result, so one
//! bad site never aborts a batch.

use crate::analysis::result::{FailureReason, SiteAnalysisRequest, SiteAnalysisResult};
use crate::classify::classify;
use crate::config::{CheckerConfig, Config};
use crate::fetch::build_http_client;
use crate::robots::resolve;
use crate::sitemap::preview;
use crate::CheckerError;
use reqwest::Client;
use std::time::Duration;

/// Settings shared by every analysis in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerSettings {
    /// Agent tested against robots.txt groups
    pub user_agent: String,
    /// Timeout for the robots.txt request
    pub robots_timeout: Duration,
    /// Timeout for the sitemap preview request
    pub sitemap_timeout: Duration,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self::from(&CheckerConfig::default())
    }
}

impl From<&CheckerConfig> for AnalyzerSettings {
    fn from(config: &CheckerConfig) -> Self {
        Self {
            user_agent: config.robots_user_agent.clone(),
            robots_timeout: Duration::from_secs(config.robots_timeout_secs),
            sitemap_timeout: Duration::from_secs(config.sitemap_timeout_secs),
        }
    }
}

/// Runs the analysis pipeline for individual sites
///
/// Cloning is cheap; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Client,
    settings: AnalyzerSettings,
}

impl Analyzer {
    pub fn new(client: Client, settings: AnalyzerSettings) -> Self {
        Self { client, settings }
    }

    /// Builds an analyzer with its own HTTP client from configuration
    pub fn from_config(config: &Config) -> Result<Self, CheckerError> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::new(client, AnalyzerSettings::from(&config.checker)))
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Creates a request for `url` using this analyzer's agent and timeout
    pub fn request_for(&self, url: impl Into<String>) -> SiteAnalysisRequest {
        SiteAnalysisRequest::new(url)
            .with_user_agent(self.settings.user_agent.clone())
            .with_timeout(self.settings.robots_timeout)
    }

    /// Analyzes one site
    ///
    /// Never fails: errors are folded into a degraded result carrying the reason.
    pub async fn analyze(&self, request: SiteAnalysisRequest) -> SiteAnalysisResult {
        match self.try_analyze(&request).await {
            Ok(result) => {
                tracing::info!(
                    "Analyzed {}: best method {:?}, score {}",
                    request.url,
                    result.best_method,
                    result.score
                );
                result
            }
            Err(e) => {
                tracing::warn!("Analysis of {} degraded: {}", request.url, e);
                SiteAnalysisResult::degraded(request.url, FailureReason::from_error(&e))
            }
        }
    }

    async fn try_analyze(
        &self,
        request: &SiteAnalysisRequest,
    ) -> Result<SiteAnalysisResult, CheckerError> {
        let robots = resolve(&self.client, request).await?;
        tracing::debug!(
            "{}: policy from {} (HTTP {})",
            request.url,
            robots.robots_url,
            robots.http_status
        );

        let classification = classify(
            &request.url,
            &robots.policy.raw_text,
            &robots.policy,
            robots.crawl_allowed,
        );

        // A failed preview only empties the preview; score and best method stand
        let sitemap_preview = preview(
            &self.client,
            &robots.policy.sitemap_urls,
            self.settings.sitemap_timeout,
        )
        .await;

        Ok(SiteAnalysisResult::from_parts(
            request.url.clone(),
            robots,
            classification,
            sitemap_preview,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BestMethod;

    #[test]
    fn test_settings_from_config() {
        let config = CheckerConfig {
            concurrency: 3,
            robots_timeout_secs: 2,
            sitemap_timeout_secs: 7,
            robots_user_agent: "TestBot".to_string(),
        };
        let settings = AnalyzerSettings::from(&config);
        assert_eq!(settings.user_agent, "TestBot");
        assert_eq!(settings.robots_timeout, Duration::from_secs(2));
        assert_eq!(settings.sitemap_timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_default_settings() {
        let settings = AnalyzerSettings::default();
        assert_eq!(settings.user_agent, "*");
        assert_eq!(settings.robots_timeout, Duration::from_secs(5));
        assert_eq!(settings.sitemap_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_request_for_uses_settings() {
        let analyzer = Analyzer::from_config(&Config::default()).unwrap();
        assert_eq!(analyzer.settings(), &AnalyzerSettings::default());
        let request = analyzer.request_for("https://example.com");
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.user_agent, "*");
        assert_eq!(request.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_malformed_url_degrades() {
        let analyzer = Analyzer::from_config(&Config::default()).unwrap();
        let result = analyzer.analyze(analyzer.request_for("not a url")).await;

        assert!(result.is_degraded());
        assert_eq!(result.score, 0);
        assert_eq!(result.best_method, BestMethod::NoAccess);
        assert!(matches!(
            result.failure,
            Some(FailureReason::MalformedUrl(_))
        ));
    }
}
