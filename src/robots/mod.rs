//! Robots.txt handling module
//!
//! This module fetches and parses robots.txt files and answers permission
//! queries against the parsed policy.

mod parser;

pub use parser::RobotsPolicy;

use crate::analysis::SiteAnalysisRequest;
use crate::fetch::{fetch_text, FetchOutcome};
use crate::url::{parse_site_url, robots_url_for};
use crate::CheckerError;
use reqwest::Client;

/// A successfully fetched and parsed robots.txt
#[derive(Debug, Clone)]
pub struct ResolvedRobots {
    /// Where the policy was fetched from
    pub robots_url: String,

    /// HTTP status of the robots.txt response
    pub http_status: u16,

    /// The parsed policy
    pub policy: RobotsPolicy,

    /// Whether the requested URL may be fetched by the requested agent
    pub crawl_allowed: bool,
}

/// Fetches robots.txt for a site and evaluates the request URL against it
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `request` - The site URL, agent, and timeout
///
/// # Returns
///
/// * `Ok(ResolvedRobots)` - robots.txt answered HTTP 200 and was parsed
/// * `Err(CheckerError::Url)` - The site URL has no parseable scheme or host
/// * `Err(CheckerError::PolicyUnavailable)` - robots.txt answered a non-200 status;
///   the policy is unknown, which is not the same as disallowed
/// * `Err(CheckerError::PolicyFetch)` - Network failure or timeout
pub async fn resolve(
    client: &Client,
    request: &SiteAnalysisRequest,
) -> Result<ResolvedRobots, CheckerError> {
    let site = parse_site_url(&request.url)?;
    let robots_url = robots_url_for(&site)?.to_string();

    tracing::debug!("Fetching robots.txt from: {}", robots_url);

    match fetch_text(client, &robots_url, request.timeout).await {
        FetchOutcome::Success { final_url, body } => {
            if final_url != robots_url {
                tracing::debug!("robots.txt for {} redirected to {}", site, final_url);
            }
            let policy = RobotsPolicy::parse(&body, &request.user_agent);
            let crawl_allowed = policy.is_allowed(site.as_str(), &request.user_agent);

            tracing::debug!(
                "robots.txt for {}: {} allow, {} disallow, {} sitemap(s), allowed={}",
                site,
                policy.allow_rules.len(),
                policy.disallow_rules.len(),
                policy.sitemap_urls.len(),
                crawl_allowed
            );

            Ok(ResolvedRobots {
                robots_url,
                http_status: 200,
                policy,
                crawl_allowed,
            })
        }
        FetchOutcome::HttpError { status_code } => {
            tracing::info!("robots.txt at {} returned HTTP {}", robots_url, status_code);
            Err(CheckerError::PolicyUnavailable {
                url: robots_url,
                status: status_code,
            })
        }
        FetchOutcome::NetworkError { error, timed_out } => {
            if timed_out {
                tracing::info!(
                    "robots.txt at {} timed out after {:?}",
                    robots_url,
                    request.timeout
                );
            } else {
                tracing::info!("robots.txt at {} unreachable: {}", robots_url, error);
            }
            Err(CheckerError::PolicyFetch {
                url: robots_url,
                message: error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserAgentConfig;
    use crate::fetch::build_http_client;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolve_from_site_root() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /blog"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = build_http_client(&UserAgentConfig::default()).unwrap();
        let request = SiteAnalysisRequest::new(format!("{}/blog/post?id=1", mock_server.uri()));
        let resolved = resolve(&client, &request).await.unwrap();

        assert_eq!(resolved.robots_url, format!("{}/robots.txt", mock_server.uri()));
        assert_eq!(resolved.http_status, 200);
        assert_eq!(resolved.policy.disallow_rules, vec!["/blog"]);
        assert!(!resolved.crawl_allowed);
    }

    #[tokio::test]
    async fn test_resolve_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let client = build_http_client(&UserAgentConfig::default()).unwrap();
        let request = SiteAnalysisRequest::new(mock_server.uri()).with_timeout(Duration::from_secs(1));
        let err = resolve(&client, &request).await.unwrap_err();

        assert!(matches!(
            err,
            CheckerError::PolicyFetch { ref message, .. } if message == "Request timeout"
        ));
    }
}
