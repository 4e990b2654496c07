//! Integration tests for site analysis
//!
//! These tests use wiremock to serve robots.txt and sitemaps and run the
//! full per-site pipeline and batch dispatch end-to-end.

use crawl_checker::analysis::FailureReason;
use crawl_checker::batch::run_batch;
use crawl_checker::classify::{AccessMethod, BestMethod, SuggestedUse, ToolRecommendation};
use crawl_checker::config::{Config, UserAgentConfig};
use crawl_checker::output::{format_csv, BatchStatistics};
use crawl_checker::sitemap::SitemapPreview;
use crawl_checker::Analyzer;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_analyzer() -> Analyzer {
    let mut config = Config::default();
    config.user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: None,
        contact_email: None,
    };
    config.checker.robots_timeout_secs = 2;
    config.checker.sitemap_timeout_secs = 2;
    Analyzer::from_config(&config).expect("Failed to build analyzer")
}

fn sitemap_body(count: usize, base: &str) -> String {
    let mut body = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><urlset>"#);
    for i in 0..count {
        body.push_str(&format!("<url><loc>{}/page{}</loc></url>", base, i));
    }
    body.push_str("</urlset>");
    body
}

async fn mount_robots(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_analysis_with_sitemap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let robots = format!(
        "User-agent: *\nDisallow: /admin\nAllow: /admin/public\nCrawl-delay: 3\nSitemap: {}/sitemap.xml",
        base_url
    );
    mount_robots(&mock_server, 200, &robots).await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_body(7, &base_url)))
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(base_url.clone())).await;

    assert!(result.fetch_succeeded);
    assert_eq!(result.http_status, Some(200));
    assert!(result.crawl_allowed);
    assert!(result.failure.is_none());

    let policy = result.policy.as_ref().expect("policy should be present");
    assert_eq!(policy.disallow_rules, vec!["/admin"]);
    assert_eq!(policy.allow_rules, vec!["/admin/public"]);
    assert_eq!(policy.crawl_delay_seconds, Some(3.0));
    assert_eq!(policy.sitemap_urls, vec![format!("{}/sitemap.xml", base_url)]);

    assert_eq!(result.best_method, BestMethod::Sitemap);
    assert!(result.available_methods.contains(&AccessMethod::NormalCrawl));
    assert!(result.available_methods.contains(&AccessMethod::Sitemap));
    assert_eq!(result.tool_recommendation, ToolRecommendation::StaticHtml);
    assert_eq!(result.score, 70);
    assert_eq!(result.suggested_use, SuggestedUse::SitemapIndexer);

    let preview = result.sitemap_preview.urls();
    assert_eq!(preview.len(), 5);
    assert_eq!(preview[0], format!("{}/page0", base_url));
    assert_eq!(preview[4], format!("{}/page4", base_url));
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header("user-agent", "TestBot/1.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(mock_server.uri())).await;
    assert!(result.fetch_succeeded);
}

#[tokio::test]
async fn test_missing_robots_is_degraded() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, 404, "Not Found").await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(mock_server.uri())).await;

    assert!(result.is_degraded());
    assert!(!result.crawl_allowed);
    assert_eq!(result.http_status, Some(404));
    assert_eq!(result.failure, Some(FailureReason::PolicyUnavailable(404)));
    assert_eq!(result.best_method, BestMethod::NoAccess);
    assert_eq!(result.score, 0);
    assert_eq!(result.sitemap_preview, SitemapPreview::NotApplicable);
    assert_eq!(result.suggested_use, SuggestedUse::NotRecommended);
}

#[tokio::test]
async fn test_blocked_site_with_sitemap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let robots = format!("User-agent: *\nDisallow: /\nSitemap: {}/sitemap.xml", base_url);
    mount_robots(&mock_server, 200, &robots).await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_body(2, &base_url)))
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(base_url.clone())).await;

    assert!(result.fetch_succeeded);
    assert!(!result.crawl_allowed);
    assert_eq!(result.best_method, BestMethod::Sitemap);
    assert!(!result.available_methods.contains(&AccessMethod::NormalCrawl));
    assert!(result.available_methods.contains(&AccessMethod::Sitemap));
    assert_eq!(result.tool_recommendation, ToolRecommendation::Blocked);
    assert_eq!(result.score, 40);
    assert_eq!(result.sitemap_preview.urls().len(), 2);
}

#[tokio::test]
async fn test_sitemap_failure_keeps_score() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let robots = format!("User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml", base_url);
    mount_robots(&mock_server, 200, &robots).await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(base_url)).await;

    assert!(result.fetch_succeeded);
    assert!(matches!(result.sitemap_preview, SitemapPreview::FetchFailed(_)));
    assert_eq!(result.best_method, BestMethod::Sitemap);
    assert_eq!(result.score, 70);
}

#[tokio::test]
async fn test_sitemap_without_locs() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let robots = format!("User-agent: *\nSitemap: {}/sitemap.xml", base_url);
    mount_robots(&mock_server, 200, &robots).await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset></urlset>"))
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(base_url)).await;

    assert_eq!(result.sitemap_preview, SitemapPreview::NoUrlsFound);
}

#[tokio::test]
async fn test_feed_and_script_markers() {
    let mock_server = MockServer::start().await;

    // Comments are ignored by the parser but still count as body text
    mount_robots(
        &mock_server,
        200,
        "# RSS feed at /feed.xml\n# built with React\nUser-agent: *\nAllow: /",
    )
    .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(mock_server.uri())).await;

    assert!(result.rss_available);
    assert!(result.js_heavy);
    assert!(result.available_methods.contains(&AccessMethod::Rss));
    assert_eq!(result.tool_recommendation, ToolRecommendation::HeadlessBrowser);
    // 30 allowed + 15 feed
    assert_eq!(result.score, 45);
    assert_eq!(result.sitemap_preview, SitemapPreview::NotApplicable);
}

#[tokio::test]
async fn test_robots_timeout_is_degraded() {
    let mock_server = MockServer::start().await;

    // Configured robots timeout is 2s
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nAllow: /")
                .set_delay(Duration::from_secs(4)),
        )
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let start = Instant::now();
    let result = analyzer.analyze(analyzer.request_for(mock_server.uri())).await;

    assert!(start.elapsed() < Duration::from_secs(4));
    assert!(result.is_degraded());
    assert_eq!(result.http_status, None);
    assert_eq!(
        result.failure,
        Some(FailureReason::Unreachable("Request timeout".to_string()))
    );
    assert_eq!(result.best_method, BestMethod::NoAccess);
    assert_eq!(result.score, 0);
}

#[tokio::test]
async fn test_sitemap_timeout_keeps_score() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let robots = format!("User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml", base_url);
    mount_robots(&mock_server, 200, &robots).await;

    // Configured sitemap timeout is 2s
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_body(3, &base_url))
                .set_delay(Duration::from_secs(4)),
        )
        .mount(&mock_server)
        .await;

    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for(base_url)).await;

    assert!(result.fetch_succeeded);
    assert_eq!(
        result.sitemap_preview,
        SitemapPreview::FetchFailed("Request timeout".to_string())
    );
    assert_eq!(result.best_method, BestMethod::Sitemap);
    assert_eq!(result.score, 70);
}

#[tokio::test]
async fn test_unreachable_host() {
    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for("http://127.0.0.1:9")).await;

    assert!(result.is_degraded());
    assert_eq!(result.http_status, None);
    assert!(matches!(result.failure, Some(FailureReason::Unreachable(_))));
    assert_eq!(result.score, 0);
}

#[tokio::test]
async fn test_malformed_url() {
    let analyzer = test_analyzer();
    let result = analyzer.analyze(analyzer.request_for("ftp://example.com")).await;

    assert!(result.is_degraded());
    assert!(matches!(result.failure, Some(FailureReason::MalformedUrl(_))));
}

#[tokio::test]
async fn test_batch_mixed_inputs() {
    let good = MockServer::start().await;
    mount_robots(&good, 200, "User-agent: *\nAllow: /").await;

    let missing = MockServer::start().await;
    mount_robots(&missing, 404, "").await;

    let urls = vec![
        missing.uri(),
        "not a url".to_string(),
        good.uri(),
        good.uri(),
    ];

    let analyzer = test_analyzer();
    let report = run_batch(&analyzer, urls.clone(), 3, Arc::new(AtomicBool::new(false))).await;

    assert!(!report.interrupted);
    assert_eq!(report.results.len(), 4);
    let reported: Vec<&str> = report.results.iter().map(|r| r.url.as_str()).collect();
    let expected: Vec<&str> = urls.iter().map(String::as_str).collect();
    assert_eq!(reported, expected);

    assert_eq!(report.results[0].failure, Some(FailureReason::PolicyUnavailable(404)));
    assert!(matches!(
        report.results[1].failure,
        Some(FailureReason::MalformedUrl(_))
    ));
    assert!(report.results[2].crawl_allowed);
    assert!(report.results[3].crawl_allowed);

    let stats = BatchStatistics::from_report(&report);
    assert_eq!(stats.reachable, 2);
    assert_eq!(stats.unreachable, 2);

    let csv = format_csv(&report).expect("Failed to render CSV");
    assert_eq!(csv.matches("\r\n").count(), 5);
}
