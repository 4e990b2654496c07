//! Batch dispatch
//!
//! This module fans site analyses out across a bounded number of concurrent
//! tasks and collects the results back into input order.

use crate::analysis::{Analyzer, FailureReason, SiteAnalysisResult};
use crate::CheckerError;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Results of one batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One result per analyzed URL, in input order
    pub results: Vec<SiteAnalysisResult>,

    /// Whether the run was interrupted before every URL was analyzed
    pub interrupted: bool,

    /// Number of input URLs never analyzed because of the interrupt
    pub skipped: usize,
}

/// Splits user input into URLs
///
/// Lines are whitespace-trimmed and blank lines discarded.
///
/// # Examples
///
/// ```
/// use crawl_checker::batch::parse_url_list;
///
/// let urls = parse_url_list("  https://a.com \n\n\thttps://b.com\n   \n");
/// assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
/// ```
pub fn parse_url_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Analyzes every URL with at most `concurrency` analyses in flight
///
/// Each analysis runs in its own task, so a panic inside one site's analysis
/// becomes a degraded result for that site only. Once `interrupted` is set, no
/// new analysis starts; running ones finish and are kept.
///
/// # Arguments
///
/// * `analyzer` - The analyzer shared by all tasks
/// * `urls` - Input URLs, in the order results should be reported
/// * `concurrency` - Maximum number of concurrent analyses (at least 1)
/// * `interrupted` - Cancellation flag, typically set by a Ctrl-C handler
pub async fn run_batch(
    analyzer: &Analyzer,
    urls: Vec<String>,
    concurrency: usize,
    interrupted: Arc<AtomicBool>,
) -> BatchReport {
    let total = urls.len();
    let start_time = Instant::now();
    let settings = analyzer.settings();
    tracing::info!(
        "Analyzing {} site(s) with concurrency {} as agent {:?} (robots timeout {:?}, sitemap timeout {:?})",
        total,
        concurrency.max(1),
        settings.user_agent,
        settings.robots_timeout,
        settings.sitemap_timeout
    );

    let tasks = urls.into_iter().enumerate().map(|(index, url)| {
        let analyzer = analyzer.clone();
        let interrupted = Arc::clone(&interrupted);
        async move {
            if interrupted.load(Ordering::SeqCst) {
                return None;
            }

            let request = analyzer.request_for(url.clone());
            let handle = tokio::spawn(async move { analyzer.analyze(request).await });
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    let error = CheckerError::Task(e.to_string());
                    tracing::error!("Analysis task for {} failed: {}", url, error);
                    SiteAnalysisResult::degraded(url, FailureReason::from_error(&error))
                }
            };
            Some((index, result))
        }
    });

    let mut completed: Vec<(usize, SiteAnalysisResult)> = Vec::with_capacity(total);
    let mut in_flight = stream::iter(tasks).buffer_unordered(concurrency.max(1));

    while let Some(outcome) = in_flight.next().await {
        let Some(entry) = outcome else {
            continue;
        };
        completed.push(entry);

        if completed.len() % 10 == 0 {
            tracing::info!(
                "Progress: {}/{} sites analyzed in {:?}",
                completed.len(),
                total,
                start_time.elapsed()
            );
        }
    }

    // Completion order is arbitrary; report in input order
    completed.sort_by_key(|(index, _)| *index);

    let skipped = total - completed.len();
    let interrupted = interrupted.load(Ordering::SeqCst) && skipped > 0;
    if interrupted {
        tracing::warn!("Batch interrupted: {} site(s) not analyzed", skipped);
    }

    tracing::info!(
        "Batch completed: {} site(s) in {:?}",
        completed.len(),
        start_time.elapsed()
    );

    BatchReport {
        results: completed.into_iter().map(|(_, result)| result).collect(),
        interrupted,
        skipped,
    }
}
