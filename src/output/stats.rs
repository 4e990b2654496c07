//! Batch statistics
//!
//! Aggregates a finished batch into counts and an average score, and prints
//! them for the operator.

use crate::analysis::AccessStatus;
use crate::batch::BatchReport;
use crate::classify::BestMethod;
use crate::output::labels::best_method_label;
use std::collections::BTreeMap;

/// Summary counts for one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    /// Number of sites analyzed
    pub total_sites: usize,

    /// Sites whose robots.txt was fetched
    pub reachable: usize,

    /// Sites that produced a degraded result
    pub unreachable: usize,

    /// Reachable sites whose root URL may be crawled
    pub crawl_allowed: usize,

    /// Reachable sites whose root URL is disallowed
    pub crawl_blocked: usize,

    /// Count of sites by best access method
    pub by_best_method: BTreeMap<BestMethod, usize>,

    /// Mean crawlability score over every analyzed site
    pub average_score: f64,

    /// Input URLs never analyzed because the run was interrupted
    pub skipped: usize,
}

impl BatchStatistics {
    pub fn from_report(report: &BatchReport) -> Self {
        let mut stats = Self {
            total_sites: report.results.len(),
            reachable: 0,
            unreachable: 0,
            crawl_allowed: 0,
            crawl_blocked: 0,
            by_best_method: BTreeMap::new(),
            average_score: 0.0,
            skipped: report.skipped,
        };

        let mut score_sum: u64 = 0;
        for result in &report.results {
            match result.access_status() {
                AccessStatus::Allowed => {
                    stats.reachable += 1;
                    stats.crawl_allowed += 1;
                }
                AccessStatus::Blocked => {
                    stats.reachable += 1;
                    stats.crawl_blocked += 1;
                }
                AccessStatus::Unknown => stats.unreachable += 1,
            }
            *stats.by_best_method.entry(result.best_method).or_insert(0) += 1;
            score_sum += u64::from(result.score);
        }

        if stats.total_sites > 0 {
            stats.average_score = score_sum as f64 / stats.total_sites as f64;
        }

        stats
    }

    fn percentage(&self, count: usize) -> f64 {
        if self.total_sites > 0 {
            (count as f64 / self.total_sites as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Formats statistics as plain text
pub fn format_statistics(stats: &BatchStatistics) -> String {
    let mut out = String::new();
    out.push_str("=== Crawlability Statistics ===\n\n");

    out.push_str("Overview:\n");
    out.push_str(&format!("  Sites analyzed: {}\n", stats.total_sites));
    out.push_str(&format!(
        "  Reachable: {} ({:.1}%)\n",
        stats.reachable,
        stats.percentage(stats.reachable)
    ));
    out.push_str(&format!(
        "  Unreachable: {} ({:.1}%)\n",
        stats.unreachable,
        stats.percentage(stats.unreachable)
    ));
    out.push_str(&format!("  Crawling allowed: {}\n", stats.crawl_allowed));
    out.push_str(&format!("  Crawling blocked: {}\n", stats.crawl_blocked));
    out.push_str(&format!("  Average score: {:.1}\n", stats.average_score));
    if stats.skipped > 0 {
        out.push_str(&format!("  Skipped (interrupted): {}\n", stats.skipped));
    }
    out.push('\n');

    out.push_str("Best Access Method:\n");
    if stats.by_best_method.is_empty() {
        out.push_str("  (none)\n");
    }
    // Sort by count (descending)
    let mut method_counts: Vec<_> = stats.by_best_method.iter().collect();
    method_counts.sort_by(|a, b| b.1.cmp(a.1));
    for (method, count) in method_counts {
        out.push_str(&format!(
            "  {}: {} ({:.1}%)\n",
            best_method_label(*method),
            count,
            stats.percentage(*count)
        ));
    }

    out
}

/// Prints statistics to stderr, keeping stdout for the report
pub fn print_statistics(stats: &BatchStatistics) {
    eprint!("{}", format_statistics(stats));
}
