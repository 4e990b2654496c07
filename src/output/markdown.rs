//! Markdown report generation
//!
//! This module renders a batch as a human-readable markdown document: a
//! summary table followed by one section per site with every labelled field.

use crate::batch::BatchReport;
use crate::output::labels::{ReportRow, COLUMNS};
use crate::output::traits::{OutputResult, ReportRenderer};
use chrono::Utc;

/// Renders reports as markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &BatchReport) -> OutputResult<String> {
        Ok(format_markdown_report(report))
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

/// Formats a batch report as markdown
///
/// # Arguments
///
/// * `report` - The finished batch
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(report: &BatchReport) -> String {
    let rows: Vec<ReportRow> = report.results.iter().map(ReportRow::from_result).collect();
    let mut md = String::new();

    // Title
    md.push_str("# Crawlability Report\n\n");
    md.push_str(&format!(
        "- **Generated**: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("- **Sites Analyzed**: {}\n", rows.len()));
    if report.interrupted {
        md.push_str(&format!(
            "- **Interrupted**: {} site(s) were not analyzed\n",
            report.skipped
        ));
    }
    md.push('\n');

    if rows.is_empty() {
        md.push_str("No sites were analyzed.\n");
        return md;
    }

    // Summary table
    md.push_str("## Summary\n\n");
    md.push_str("| Website | Crawling Allowed | Best Access Method | Score | Suggested Use |\n");
    md.push_str("|---------|------------------|--------------------|-------|---------------|\n");
    for row in &rows {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            escape_cell(&row.website),
            escape_cell(&row.crawling_allowed),
            escape_cell(&row.best_access_method),
            row.score,
            escape_cell(&row.suggested_use)
        ));
    }
    md.push('\n');

    // Per-site details
    for row in &rows {
        md.push_str(&format!("## {}\n\n", row.website));
        for (column, value) in COLUMNS.iter().zip(row.values()).skip(1) {
            if value.contains('\n') {
                md.push_str(&format!("- **{}**:\n", column));
                for line in value.lines() {
                    md.push_str(&format!("  - {}\n", line));
                }
            } else {
                md.push_str(&format!("- **{}**: {}\n", column, value));
            }
        }
        md.push('\n');
    }

    md
}

/// Makes a value safe inside a table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', "<br>")
}
