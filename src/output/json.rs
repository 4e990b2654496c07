//! JSON export of the typed results

use crate::analysis::SiteAnalysisResult;
use crate::batch::BatchReport;
use crate::output::traits::{OutputResult, ReportRenderer};
use chrono::Utc;
use serde::Serialize;

/// Renders reports as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    interrupted: bool,
    skipped: usize,
    results: &'a [SiteAnalysisResult],
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &BatchReport) -> OutputResult<String> {
        let document = JsonReport {
            generated_at: Utc::now().to_rfc3339(),
            interrupted: report.interrupted,
            skipped: report.skipped,
            results: &report.results,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
