//! Output module for rendering batch results
//!
//! This module handles:
//! - Labelling typed results for presentation
//! - Rendering reports as markdown, CSV, or JSON
//! - Summarizing a batch as statistics

mod csv_export;
mod json;
mod labels;
mod markdown;
pub mod stats;
mod traits;

pub use csv_export::{format_csv, CsvRenderer};
pub use json::JsonRenderer;
pub use labels::{best_method_label, preview_label, suggested_use_label, ReportRow, COLUMNS};
pub use markdown::{format_markdown_report, MarkdownRenderer};
pub use stats::{format_statistics, print_statistics, BatchStatistics};
pub use traits::{OutputError, OutputResult, ReportRenderer};

use crate::batch::BatchReport;
use crate::config::ReportFormat;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Returns the renderer for a format
pub fn renderer_for(format: ReportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownRenderer),
        ReportFormat::Csv => Box::new(CsvRenderer),
        ReportFormat::Json => Box::new(JsonRenderer),
    }
}

/// Renders a report and writes it to a file, or to stdout when no path is given
///
/// # Arguments
///
/// * `report` - The finished batch
/// * `format` - Output format
/// * `path` - Destination file; `None` writes to stdout
pub fn write_report(
    report: &BatchReport,
    format: ReportFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let rendered = renderer_for(format).render(report)?;

    match path {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                OutputError::Write(format!("cannot create {}: {}", path.display(), e))
            })?;
            file.write_all(rendered.as_bytes())?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
