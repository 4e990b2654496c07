//! CSV export
//!
//! One header row in column order, then one row per result. Records end in
//! CRLF and fields are quoted only when they contain a delimiter, quote, or
//! line break (RFC 4180).

use crate::batch::BatchReport;
use crate::output::labels::{ReportRow, COLUMNS};
use crate::output::traits::{OutputError, OutputResult, ReportRenderer};
use csv::{Terminator, WriterBuilder};

/// Renders reports as CSV
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn render(&self, report: &BatchReport) -> OutputResult<String> {
        format_csv(report)
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

/// Formats every result as a CSV table
pub fn format_csv(report: &BatchReport) -> OutputResult<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(vec![]);

    writer.write_record(COLUMNS)?;
    for result in &report.results {
        writer.write_record(ReportRow::from_result(result).values())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Format(e.to_string()))
}
