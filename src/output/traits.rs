//! Report renderer trait and output errors
//!
//! Every report format implements `ReportRenderer`, turning a finished batch
//! into the text written to a file or stdout.

use crate::batch::BatchReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Format(e.to_string())
    }
}

impl From<csv::Error> for OutputError {
    fn from(e: csv::Error) -> Self {
        OutputError::Format(e.to_string())
    }
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders a batch report in one output format
pub trait ReportRenderer {
    /// Renders the whole report as a string
    fn render(&self, report: &BatchReport) -> OutputResult<String>;

    /// Conventional file extension for this format, without the dot
    fn extension(&self) -> &'static str;
}
