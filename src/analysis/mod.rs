//! Site analysis module
//!
//! This module contains the per-site pipeline and its input and output records:
//! - `SiteAnalysisRequest`: one URL to analyze
//! - `Analyzer`: resolves robots.txt, classifies, and previews the sitemap
//! - `SiteAnalysisResult`: the flat output record, full or degraded

mod analyzer;
mod result;

pub use analyzer::{Analyzer, AnalyzerSettings};
pub use result::{
    AccessStatus, FailureReason, SiteAnalysisRequest, SiteAnalysisResult, DEFAULT_ROBOTS_TIMEOUT,
};
