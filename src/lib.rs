//! Crawl-Checker: robots.txt driven crawlability assessment
//!
//! This crate evaluates, for a batch of website URLs, whether and how each site
//! may be crawled automatically. It fetches robots.txt, parses the policy,
//! previews the sitemap, and combines those signals into a crawlability score
//! and a recommended access strategy.

pub mod analysis;
pub mod batch;
pub mod classify;
pub mod config;
pub mod fetch;
pub mod output;
pub mod robots;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for Crawl-Checker operations
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Malformed URL: {0}")]
    Url(#[from] UrlError),

    #[error("robots.txt unavailable for {url} (HTTP {status})")]
    PolicyUnavailable { url: String, status: u16 },

    #[error("Failed to fetch robots.txt from {url}: {message}")]
    PolicyFetch { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Analysis task failed: {0}")]
    Task(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Crawl-Checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analysis::{Analyzer, AnalyzerSettings, SiteAnalysisRequest, SiteAnalysisResult};
pub use config::Config;
pub use robots::RobotsPolicy;
