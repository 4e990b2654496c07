//! Configuration module for Crawl-Checker
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section has defaults, so the checker also runs
//! without any file.
//!
//! # Example
//!
//! ```no_run
//! use crawl_checker::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("checker.toml")).unwrap();
//! println!("Robots timeout: {}s", config.checker.robots_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CheckerConfig, Config, OutputConfig, ReportFormat, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, validate_checker_config, MAX_CONCURRENCY};
