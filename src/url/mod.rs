//! URL handling module for Crawl-Checker
//!
//! This module provides site URL parsing, domain extraction, and
//! robots.txt location construction.

mod domain;

pub use domain::{extract_domain, parse_site_url, robots_url_for};
