use serde::Deserialize;

/// Main configuration structure for Crawl-Checker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checker: CheckerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Maximum number of sites analyzed at the same time
    pub concurrency: u32,

    /// Timeout for the robots.txt request (seconds)
    #[serde(rename = "robots-timeout-secs")]
    pub robots_timeout_secs: u64,

    /// Timeout for the sitemap preview request (seconds)
    #[serde(rename = "sitemap-timeout-secs")]
    pub sitemap_timeout_secs: u64,

    /// Agent token tested against robots.txt groups
    #[serde(rename = "robots-user-agent")]
    pub robots_user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            robots_timeout_secs: 5,
            sitemap_timeout_secs: 10,
            robots_user_agent: "*".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the checker, sent in the User-Agent header
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the checker
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the checker
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,

    /// Email address for contact
    #[serde(rename = "contact-email")]
    pub contact_email: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "CrawlChecker".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
            contact_email: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `Name/Version (+ContactURL; ContactEmail)`, with the
    /// parenthesized part reduced to whatever contact details are set.
    pub fn header_value(&self) -> String {
        let base = format!("{}/{}", self.crawler_name, self.crawler_version);
        match (&self.contact_url, &self.contact_email) {
            (Some(url), Some(email)) => format!("{} (+{}; {})", base, url, email),
            (Some(url), None) => format!("{} (+{})", base, url),
            (None, Some(email)) => format!("{} ({})", base, email),
            (None, None) => base,
        }
    }
}

/// Report format written by the binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Csv,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,

    /// Path of the report file; stdout when absent
    pub path: Option<String>,
}
