//! Robots.txt parser implementation
//!
//! Directive extraction is done line by line here; permission checks are
//! delegated to the robotstxt crate, which implements the standard
//! longest-match precedence.

use robotstxt::DefaultMatcher;
use serde::Serialize;

/// Parsed representation of a robots.txt body
///
/// The policy is a pure function of the raw text and the agent it was parsed
/// for: parsing the same input twice yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotsPolicy {
    /// The robots.txt body as fetched
    pub raw_text: String,

    /// `Allow:` values across all groups, in document order
    pub allow_rules: Vec<String>,

    /// `Disallow:` values across all groups, in document order
    pub disallow_rules: Vec<String>,

    /// `Sitemap:` values in document order (duplicates kept)
    pub sitemap_urls: Vec<String>,

    /// Crawl delay applying to the requested agent, in seconds
    pub crawl_delay_seconds: Option<f64>,
}

impl RobotsPolicy {
    /// Parses a robots.txt body for the given user agent
    ///
    /// Directive names are matched case-insensitively. Lines without a
    /// `name: value` shape are ignored, so malformed content degrades to an
    /// empty policy instead of failing.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw robots.txt file content
    /// * `user_agent` - Agent used to pick the applicable `Crawl-delay`
    pub fn parse(content: &str, user_agent: &str) -> Self {
        let mut allow_rules = Vec::new();
        let mut disallow_rules = Vec::new();
        let mut sitemap_urls = Vec::new();

        for (key, value) in directives(content) {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "allow" => allow_rules.push(value.to_string()),
                "disallow" => disallow_rules.push(value.to_string()),
                "sitemap" => sitemap_urls.push(value.to_string()),
                _ => {}
            }
        }

        let policy = Self {
            raw_text: content.to_string(),
            allow_rules,
            disallow_rules,
            sitemap_urls,
            crawl_delay_seconds: crawl_delay_for(content, user_agent),
        };

        if policy.is_empty() && !content.trim().is_empty() {
            tracing::debug!("robots.txt body contained no recognized directives");
        }

        policy
    }

    /// Creates a policy with no rules at all
    pub fn empty() -> Self {
        Self::parse("", "*")
    }

    /// Returns true when no allow, disallow, sitemap, or delay directive was found
    pub fn is_empty(&self) -> bool {
        self.allow_rules.is_empty()
            && self.disallow_rules.is_empty()
            && self.sitemap_urls.is_empty()
            && self.crawl_delay_seconds.is_none()
    }

    /// Returns true when at least one sitemap was declared
    pub fn has_sitemap(&self) -> bool {
        !self.sitemap_urls.is_empty()
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// Uses the standard precedence: the longest matching pattern wins, ties
    /// prefer `Allow`, and no match means allowed. A group naming the agent
    /// takes priority over the `*` group.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to check (absolute, or a path like "/page.html")
    /// * `user_agent` - The user agent string; `*` only obeys the wildcard group
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.raw_text.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.raw_text, user_agent, url)
    }
}

/// Yields `(lowercased name, trimmed value)` for every directive line
///
/// Comments after `#` and a leading byte-order mark are stripped.
fn directives<'a>(content: &'a str) -> impl Iterator<Item = (String, &'a str)> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .filter_map(|line| {
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            let (key, value) = line.split_once(':')?;
            Some((key.trim().to_lowercase(), value.trim()))
        })
}

/// Finds the crawl delay applying to `user_agent`
///
/// Consecutive `User-agent` lines form one group; the group ends at the next
/// `User-agent` line that follows any other directive. A group naming the
/// agent wins over the `*` group. Within each kind, the first delay found is used.
fn crawl_delay_for(content: &str, user_agent: &str) -> Option<f64> {
    let normalized_agent = user_agent.trim().to_lowercase();
    let mut group_agents: Vec<String> = Vec::new();
    let mut group_has_rules = false;
    let mut delay_for_wildcard: Option<f64> = None;
    let mut delay_for_agent: Option<f64> = None;

    for (key, value) in directives(content) {
        match key.as_str() {
            "user-agent" => {
                if group_has_rules {
                    group_agents.clear();
                    group_has_rules = false;
                }
                group_agents.push(value.to_lowercase());
            }
            "crawl-delay" => {
                group_has_rules = true;
                let Ok(delay) = value.parse::<f64>() else {
                    continue;
                };
                if !delay.is_finite() || delay < 0.0 {
                    continue;
                }

                let names_agent = normalized_agent != "*"
                    && group_agents
                        .iter()
                        .any(|ua| ua != "*" && !ua.is_empty() && normalized_agent.contains(ua.as_str()));
                if names_agent {
                    delay_for_agent.get_or_insert(delay);
                } else if group_agents.iter().any(|ua| ua == "*") {
                    delay_for_wildcard.get_or_insert(delay);
                }
            }
            _ => group_has_rules = true,
        }
    }

    delay_for_agent.or(delay_for_wildcard)
}
