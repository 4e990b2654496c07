//! Access-method selection, tool recommendation, and crawlability score

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Signals collected for one site, the inputs to every decision in this module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteSignals {
    pub crawl_allowed: bool,
    pub has_sitemap: bool,
    pub rss_available: bool,
    pub has_known_api: bool,
    pub js_heavy: bool,
}

/// A way of getting content out of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMethod {
    NormalCrawl,
    Sitemap,
    Api,
    Rss,
}

impl AccessMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalCrawl => "Normal Crawling",
            Self::Sitemap => "Sitemap",
            Self::Api => "API",
            Self::Rss => "RSS",
        }
    }
}

impl fmt::Display for AccessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single recommended access method
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BestMethod {
    Sitemap,
    NormalCrawl,
    NoAccess,
}

/// Tooling guidance for crawling a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolRecommendation {
    /// Crawling allowed and content is plain HTML
    StaticHtml,
    /// Crawling allowed but content is script-rendered
    HeadlessBrowser,
    /// Crawling disallowed
    Blocked,
    /// Nothing is known about the site
    HeadlessFallback,
}

impl ToolRecommendation {
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::StaticHtml => "Use a plain HTTP client with an HTML parser (lightweight & fast)",
            Self::HeadlessBrowser => {
                "Use Playwright, Puppeteer, or Selenium (JS-rendered content)"
            }
            Self::Blocked => {
                "Crawling blocked. Consider Playwright or Splash (headless browser), or look for public APIs"
            }
            Self::HeadlessFallback => "Use headless browser like Playwright or Selenium",
        }
    }
}

impl fmt::Display for ToolRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guidance())
    }
}

/// Lists every access method the signals support
pub fn available_methods(signals: &SiteSignals) -> BTreeSet<AccessMethod> {
    let mut methods = BTreeSet::new();
    if signals.crawl_allowed {
        methods.insert(AccessMethod::NormalCrawl);
    }
    if signals.has_sitemap {
        methods.insert(AccessMethod::Sitemap);
    }
    if signals.has_known_api {
        methods.insert(AccessMethod::Api);
    }
    if signals.rss_available {
        methods.insert(AccessMethod::Rss);
    }
    methods
}

/// Picks the best access method
///
/// A sitemap wins even when normal crawling is also allowed.
pub fn best_method(signals: &SiteSignals) -> BestMethod {
    if signals.has_sitemap {
        BestMethod::Sitemap
    } else if signals.crawl_allowed {
        BestMethod::NormalCrawl
    } else {
        BestMethod::NoAccess
    }
}

/// Chooses tooling from crawl permission and script rendering
pub fn recommend_tool(signals: &SiteSignals) -> ToolRecommendation {
    match (signals.crawl_allowed, signals.js_heavy) {
        (true, false) => ToolRecommendation::StaticHtml,
        (true, true) => ToolRecommendation::HeadlessBrowser,
        (false, _) => ToolRecommendation::Blocked,
    }
}

/// Computes the crawlability score in [0, 100]
///
/// | Signal | Points |
/// |--------|--------|
/// | crawl allowed | 30 |
/// | sitemap present | 30 |
/// | feed available | 15 |
/// | known API | 15 |
/// | not script-rendered | 10 |
pub fn crawlability_score(signals: &SiteSignals) -> u8 {
    let mut score: u32 = 0;
    if signals.crawl_allowed {
        score += 30;
    }
    if signals.has_sitemap {
        score += 30;
    }
    if signals.rss_available {
        score += 15;
    }
    if signals.has_known_api {
        score += 15;
    }
    if !signals.js_heavy {
        score += 10;
    }
    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_signal_combinations() -> Vec<SiteSignals> {
        (0u8..32)
            .map(|bits| SiteSignals {
                crawl_allowed: bits & 1 != 0,
                has_sitemap: bits & 2 != 0,
                rss_available: bits & 4 != 0,
                has_known_api: bits & 8 != 0,
                js_heavy: bits & 16 != 0,
            })
            .collect()
    }

    #[test]
    fn test_score_bounds_and_maximum() {
        for signals in all_signal_combinations() {
            let score = crawlability_score(&signals);
            assert!(score <= 100);

            let perfect = signals.crawl_allowed
                && signals.has_sitemap
                && signals.rss_available
                && signals.has_known_api
                && !signals.js_heavy;
            assert_eq!(score == 100, perfect, "signals: {:?}", signals);
        }
    }

    #[test]
    fn test_score_values() {
        let blocked_js = SiteSignals {
            js_heavy: true,
            ..SiteSignals::default()
        };
        assert_eq!(crawlability_score(&blocked_js), 0);

        let plain = SiteSignals {
            crawl_allowed: true,
            ..SiteSignals::default()
        };
        assert_eq!(crawlability_score(&plain), 40);

        let sitemap_only = SiteSignals {
            has_sitemap: true,
            js_heavy: true,
            ..SiteSignals::default()
        };
        assert_eq!(crawlability_score(&sitemap_only), 30);
    }

    #[test]
    fn test_available_methods() {
        let signals = SiteSignals {
            crawl_allowed: true,
            has_sitemap: false,
            rss_available: true,
            has_known_api: true,
            js_heavy: false,
        };
        let methods: Vec<_> = available_methods(&signals).into_iter().collect();
        assert_eq!(
            methods,
            vec![AccessMethod::NormalCrawl, AccessMethod::Api, AccessMethod::Rss]
        );

        assert!(available_methods(&SiteSignals::default()).is_empty());
    }

    #[test]
    fn test_best_method_prefers_sitemap() {
        let both = SiteSignals {
            crawl_allowed: true,
            has_sitemap: true,
            ..SiteSignals::default()
        };
        assert_eq!(best_method(&both), BestMethod::Sitemap);

        let sitemap_blocked = SiteSignals {
            has_sitemap: true,
            ..SiteSignals::default()
        };
        assert_eq!(best_method(&sitemap_blocked), BestMethod::Sitemap);

        let crawl_only = SiteSignals {
            crawl_allowed: true,
            ..SiteSignals::default()
        };
        assert_eq!(best_method(&crawl_only), BestMethod::NormalCrawl);

        assert_eq!(best_method(&SiteSignals::default()), BestMethod::NoAccess);
    }

    #[test]
    fn test_tool_recommendation_table() {
        let mut signals = SiteSignals {
            crawl_allowed: true,
            ..SiteSignals::default()
        };
        assert_eq!(recommend_tool(&signals), ToolRecommendation::StaticHtml);

        signals.js_heavy = true;
        assert_eq!(recommend_tool(&signals), ToolRecommendation::HeadlessBrowser);

        signals.crawl_allowed = false;
        assert_eq!(recommend_tool(&signals), ToolRecommendation::Blocked);

        signals.js_heavy = false;
        assert_eq!(recommend_tool(&signals), ToolRecommendation::Blocked);
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(AccessMethod::NormalCrawl.to_string(), "Normal Crawling");
        assert_eq!(AccessMethod::Api.to_string(), "API");
    }
}
