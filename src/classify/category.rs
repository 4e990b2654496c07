use serde::Serialize;
use std::fmt;

/// What kind of project a site is best suited for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedUse {
    RecipeExtraction,
    NewsAggregator,
    JobCrawler,
    BookRecommender,
    TravelMonitor,
    ApiDashboard,
    SitemapIndexer,
    ExperimentalHeadless,
    /// Used for sites whose robots.txt could not be read
    NotRecommended,
}

impl SuggestedUse {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RecipeExtraction => "Recipe Extraction",
            Self::NewsAggregator => "News Aggregator",
            Self::JobCrawler => "Job Crawler",
            Self::BookRecommender => "Book Recommender",
            Self::TravelMonitor => "Travel Deals Monitor",
            Self::ApiDashboard => "API-based Dashboard",
            Self::SitemapIndexer => "Sitemap-based Indexer",
            Self::ExperimentalHeadless => "Experimental / Headless Only",
            Self::NotRecommended => "Not Recommended",
        }
    }
}

impl fmt::Display for SuggestedUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// URL keyword rules, checked in order; the first hit wins
const KEYWORD_RULES: &[(&[&str], SuggestedUse)] = &[
    (&["recipes", "food"], SuggestedUse::RecipeExtraction),
    (&["news", "times", "aljazeera"], SuggestedUse::NewsAggregator),
    (&["jobs", "career", "remote"], SuggestedUse::JobCrawler),
    (&["books", "openlibrary"], SuggestedUse::BookRecommender),
    (&["travel", "trip", "expedia"], SuggestedUse::TravelMonitor),
];

/// Suggests a use for a site
///
/// URL keywords are matched case-sensitively and take priority over the
/// known-API and sitemap fallbacks.
///
/// # Examples
///
/// ```
/// use crawl_checker::classify::{suggest_use, SuggestedUse};
///
/// assert_eq!(suggest_use("https://dailynews.example", false, true), SuggestedUse::NewsAggregator);
/// assert_eq!(suggest_use("https://example.com", false, true), SuggestedUse::SitemapIndexer);
/// ```
pub fn suggest_use(url: &str, has_known_api: bool, has_sitemap: bool) -> SuggestedUse {
    for (keywords, category) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| url.contains(keyword)) {
            return *category;
        }
    }

    if has_known_api {
        SuggestedUse::ApiDashboard
    } else if has_sitemap {
        SuggestedUse::SitemapIndexer
    } else {
        SuggestedUse::ExperimentalHeadless
    }
}
