//! Content heuristics over the robots.txt body
//!
//! Both checks are plain case-insensitive substring tests. They only look at
//! robots.txt, which is a weak signal; a page-level check can replace these
//! functions without touching the pipeline.

/// Markers suggesting a feed is published
const FEED_MARKERS: &[&str] = &["rss", "feed"];

/// Markers suggesting content is rendered client-side
const SCRIPT_MARKERS: &[&str] = &[
    "webpack",
    "window.__initial_state__",
    "react",
    "vue",
    "next.js",
];

/// Returns true when the body mentions an RSS or other feed
pub fn detect_feed(body: &str) -> bool {
    contains_any(body, FEED_MARKERS)
}

/// Returns true when the body mentions a client-side rendering framework
pub fn detect_script_rendering(body: &str) -> bool {
    contains_any(body, SCRIPT_MARKERS)
}

fn contains_any(body: &str, markers: &[&str]) -> bool {
    let lowered = body.to_lowercase();
    markers.iter().any(|marker| lowered.contains(marker))
}
