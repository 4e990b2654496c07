/// Domains with a documented public API, mapped to the API root
///
/// Process-wide and read-only. Keys are lowercase hosts, matched exactly.
static KNOWN_APIS: &[(&str, &str)] = &[
    ("paperswithcode.com", "https://paperswithcode.com/api/v1/"),
    ("github.com", "https://api.github.com/"),
    ("openlibrary.org", "https://openlibrary.org/developers/api"),
];

/// Looks up the documented API root for a domain
///
/// # Examples
///
/// ```
/// use crawl_checker::classify::known_api_for;
///
/// assert_eq!(known_api_for("github.com"), Some("https://api.github.com/"));
/// assert_eq!(known_api_for("example.com"), None);
/// ```
pub fn known_api_for(domain: &str) -> Option<&'static str> {
    KNOWN_APIS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(domain))
        .map(|(_, api)| *api)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_domains() {
        assert_eq!(
            known_api_for("paperswithcode.com"),
            Some("https://paperswithcode.com/api/v1/")
        );
        assert_eq!(known_api_for("github.com"), Some("https://api.github.com/"));
        assert_eq!(
            known_api_for("openlibrary.org"),
            Some("https://openlibrary.org/developers/api")
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(known_api_for("GitHub.com"), Some("https://api.github.com/"));
    }

    #[test]
    fn test_subdomains_not_matched() {
        assert_eq!(known_api_for("gist.github.com"), None);
        assert_eq!(known_api_for("www.github.com"), None);
    }

    #[test]
    fn test_unknown_domain() {
        assert_eq!(known_api_for("example.com"), None);
        assert_eq!(known_api_for(""), None);
    }
}
