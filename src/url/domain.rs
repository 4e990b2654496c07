use crate::UrlError;
use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// The port is not part of the domain.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_checker::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM:8080/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Parses a user-supplied site URL
///
/// Only `http` and `https` URLs with a host are accepted; anything else is
/// reported as a malformed URL.
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The input has no parseable scheme or host
pub fn parse_site_url(input: &str) -> Result<Url, UrlError> {
    let url = Url::parse(input.trim()).map_err(|e| UrlError::Parse(format!("{}: {}", input, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Builds the robots.txt location for a site
///
/// The result is `{scheme}://{host}[:port]/robots.txt`; path, query, and
/// fragment of the input are dropped.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_checker::url::robots_url_for;
///
/// let site = Url::parse("https://example.com/blog/post?id=1#top").unwrap();
/// assert_eq!(robots_url_for(&site).unwrap().as_str(), "https://example.com/robots.txt");
/// ```
pub fn robots_url_for(site: &Url) -> Result<Url, UrlError> {
    site.join("/robots.txt")
        .map_err(|e| UrlError::Parse(e.to_string()))
}
