use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// Matches text whose trimmed form starts with an http(s) scheme.
static URL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://\S+").unwrap());

/// Syntactic check for http(s) URLs. Does not attempt full parsing.
pub fn is_url(text: &str) -> bool {
    URL_PREFIX.is_match(text.trim())
}

/// Derive the conventional favicon location for a URL.
///
/// Returns `None` when the text does not parse as an absolute URL, or when
/// it parses to an opaque origin (`data:` and friends have no host to fetch
/// a favicon from).
pub fn favicon_for(text: &str) -> Option<String> {
    let url = match Url::parse(text.trim()) {
        Ok(url) => url,
        Err(err) => {
            debug!("favicon lookup failed to parse url: {}", err);
            return None;
        }
    };

    let origin = url.origin();
    if !origin.is_tuple() {
        return None;
    }

    Some(format!("{}/favicon.ico", origin.ascii_serialization()))
}

/// Favicon location for URL clipboard entries, or an empty string when the
/// text is empty or not a parseable URL.
pub fn favicon_url(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    favicon_for(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_http_and_https_with_whitespace() {
        assert!(is_url("  http://foo.bar  "));
        assert!(is_url("https://example.com"));
        assert!(is_url("http://a"));
    }

    #[test]
    fn rejects_other_schemes_and_empty_text() {
        assert!(!is_url("ftp://x"));
        assert!(!is_url(""));
        assert!(!is_url("http://"));
        assert!(!is_url("just some text"));
        assert!(!is_url("see https://example.com"));
    }

    #[test]
    fn favicon_comes_from_the_origin() {
        assert_eq!(favicon_url("https://a.b/c"), "https://a.b/favicon.ico");
        assert_eq!(
            favicon_url("  https://example.com/deep/path?q=1  "),
            "https://example.com/favicon.ico"
        );
    }

    #[test]
    fn favicon_keeps_explicit_ports() {
        assert_eq!(
            favicon_url("http://host:8080/x"),
            "http://host:8080/favicon.ico"
        );
    }

    #[test]
    fn favicon_absorbs_parse_failures() {
        assert_eq!(favicon_url("garbage"), "");
        assert_eq!(favicon_url(""), "");
        assert_eq!(favicon_for("not a url"), None);
    }

    #[test]
    fn opaque_origins_have_no_favicon() {
        assert_eq!(favicon_for("data:text/plain,hello"), None);
        assert_eq!(favicon_url("data:text/plain,hello"), "");
    }
}
