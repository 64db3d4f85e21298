//! URL readability heuristics.
//!
//! Pattern rules over scheme, host, and path that guess whether a page is
//! likely to carry long-form article content. This is a pure function of
//! the URL and the static rule set: no I/O, no state, and an unmatched URL
//! is not readable.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Hosts that are front doors to search, social, video, or commerce.
static NON_READABLE_HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:www\.)?(?:google|bing|duckduckgo|baidu|yandex|youtube|twitch|facebook|instagram|twitter|x|tiktok|reddit|pinterest|linkedin|amazon|ebay)\.",
    )
    .unwrap()
});

/// Path segments for auth, search, and account flows.
static NON_READABLE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|/)(?:login|log-in|signin|sign-in|signup|sign-up|register|auth|account|search|settings|cart|checkout)(?:/|$)",
    )
    .unwrap()
});

/// Dated archive paths, e.g. `/2024/05/01/article-title`.
static DATED_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:19|20)\d{2}/\d{1,2}/").unwrap());

/// Article-section path prefixes.
static ARTICLE_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|/)(?:article|articles|story|stories|post|posts|blog|news|opinion|feature|features)(?:/|$)",
    )
    .unwrap()
});

/// Long hyphenated trailing slug, e.g. `/how-to-grow-tomatoes`.
static SLUG_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/[a-z0-9]+(?:-[a-z0-9]+){2,}(?:\.html?)?/?$").unwrap());

/// Heuristically decide whether the page at `url` likely contains
/// long-form readable content.
///
/// Rejection rules run first (wrong scheme, portal hosts, auth/search
/// paths), then acceptance rules (dated archives, article sections, long
/// slugs). Anything unmatched defaults to not readable.
pub fn url_looks_readable(url: &Url) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    let Some(host) = url.host_str() else {
        return false;
    };
    if NON_READABLE_HOST_RE.is_match(host) {
        return false;
    }

    let path = url.path();
    if NON_READABLE_PATH_RE.is_match(path) {
        return false;
    }

    DATED_PATH_RE.is_match(path)
        || ARTICLE_SECTION_RE.is_match(path)
        || SLUG_PATH_RE.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readable(s: &str) -> bool {
        url_looks_readable(&Url::parse(s).unwrap())
    }

    #[test]
    fn login_page_is_not_readable() {
        assert!(!readable("https://example.com/login"));
    }

    #[test]
    fn dated_article_path_is_readable() {
        assert!(readable("https://example.com/2024/05/01/article-title"));
    }

    #[test]
    fn classification_is_deterministic() {
        let url = Url::parse("https://example.com/2024/05/01/article-title").unwrap();
        assert_eq!(url_looks_readable(&url), url_looks_readable(&url));

        let url = Url::parse("https://example.com/login").unwrap();
        assert_eq!(url_looks_readable(&url), url_looks_readable(&url));
    }

    #[test]
    fn non_http_schemes_are_not_readable() {
        assert!(!readable("ftp://example.com/2024/05/01/article-title"));
        assert!(!readable("file:///home/user/2024/05/01/article-title"));
    }

    #[test]
    fn portal_hosts_are_not_readable() {
        assert!(!readable("https://www.google.com/2024/05/01/article-title"));
        assert!(!readable("https://youtube.com/watch-this-great-video"));
        assert!(!readable("https://x.com/some-user-status-post"));
    }

    #[test]
    fn host_rejection_requires_host_prefix_match() {
        // A host merely containing a portal name is fine.
        assert!(readable("https://blog.notgoogle.dev/2024/05/01/article-title"));
    }

    #[test]
    fn auth_paths_reject_even_with_article_hints() {
        assert!(!readable("https://example.com/signup/why-you-should-join-us"));
        assert!(!readable("https://news.example.com/account"));
        assert!(!readable("https://example.com/SEARCH"));
    }

    #[test]
    fn article_sections_are_readable() {
        assert!(readable("https://example.com/news/local/city-hall"));
        assert!(readable("https://example.com/blog/entry"));
        assert!(readable("https://example.com/article/12345"));
    }

    #[test]
    fn long_slugs_are_readable() {
        assert!(readable("https://example.com/how-to-grow-tomatoes"));
        assert!(readable("https://example.com/guides/why-rust-is-fast.html"));
    }

    #[test]
    fn short_or_generic_paths_are_not_readable() {
        assert!(!readable("https://example.com/"));
        assert!(!readable("https://example.com/about"));
        assert!(!readable("https://example.com/pricing"));
        assert!(!readable("https://example.com/article-title"));
    }

    #[test]
    fn year_like_numbers_outside_date_shape_do_not_match() {
        assert!(!readable("https://example.com/9999/99/no"));
        assert!(!readable("https://example.com/p/1234"));
    }
}
