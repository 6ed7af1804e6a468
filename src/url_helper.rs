/// URL classification and favicon link helpers for the website list
use std::sync::LazyLock;

use regex::Regex;

use crate::favicon::{check_with, ImageProbe, DEFAULT_PROBE_TIMEOUT_MS};

/// Host-like strings: optional http(s) scheme, then either `localhost[:port]`
/// or dot-separated labels (optionally wildcarded with `*`), port and path.
/// Only `localhost` is anchored at the end, so a matching prefix is enough.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|\s)(?:https?://)?(?:localhost(?::[0-9]+)?$|(?:\*?|[a-z0-9_-]+)(?:\.[a-z0-9_-]+)+\.?(?::[0-9]+)?(?:/\S*)?)",
    )
    .expect("url pattern is valid")
});

static PROTOCOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:ftps?|https?|file|chrome|edge|moz-extension|chrome-extension|extension)://|about:)",
    )
    .expect("protocol pattern is valid")
});

static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:.*://)?(?:(?:www|m|\*)\.)?([^/]+).*").expect("hostname pattern is valid")
});

/// Check whether a string looks like a website the user can add to a list
///
/// Examples:
/// - `website.com`, `*.website.com/*`, `https://a.b.c:8080/path` → true
/// - `localhost`, `http://localhost:3000` → true
/// - `website`, `http://stablediffusion` → false (no dot-separated host)
pub fn is_url(url: &str) -> bool {
    URL_PATTERN.is_match(url.trim())
}

/// Check whether a string starts with one of the schemes the extension accepts
pub fn has_valid_protocol(url: &str) -> bool {
    PROTOCOL_PATTERN.is_match(url)
}

/// Drop the query string (everything from the first `?`)
pub fn strip_url(url: &str) -> &str {
    url.split_once('?').map_or(url, |(head, _)| head)
}

/// Extract the hostname from a URL, without scheme, path or `www.`/`m.`/`*.` prefix
///
/// Strings the pattern does not recognize (e.g. empty or starting with `/`)
/// are returned unchanged.
pub fn get_hostname(url: &str) -> String {
    HOSTNAME_PATTERN.replace(url, "$1").into_owned()
}

/// Derive the conventional favicon location for a URL's host
pub fn get_favicon_link(url: &str) -> String {
    format!("https://{}/favicon.ico", get_hostname(url))
}

/// Check whether a favicon link can be loaded by the browser
///
/// Always settles to a boolean; unreachable, malformed or slow links are `false`.
pub async fn check_favicon_link(favicon_link: &str) -> bool {
    check_with(&ImageProbe::new(DEFAULT_PROBE_TIMEOUT_MS), favicon_link).await
}

/// Prefix `https://` when the URL has no accepted scheme
pub fn get_valid_url(url: &str) -> String {
    if !url.is_empty() && !has_valid_protocol(url) {
        return format!("https://{url}");
    }
    url.to_string()
}
