//! URL acceptance check for the shorten endpoint.
//!
//! A URL is accepted only when both checks pass:
//!
//! 1. It parses as an absolute `http`/`https` URL with a host ([`url::Url`]).
//! 2. Its authority matches [`URL_PATTERN`]: a dotted domain with a 2-6 letter
//!    top-level label, `localhost`, or a dotted-quad IPv4 address, followed by
//!    an optional port and an optional path/query/fragment.
//!
//! No normalization is applied; the caller stores the trimmed input verbatim.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Maximum accepted URL length in characters.
pub const MAX_URL_LENGTH: usize = 2048;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("URL pattern is a valid regex")
});

/// Returns `true` if `input` is an acceptable URL to shorten.
///
/// Surrounding whitespace is ignored. Empty and whitespace-only input,
/// non-HTTP schemes, hosts outside the accepted forms and anything longer than
/// [`MAX_URL_LENGTH`] characters are rejected. Control characters are
/// rejected anywhere, as the stored value becomes a `Location` header as is.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(is_valid_url("  http://localhost:8000  "));
/// assert!(!is_valid_url("not-a-valid-url"));
/// assert!(!is_valid_url("ftp://example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    let url = input.trim();
    if url.is_empty() || url.chars().count() > MAX_URL_LENGTH {
        return false;
    }

    if url.chars().any(char::is_control) {
        return false;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let scheme_ok = matches!(parsed.scheme(), "http" | "https");
    let host_ok = parsed.host_str().is_some_and(|host| !host.is_empty());

    scheme_ok && host_ok && URL_PATTERN.is_match(url)
}
