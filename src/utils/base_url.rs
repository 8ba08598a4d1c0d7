//! Base URL resolution for links shown to users.

use axum::http::{HeaderMap, header};

/// Returns the base URL that short links are served under.
///
/// A configured base URL always wins. Otherwise the `Host` header is used with
/// the `http` scheme (or the scheme in `X-Forwarded-Proto` when a proxy set it).
/// Falls back to `http://localhost` when the header is missing or not UTF-8.
///
/// The result never ends with a slash.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8000".parse().unwrap());
///
/// assert_eq!(request_base_url(None, &headers), "http://s.example.com:8000");
/// ```
pub fn request_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost");

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| v.eq_ignore_ascii_case("https") || v.eq_ignore_ascii_case("http"))
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_else(|| "http".to_string());

    format!("{}://{}", scheme, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_configured_base_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("ignored.com"));

        assert_eq!(
            request_base_url(Some("https://s.example.com/"), &headers),
            "https://s.example.com"
        );
    }

    #[test]
    fn test_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(request_base_url(None, &headers), "http://example.com");
    }

    #[test]
    fn test_host_header_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8000"));

        assert_eq!(request_base_url(None, &headers), "http://localhost:8000");
    }

    #[test]
    fn test_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("HTTPS, http"));

        assert_eq!(request_base_url(None, &headers), "https://s.example.com");
    }

    #[test]
    fn test_unknown_forwarded_proto_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("gopher"));

        assert_eq!(request_base_url(None, &headers), "http://s.example.com");
    }

    #[test]
    fn test_missing_host_header() {
        let headers = HeaderMap::new();

        assert_eq!(request_base_url(None, &headers), "http://localhost");
    }

    #[test]
    fn test_invalid_utf8_host() {
        let mut headers = HeaderMap::new();
        if let Ok(header_value) = HeaderValue::from_bytes(&[0xFF, 0xFE]) {
            headers.insert(header::HOST, header_value);

            assert_eq!(request_base_url(None, &headers), "http://localhost");
        }
    }
}
