//! Public base address resolution from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Returns the raw `Host` header value, port included.
///
/// `None` if the header is absent, empty, or not valid visible ASCII.
pub fn extract_host_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::HOST)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|host| !host.is_empty())
}

/// Resolves the base address short URLs are built on.
///
/// Priority:
/// 1. `configured` (the `BASE_URL` setting), trailing `/` trimmed
/// 2. `http://` + the request's `Host` header
/// 3. `http://` + `fallback_host`
pub fn public_base_url(configured: Option<&str>, headers: &HeaderMap, fallback_host: &str) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let host = extract_host_from_headers(headers).unwrap_or(fallback_host);
    format!("http://{host}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_extract_host_keeps_port() {
        let headers = headers_with_host("localhost:5000");
        assert_eq!(extract_host_from_headers(&headers), Some("localhost:5000"));
    }

    #[test]
    fn test_extract_host_ipv6() {
        let headers = headers_with_host("[::1]:8080");
        assert_eq!(extract_host_from_headers(&headers), Some("[::1]:8080"));
    }

    #[test]
    fn test_extract_host_missing() {
        assert_eq!(extract_host_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_extract_host_empty() {
        let headers = headers_with_host("");
        assert_eq!(extract_host_from_headers(&headers), None);
    }

    #[test]
    fn test_base_url_prefers_configured() {
        let headers = headers_with_host("internal:5000");
        assert_eq!(
            public_base_url(Some("https://sho.rt/"), &headers, "0.0.0.0:5000"),
            "https://sho.rt"
        );
    }

    #[test]
    fn test_base_url_from_host_header() {
        let headers = headers_with_host("links.example.com");
        assert_eq!(
            public_base_url(None, &headers, "0.0.0.0:5000"),
            "http://links.example.com"
        );
    }

    #[test]
    fn test_base_url_fallback() {
        assert_eq!(
            public_base_url(None, &HeaderMap::new(), "127.0.0.1:5000"),
            "http://127.0.0.1:5000"
        );
    }
}
