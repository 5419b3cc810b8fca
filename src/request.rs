//! Immutable per-request context for the block page handler.

use axum::http::{HeaderMap, Uri, header};

use crate::sanitize::strip_shell_metacharacters;

/// The fields of one HTTP request the block page cares about.
///
/// Built once per request from the axum request parts and passed by value;
/// there is no mutable or shared request state. Both echoed fields are
/// already stripped of shell metacharacters when the context is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRequest {
    /// Sanitized path-and-query of the request, e.g. `/track.html`.
    pub uri: String,
    /// Sanitized `Host` header with any port stripped.
    pub server_name: String,
    /// The appliance's own address, used as the asset host.
    pub server_addr: String,
}

impl BlockRequest {
    /// Builds a request context from axum request parts.
    ///
    /// A missing or unreadable `Host` header falls back to the server
    /// address: every request must produce a page, so there is no error
    /// path here.
    pub fn from_parts(uri: &Uri, headers: &HeaderMap, server_addr: &str) -> Self {
        let raw_uri = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());

        let server_name = host_name(headers).unwrap_or_else(|| server_addr.to_string());

        Self {
            uri: strip_shell_metacharacters(raw_uri),
            server_name: strip_shell_metacharacters(&server_name),
            server_addr: server_addr.to_string(),
        }
    }

    /// The URI as rendered in the notice: the root path displays as an
    /// empty string so the identifier is the bare server name rather than
    /// `servername/`.
    pub fn display_uri(&self) -> &str {
        if self.uri == "/" { "" } else { &self.uri }
    }
}

/// Extracts the host name from the `Host` header, handling:
/// - IPv6 addresses (e.g., `[::1]` or `[::1]:8080`)
/// - Hostnames or IPv4 addresses with ports (e.g., `ads.example.com:80`)
/// - Plain hostnames
///
/// Port numbers are stripped from the result.
fn host_name(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?;

    let name = if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => host[..=end_bracket].to_string(),
            None => host.to_string(),
        }
    } else {
        // IPv4, hostname, or localhost - strip port if present
        host.split(':').next().unwrap_or(host).to_string()
    };

    if name.is_empty() { None } else { Some(name) }
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
    fn test_simple_host() {
        let req = BlockRequest::from_parts(
            &"/track.html".parse().unwrap(),
            &headers_with_host("ads.example.com"),
            "192.168.1.2",
        );

        assert_eq!(req.server_name, "ads.example.com");
        assert_eq!(req.uri, "/track.html");
        assert_eq!(req.server_addr, "192.168.1.2");
    }

    #[test]
    fn test_host_port_stripped() {
        let req = BlockRequest::from_parts(
            &"/".parse().unwrap(),
            &headers_with_host("ads.example.com:8080"),
            "192.168.1.2",
        );

        assert_eq!(req.server_name, "ads.example.com");
    }

    #[test]
    fn test_ipv6_host_keeps_brackets() {
        let req = BlockRequest::from_parts(
            &"/".parse().unwrap(),
            &headers_with_host("[::1]:8080"),
            "192.168.1.2",
        );

        assert_eq!(req.server_name, "[::1]");
    }

    #[test]
    fn test_missing_host_falls_back_to_server_addr() {
        let req =
            BlockRequest::from_parts(&"/".parse().unwrap(), &HeaderMap::new(), "192.168.1.2");

        assert_eq!(req.server_name, "192.168.1.2");
    }

    #[test]
    fn test_query_separator_stripped_with_shell_set() {
        let req = BlockRequest::from_parts(
            &"/page?foo=1".parse().unwrap(),
            &headers_with_host("ads.example.com"),
            "192.168.1.2",
        );

        assert_eq!(req.uri, "/pagefoo=1");
    }

    #[test]
    fn test_fields_are_sanitized() {
        let req = BlockRequest::from_parts(
            &"/foo;rm%20-rf%20/.html".parse().unwrap(),
            &headers_with_host("evil`id`.example.com"),
            "192.168.1.2",
        );

        assert_eq!(req.uri, "/foorm%20-rf%20/.html");
        assert_eq!(req.server_name, "evilid.example.com");
    }

    #[test]
    fn test_display_uri_root_is_empty() {
        let req = BlockRequest::from_parts(
            &"/".parse().unwrap(),
            &headers_with_host("ads.example.com"),
            "192.168.1.2",
        );

        assert_eq!(req.display_uri(), "");
    }

    #[test]
    fn test_display_uri_non_root_unchanged() {
        let req = BlockRequest::from_parts(
            &"/track.html".parse().unwrap(),
            &headers_with_host("ads.example.com"),
            "192.168.1.2",
        );

        assert_eq!(req.display_uri(), "/track.html");
    }
}
