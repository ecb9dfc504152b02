//! HTTP transport seam.
//!
//! The API client builds fully-formed [`HttpRequest`]s and hands them to a
//! [`Transport`]. The browser build sends them with the Fetch API; tests
//! replay scripted responses.

use crate::error::TransportError;

/// HTTP method used by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// An outgoing request with the final URL and merged headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Look up a header value (case-insensitive name match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A received response: status code and raw body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange. No retries, no timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://x/api".to_string(),
            headers: vec![("Content-Type".to_string(), "image/png".to_string())],
            body: None,
        };
        assert_eq!(request.header("content-type"), Some("image/png"));
        assert_eq!(request.header("authorization"), None);
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
