//! Request options and response envelopes.

use serde::Deserialize;

use super::transport::Method;
use crate::config::{DEFAULT_MIME, list_limits};
use crate::error::RequestError;
use crate::format::encode_uri_component;
use crate::models::FileRecord;

/// Per-call options for [`DriveApi::request`](super::DriveApi::request).
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers. An `Authorization` entry is ignored.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response of the listing endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of the upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
}

/// Response of the delete endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Optional server-side filters for the listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Only files with exactly this MIME type
    pub mime: Option<String>,
    /// Maximum number of results (1-1000)
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Render as a query string (empty, or starting with `?`).
    ///
    /// Fails without touching the network when the limit is out of range.
    pub fn to_query_string(&self) -> Result<String, RequestError> {
        let mut params = Vec::new();
        if let Some(mime) = self.mime.as_deref().filter(|m| !m.is_empty()) {
            params.push(format!("mime={}", encode_uri_component(mime)));
        }
        if let Some(limit) = self.limit {
            if !(list_limits::MIN..=list_limits::MAX).contains(&limit) {
                return Err(RequestError::new(format!(
                    "Limit must be between {} and {}",
                    list_limits::MIN,
                    list_limits::MAX
                )));
            }
            params.push(format!("limit={}", limit));
        }
        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{}", params.join("&")))
        }
    }
}

/// A local file picked for upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadPayload {
    pub name: String,
    /// Declared MIME type (browsers report an empty string when unknown)
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadPayload {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime,
            bytes,
        }
    }

    /// Declared MIME type, or `application/octet-stream`.
    pub fn effective_mime(&self) -> &str {
        self.mime
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_string() {
        assert_eq!(ListQuery::default().to_query_string().unwrap(), "");
        let query = ListQuery {
            mime: Some("application/pdf".to_string()),
            limit: Some(50),
        };
        assert_eq!(
            query.to_query_string().unwrap(),
            "?mime=application%2Fpdf&limit=50"
        );
        let only_limit = ListQuery {
            mime: None,
            limit: Some(1),
        };
        assert_eq!(only_limit.to_query_string().unwrap(), "?limit=1");
    }

    #[test]
    fn test_list_query_rejects_bad_limit() {
        for limit in [0, 1001] {
            let query = ListQuery {
                mime: None,
                limit: Some(limit),
            };
            let err = query.to_query_string().unwrap_err();
            assert_eq!(err.message(), "Limit must be between 1 and 1000");
        }
    }

    #[test]
    fn test_effective_mime() {
        let typed = UploadPayload::new("a.png", Some("image/png".to_string()), vec![]);
        assert_eq!(typed.effective_mime(), "image/png");
        let untyped = UploadPayload::new("a.bin", None, vec![]);
        assert_eq!(untyped.effective_mime(), "application/octet-stream");
        let empty = UploadPayload::new("a.bin", Some(String::new()), vec![]);
        assert_eq!(empty.effective_mime(), "application/octet-stream");
    }
}
