//! Authenticated client for the privafile HTTP API.
//!
//! [`DriveApi`] injects the bearer token into every request and applies the
//! success contract: a call succeeds only if the HTTP status is 2xx *and*
//! the JSON body carries a truthy `success` field. Every other outcome
//! becomes a [`RequestError`].

mod transport;
mod types;

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use types::{
    DeleteResponse, ListQuery, ListResponse, RequestOptions, UploadPayload, UploadResponse,
};

use crate::config::{DELETE_ENDPOINT, DOWNLOAD_ENDPOINT, LIST_ENDPOINT, UPLOAD_ENDPOINT};
use crate::error::RequestError;
use crate::format::encode_uri_component;
use crate::models::FileRecord;

const AUTHORIZATION: &str = "Authorization";

/// Base URL and bearer token used for every request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ApiConfig {
    base_url: String,
    token: String,
}

/// API client over a [`Transport`].
///
/// Configuration lives behind a `RefCell` so a shared client can be
/// reconfigured between calls; it is copied out before any await.
pub struct DriveApi<T> {
    transport: T,
    config: RefCell<ApiConfig>,
}

impl<T: Transport> DriveApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: RefCell::new(ApiConfig::default()),
        }
    }

    /// Store base URL and token for subsequent calls.
    ///
    /// The URL is used as given; callers strip any trailing slash.
    pub fn configure(&self, base_url: &str, token: &str) {
        *self.config.borrow_mut() = ApiConfig {
            base_url: base_url.to_string(),
            token: token.to_string(),
        };
    }

    pub fn base_url(&self) -> String {
        self.config.borrow().base_url.clone()
    }

    pub fn token(&self) -> String {
        self.config.borrow().token.clone()
    }

    /// Send one authenticated request and apply the success contract.
    ///
    /// Returns the parsed JSON body on success.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        let ApiConfig { base_url, token } = self.config.borrow().clone();
        let request = build_request(&base_url, &token, endpoint, options);
        debug!(method = request.method.as_str(), endpoint, "sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            warn!(endpoint, error = %e, "transport failure");
            RequestError::from(e)
        })?;

        evaluate_response(&response).inspect_err(|e| {
            debug!(endpoint, status = response.status, error = %e, "request failed");
        })
    }

    async fn request_as<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, RequestError> {
        let body = self.request(endpoint, options).await?;
        serde_json::from_value(body)
            .map_err(|e| RequestError::new(format!("Invalid response: {}", e)))
    }

    /// List every file owned by the authenticated user.
    pub async fn list_files(&self) -> Result<ListResponse, RequestError> {
        self.request_as(LIST_ENDPOINT, RequestOptions::get()).await
    }

    /// List files with server-side MIME/limit filters.
    pub async fn list_files_filtered(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse, RequestError> {
        let endpoint = format!("{}{}", LIST_ENDPOINT, query.to_query_string()?);
        self.request_as(&endpoint, RequestOptions::get()).await
    }

    /// Fetch a file through the JSON success contract.
    ///
    /// Only works against servers that wrap downloads in a JSON envelope;
    /// use [`download_url`](Self::download_url) for direct binary access.
    pub async fn download_file(&self, file: &FileRecord) -> Result<Value, RequestError> {
        self.request(&download_endpoint(file), RequestOptions::get())
            .await
    }

    /// Direct link to a file's content (no network call).
    pub fn download_url(&self, file: &FileRecord) -> String {
        format!("{}{}", self.config.borrow().base_url, download_endpoint(file))
    }

    /// Upload raw bytes; the MIME type goes both in the query and in `Content-Type`.
    pub async fn upload_file(&self, payload: UploadPayload) -> Result<UploadResponse, RequestError> {
        let mime = payload.effective_mime().to_string();
        let endpoint = format!("{}?mime={}", UPLOAD_ENDPOINT, encode_uri_component(&mime));
        let options = RequestOptions::with_method(Method::Post)
            .header("Content-Type", mime)
            .body(payload.bytes);
        self.request_as(&endpoint, options).await
    }

    /// Delete a file on the server.
    pub async fn delete_file(&self, file: &FileRecord) -> Result<DeleteResponse, RequestError> {
        let endpoint = format!("{}/{}", DELETE_ENDPOINT, file.id);
        self.request_as(&endpoint, RequestOptions::with_method(Method::Delete))
            .await
    }
}

fn download_endpoint(file: &FileRecord) -> String {
    format!("{}/{}", DOWNLOAD_ENDPOINT, file.id)
}

/// Build the outgoing request. The bearer header always wins over a
/// caller-supplied `Authorization` header.
fn build_request(base_url: &str, token: &str, endpoint: &str, options: RequestOptions) -> HttpRequest {
    let mut headers = Vec::with_capacity(options.headers.len() + 1);
    headers.push((AUTHORIZATION.to_string(), format!("Bearer {}", token)));

    for (name, value) in options.headers {
        if name.eq_ignore_ascii_case(AUTHORIZATION) {
            warn!(endpoint, "ignoring caller-supplied Authorization header");
            continue;
        }
        headers.push((name, value));
    }

    HttpRequest {
        method: options.method,
        url: format!("{}{}", base_url, endpoint),
        headers,
        body: options.body,
    }
}

/// Apply the success contract to a raw response.
fn evaluate_response(response: &HttpResponse) -> Result<Value, RequestError> {
    let Ok(body) = serde_json::from_slice::<Value>(&response.body) else {
        return Err(RequestError::from_status(response.status));
    };

    if response.is_success() && body.get("success").is_some_and(is_truthy) {
        return Ok(body);
    }

    let message = body.get("message").and_then(Value::as_str);
    Err(RequestError::from_response(response.status, message))
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::TransportError;
    use crate::testing::MockTransport;

    fn client(mock: &MockTransport) -> DriveApi<MockTransport> {
        let api = DriveApi::new(mock.clone());
        api.configure("http://drive.local", "secret");
        api
    }

    #[tokio::test]
    async fn test_bearer_header_on_every_request() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": true, "files": []}));
        mock.respond_json(200, json!({"success": true}));
        let api = client(&mock);

        api.list_files().await.unwrap();
        api.delete_file(&FileRecord::new("f1", "text/plain")).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert_eq!(request.header("authorization"), Some("Bearer secret"));
        }
        assert_eq!(requests[0].url, "http://drive.local/api/files/list");
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[1].url, "http://drive.local/api/files/delete/f1");
        assert_eq!(requests[1].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_caller_authorization_header_does_not_override_bearer() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": true}));
        let api = client(&mock);

        let options = RequestOptions::get()
            .header("authorization", "Bearer other")
            .header("X-Trace", "1");
        api.request("/api/ping", options).await.unwrap();

        let request = mock.last_request().unwrap();
        let auth: Vec<_> = request
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("authorization"))
            .collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].1, "Bearer secret");
        assert_eq!(request.header("x-trace"), Some("1"));
    }

    #[tokio::test]
    async fn test_non_colliding_caller_headers_keep_bearer() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": true}));
        let api = client(&mock);

        let payload = UploadPayload::new("a.png", Some("image/png".to_string()), vec![1, 2, 3]);
        api.upload_file(payload).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.header("Authorization"), Some("Bearer secret"));
        assert_eq!(request.header("Content-Type"), Some("image/png"));
    }

    #[tokio::test]
    async fn test_upload_encodes_mime_and_sends_body() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": true, "message": "ok", "file_id": "new"}));
        let api = client(&mock);

        let payload = UploadPayload::new("a.png", Some("image/png".to_string()), vec![9, 8, 7]);
        let response = api.upload_file(payload).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://drive.local/api/files/upload?mime=image%2Fpng");
        assert_eq!(request.body.as_deref(), Some(&[9u8, 8, 7][..]));
        assert_eq!(response.file_id.as_deref(), Some("new"));
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_upload_without_mime_uses_octet_stream() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": true}));
        let api = client(&mock);

        api.upload_file(UploadPayload::new("blob", None, vec![])).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.url,
            "http://drive.local/api/files/upload?mime=application%2Foctet-stream"
        );
        assert_eq!(request.header("content-type"), Some("application/octet-stream"));
    }

    #[tokio::test]
    async fn test_success_false_with_200_uses_server_message() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": false, "message": "bad token"}));
        let api = client(&mock);

        let err = api.list_files().await.unwrap_err();
        assert_eq!(err.message(), "bad token");
    }

    #[tokio::test]
    async fn test_error_status_with_unparseable_body() {
        let mock = MockTransport::new();
        mock.respond_raw(500, "Internal Server Error");
        let api = client(&mock);

        let err = api.list_files().await.unwrap_err();
        assert_eq!(err.message(), "Error 500");
    }

    #[tokio::test]
    async fn test_error_status_without_message() {
        let mock = MockTransport::new();
        mock.respond_json(500, json!({"success": false}));
        let api = client(&mock);

        assert_eq!(api.list_files().await.unwrap_err().message(), "Error 500");
    }

    #[tokio::test]
    async fn test_error_status_overrides_success_flag() {
        let mock = MockTransport::new();
        mock.respond_json(401, json!({"success": true, "message": "Invalid token"}));
        let api = client(&mock);

        assert_eq!(api.list_files().await.unwrap_err().message(), "Invalid token");
    }

    #[tokio::test]
    async fn test_missing_success_field_fails() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"files": []}));
        let api = client(&mock);

        assert_eq!(api.list_files().await.unwrap_err().message(), "Error 200");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let mock = MockTransport::new();
        mock.fail(TransportError::Network("connection refused".to_string()));
        let api = client(&mock);

        let err = api.list_files().await.unwrap_err();
        assert_eq!(err.message(), "Network error: connection refused");
    }

    #[tokio::test]
    async fn test_list_files_parses_records() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!({
                "success": true,
                "message": "Found 2 file(s)",
                "files": [
                    {"id": "a", "mime": "image/png", "hash": "h1"},
                    {"id": "b", "mime": "application/pdf", "hash": "h2"}
                ]
            }),
        );
        let api = client(&mock);

        let response = api.list_files().await.unwrap();
        assert_eq!(response.files.len(), 2);
        assert_eq!(response.files[1].id, "b");
    }

    #[tokio::test]
    async fn test_list_files_filtered() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"success": true, "files": []}));
        let api = client(&mock);

        let query = ListQuery {
            mime: Some("image/png".to_string()),
            limit: Some(10),
        };
        api.list_files_filtered(&query).await.unwrap();
        assert_eq!(
            mock.last_request().unwrap().url,
            "http://drive.local/api/files/list?mime=image%2Fpng&limit=10"
        );
    }

    #[tokio::test]
    async fn test_list_files_filtered_rejects_limit_locally() {
        let mock = MockTransport::new();
        let api = client(&mock);

        let query = ListQuery {
            mime: None,
            limit: Some(5000),
        };
        assert!(api.list_files_filtered(&query).await.is_err());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_download_goes_through_json_contract() {
        let mock = MockTransport::new();
        mock.respond_raw(200, vec![0x89u8, 0x50, 0x4e, 0x47]);
        let api = client(&mock);

        let file = FileRecord::new("img1", "image/png");
        assert_eq!(api.download_file(&file).await.unwrap_err().message(), "Error 200");
        assert_eq!(
            mock.last_request().unwrap().url,
            "http://drive.local/api/files/download/img1"
        );
    }

    #[test]
    fn test_download_url_is_pure() {
        let mock = MockTransport::new();
        let api = client(&mock);
        let file = FileRecord::new("vid42", "video/mp4");
        assert_eq!(api.download_url(&file), "http://drive.local/api/files/download/vid42");
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
    }
}
