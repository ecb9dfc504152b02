//! Error types for the client.
//!
//! - [`RequestError`] - the single error surfaced for any API-level failure
//! - [`TransportError`] - failures below HTTP (no window, network, body or file read)
//! - [`StorageError`] - session persistence failures

use thiserror::Error;

/// Failure of an API call.
///
/// Network failures, non-2xx statuses, unparseable bodies and
/// `success: false` responses all collapse into this one type; only the
/// message text tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error derived from an HTTP status when the server sent no message.
    pub fn from_status(status: u16) -> Self {
        Self::new(format!("Error {}", status))
    }

    /// Server-supplied message if present and non-empty, else status-derived.
    pub fn from_response(status: u16, message: Option<&str>) -> Self {
        match message {
            Some(msg) if !msg.is_empty() => Self::new(msg),
            _ => Self::from_status(status),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        Self::new(err.to_string())
    }
}

/// Transport-level failures raised before an HTTP status is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Failed to read a local file before sending it
    #[error("Failed to read file: {0}")]
    FileReadFailed(String),
}

/// Session persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage backend not available.
    #[error("storage not available")]
    Unavailable,
    /// Failed to write a key.
    #[error("failed to save `{0}`")]
    WriteFailed(String),
    /// Failed to remove a key.
    #[error("failed to remove `{0}`")]
    RemoveFailed(String),
}
