//! Client configuration constants.
//!
//! Endpoint paths and storage keys must stay in sync with the privafile
//! server and with values already persisted by earlier client versions.

// =============================================================================
// Server Endpoints
// =============================================================================

/// Server URL used until the user logs in with a different one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5830";

/// File listing endpoint.
pub const LIST_ENDPOINT: &str = "/api/files/list";

/// Download endpoint prefix (file id is appended).
pub const DOWNLOAD_ENDPOINT: &str = "/api/files/download";

/// Upload endpoint (expects a `mime` query parameter).
pub const UPLOAD_ENDPOINT: &str = "/api/files/upload";

/// Delete endpoint prefix (file id is appended).
pub const DELETE_ENDPOINT: &str = "/api/files/delete";

/// Listing limits accepted by the server.
pub mod list_limits {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1000;
}

// =============================================================================
// Uploads
// =============================================================================

/// MIME type sent when the file does not declare one.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Message shown after an upload when the server sends none.
pub const DEFAULT_UPLOAD_MESSAGE: &str = "File uploaded successfully";

// =============================================================================
// Persistence
// =============================================================================

/// Persisted storage keys.
pub mod storage_keys {
    /// Bearer token.
    pub const TOKEN: &str = "token";
    /// Server base URL.
    pub const SERVER_URL: &str = "serverUrl";
}

// =============================================================================
// Display
// =============================================================================

/// Number of id characters shown before the ellipsis in file names.
pub const DISPLAY_ID_LEN: usize = 8;
