use serde::{Deserialize, Serialize};

/// Metadata for one file stored on the server.
///
/// The server currently sends `id`, `mime` and `hash`; `size` and `name`
/// are accepted when present so newer servers can enrich the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileRecord {
    /// Server-assigned identifier (used in download/delete paths)
    pub id: String,
    /// Declared MIME type
    pub mime: String,
    /// Content hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FileRecord {
    pub fn new(id: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mime: mime.into(),
            ..Default::default()
        }
    }

    pub fn category(&self) -> FileCategory {
        FileCategory::from_mime(&self.mime)
    }
}

/// Coarse file category derived from a MIME type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Document,
    Other,
}

impl FileCategory {
    /// Classify a MIME type.
    ///
    /// Media prefixes are checked before the document rule, so
    /// `"image/pdf"` is an image.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime.contains("pdf") || mime.contains("document") {
            Self::Document
        } else {
            Self::Other
        }
    }
}
