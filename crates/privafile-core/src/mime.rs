//! Display helpers keyed on MIME type.
//!
//! Icon names match the lucide icon set; colors and badge classes are
//! utility class names understood by the stylesheet. Rules are checked in
//! order and the first match wins.

/// Icon name for a MIME type (`"File"` when nothing matches).
pub fn file_icon(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "Image"
    } else if mime.starts_with("video/") {
        "Film"
    } else if mime.starts_with("audio/") {
        "Music"
    } else if mime.contains("pdf") || mime.contains("document") {
        "FileText"
    } else {
        "File"
    }
}

/// Text color class for a MIME type.
pub fn file_color(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "text-purple-500"
    } else if mime.starts_with("video/") {
        "text-red-500"
    } else if mime.starts_with("audio/") {
        "text-green-500"
    } else if mime.contains("pdf") {
        "text-red-600"
    } else {
        "text-gray-500"
    }
}

/// Short uppercase label: the subtype of the MIME type (`"image/png"` -> `"PNG"`).
pub fn mime_label(mime: &str) -> String {
    mime.rsplit('/').next().unwrap_or(mime).to_uppercase()
}

/// Badge class pair for a MIME type.
pub fn mime_badge_class(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "bg-purple-100 text-purple-700"
    } else if mime.starts_with("video/") {
        "bg-red-100 text-red-700"
    } else if mime.starts_with("audio/") {
        "bg-green-100 text-green-700"
    } else if mime.contains("pdf") {
        "bg-orange-100 text-orange-700"
    } else {
        "bg-gray-100 text-gray-700"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_icon() {
        assert_eq!(file_icon("image/jpeg"), "Image");
        assert_eq!(file_icon("video/webm"), "Film");
        assert_eq!(file_icon("audio/mpeg"), "Music");
        assert_eq!(file_icon("application/pdf"), "FileText");
        assert_eq!(file_icon("application/msword-document"), "FileText");
        assert_eq!(file_icon("application/x-unknown"), "File");
    }

    #[test]
    fn test_unrecognized_mime_uses_defaults() {
        let mime = "chemical/x-pdb";
        assert_eq!(file_icon(mime), "File");
        assert_eq!(file_color(mime), "text-gray-500");
        assert_eq!(mime_badge_class(mime), "bg-gray-100 text-gray-700");
    }

    #[test]
    fn test_pdf_color_and_badge() {
        assert_eq!(file_color("application/pdf"), "text-red-600");
        assert_eq!(mime_badge_class("application/pdf"), "bg-orange-100 text-orange-700");
        // document without pdf keeps the gray defaults
        assert_eq!(file_color("application/vnd.oasis.opendocument.text"), "text-gray-500");
    }

    #[test]
    fn test_mime_label() {
        assert_eq!(mime_label("image/png"), "PNG");
        assert_eq!(mime_label("application/vnd.ms-excel"), "VND.MS-EXCEL");
        assert_eq!(mime_label("binary"), "BINARY");
        assert_eq!(mime_label(""), "");
    }
}
