//! Formatting utilities for file sizes and names.

use crate::config::DISPLAY_ID_LEN;
use crate::models::FileRecord;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count with binary multiples (e.g. "500 B", "2.00 KB", "5.00 MB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Truncated display name built from the file id ("0123abcd...").
pub fn display_name(file: &FileRecord) -> String {
    let prefix: String = file.id.chars().take(DISPLAY_ID_LEN).collect();
    format!("{}...", prefix)
}

/// Percent-encode a URI component.
///
/// Leaves the same characters unescaped as the browser's
/// `encodeURIComponent`, so query strings match what the server expects.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(500), "500 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5_242_880), "5.00 MB");
    }

    #[test]
    fn test_display_name() {
        let file = FileRecord::new("0123456789abcdef", "text/plain");
        assert_eq!(display_name(&file), "01234567...");
        let short = FileRecord::new("abc", "text/plain");
        assert_eq!(display_name(&short), "abc...");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("image/png"), "image%2Fpng");
        assert_eq!(
            encode_uri_component("text/plain; charset=utf-8"),
            "text%2Fplain%3B%20charset%3Dutf-8"
        );
        assert_eq!(encode_uri_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }
}
