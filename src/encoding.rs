//! Character encoding detection for fetched pages.
//!
//! Wiki pages arrive as raw bytes; the charset is declared (if at all) in a
//! meta tag near the top of the document. This module sniffs that
//! declaration and transcodes to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Charset declarations live in the document head; only this many leading
/// bytes are examined.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` and the legacy
/// `<meta http-equiv="Content-Type" content="...; charset=...">` form,
/// tried in that order.
#[allow(clippy::expect_used)]
static CHARSET_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex"),
        Regex::new(r#"(?i)<meta[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
            .expect("valid regex"),
    ]
});

/// Detect the character encoding declared by an HTML byte stream.
///
/// Falls back to UTF-8 when no declaration is found or the label is
/// unknown.
#[must_use]
pub fn detect(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    for pattern in CHARSET_PATTERNS.iter() {
        let label = pattern
            .captures(&head)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        if let Some(encoding) = label.and_then(|l| Encoding::for_label(l.as_bytes())) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string using the detected encoding.
///
/// Conversion is lossy: undecodable sequences become the Unicode
/// replacement character rather than an error.
#[must_use]
pub fn decode_to_utf8(html: &[u8]) -> String {
    let encoding = detect(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8_without_declaration() {
        assert_eq!(detect(b"<html><body>plain</body></html>"), UTF_8);
    }

    #[test]
    fn reads_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect(html).name(), "windows-1252");
    }

    #[test]
    fn reads_legacy_content_type_charset() {
        let html =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per the WHATWG spec
        assert_eq!(detect(html).name(), "windows-1252");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect(html), UTF_8);
    }

    #[test]
    fn decodes_latin1_cells_to_utf8() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><table><tr><td>Caf\xE9</td></tr></table></body></html>";
        assert!(decode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let html = b"<table><tr><td>ok \xFF\xFE</td></tr></table>";
        let decoded = decode_to_utf8(html);
        assert!(decoded.contains("ok"));
    }
}
