// src/filtering/text_detection.rs

use content_inspector::ContentType;
use std::str;

/// Checks if a byte buffer is likely text-based.
///
/// Uses `content_inspector` for the heuristic check and then verifies UTF-8
/// validity, so text with stray invalid bytes is treated as binary.
///
/// # Examples
/// ```
/// use dircollect::filtering::is_likely_text_from_buffer;
///
/// assert!(is_likely_text_from_buffer(b"This is valid UTF-8 text."));
/// assert!(!is_likely_text_from_buffer(b"This contains a null byte \0."));
/// assert!(!is_likely_text_from_buffer(&[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f]));
/// ```
pub fn is_likely_text_from_buffer(buffer: &[u8]) -> bool {
    match content_inspector::inspect(buffer) {
        ContentType::UTF_8_BOM => true,
        ContentType::UTF_8 => str::from_utf8(buffer).is_ok(),
        _ => false,
    }
}
