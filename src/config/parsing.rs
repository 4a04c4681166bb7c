// src/config/parsing.rs

use crate::constants::PATTERN_LIST_SEPARATOR;

/// Splits comma-separated glob lists into individual patterns.
///
/// Each argument may itself hold several patterns (`"*.py,*.rs"`); entries
/// are trimmed and empty ones dropped. Returns `None` when nothing remains.
pub(super) fn split_pattern_list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    let patterns: Vec<String> = values?
        .iter()
        .flat_map(|value| value.split(PATTERN_LIST_SEPARATOR))
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    if patterns.is_empty() {
        None
    } else {
        Some(patterns)
    }
}
