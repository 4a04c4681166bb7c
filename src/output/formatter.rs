// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use crate::config::OutputConfig;
use crate::core_types::FileInfo;
use std::path::Path;

/// Formats a path for display in headers or listings.
///
/// Separators are normalized to `/`, and the path is wrapped in backticks
/// if configured.
///
/// # Examples
/// ```
/// use dircollect::config::OutputConfig;
/// use dircollect::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// let plain = OutputConfig::default();
/// let ticks = OutputConfig { backticks: true, ..Default::default() };
/// let path = Path::new("src/main.rs");
///
/// assert_eq!(format_path_for_display(path, &plain), "src/main.rs");
/// assert_eq!(format_path_for_display(path, &ticks), "`src/main.rs`");
/// ```
pub fn format_path_for_display(path: &Path, opts: &OutputConfig) -> String {
    let path_str = path.to_string_lossy().replace('\\', "/");
    if opts.backticks {
        format!("`{}`", path_str)
    } else {
        path_str
    }
}

/// The path of a file as it should appear in the output: absolute or
/// relative to the source directory, depending on `absolute_paths`.
pub fn display_path(file_info: &FileInfo, opts: &OutputConfig) -> String {
    let path = if opts.absolute_paths {
        &file_info.absolute_path
    } else {
        &file_info.relative_path
    };
    format_path_for_display(path, opts)
}
