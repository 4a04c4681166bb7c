//! Handles the processing stage of the `dircollect` pipeline.
//!
//! Reads the content of each selected file and drops files that look
//! binary unless `include_binary` is set.

use crate::config::ProcessingConfig;
use crate::core_types::FileInfo;
use crate::filtering::is_likely_text_from_buffer;
use log::{debug, warn};
use std::fs;

/// Reads and processes the content of the discovered files.
///
/// A file that cannot be read (removed since discovery, permission denied)
/// is logged and dropped; the remaining files keep their order.
pub fn process_files(files: Vec<FileInfo>, config: &ProcessingConfig) -> Vec<FileInfo> {
    files
        .into_iter()
        .filter_map(|file_info| process_file(file_info, config))
        .collect()
}

fn process_file(mut file_info: FileInfo, config: &ProcessingConfig) -> Option<FileInfo> {
    debug!("Processing file: {}", file_info.absolute_path.display());

    let content_bytes = match fs::read(&file_info.absolute_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(
                "Skipping unreadable file '{}': {}",
                file_info.absolute_path.display(),
                e
            );
            return None;
        }
    };

    file_info.is_binary = !is_likely_text_from_buffer(&content_bytes);
    if file_info.is_binary && !config.include_binary {
        debug!("Skipping binary file: {}", file_info.relative_display());
        return None;
    }

    file_info.processed_content = Some(String::from_utf8_lossy(&content_bytes).into_owned());
    Some(file_info)
}
