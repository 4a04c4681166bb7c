// src/output/paths.rs

use crate::config::OutputConfig;
use crate::core_types::FileInfo;
use crate::output::formatter::display_path;
use log::debug;
use std::io::{self, Write};

/// Writes one selected path per line, in the order given.
///
/// The caller is responsible for ordering the files.
pub fn write_path_list(
    writer: &mut dyn Write,
    files: &[FileInfo],
    opts: &OutputConfig,
) -> io::Result<()> {
    debug!("Writing path list for {} file(s)", files.len());
    for file_info in files {
        writeln!(writer, "{}", display_path(file_info, opts))?;
    }
    writer.flush()
}
