// src/output/mod.rs

use crate::config::OutputConfig;
use crate::core_types::FileInfo;
use log::debug;
use std::io::{self, Write};

pub mod file_block;
pub mod formatter;
pub mod paths;
pub mod writer;

/// Writes the Markdown output: one file block per file, separated by a blank line.
///
/// Files are written in the order given.
pub fn generate_output(
    files: &[FileInfo],
    opts: &OutputConfig,
    writer: &mut dyn Write,
) -> io::Result<()> {
    debug!("Starting output generation for {} file(s)...", files.len());

    for (index, file_info) in files.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        file_block::write_file_block(writer, file_info, opts)?;
    }

    writer.flush()
}
