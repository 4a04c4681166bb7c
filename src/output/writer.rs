// src/output/writer.rs

//! Manages the output destination (stdout or file).

use crate::config::{Config, OutputDestination};
use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the appropriate output writer based on the `OutputDestination` in the config.
///
/// # Errors
/// Returns an error if the output file cannot be created.
pub fn setup_output_writer(config: &Config) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match &config.output_destination {
        OutputDestination::Stdout => Box::new(BufWriter::new(io::stdout().lock())),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file))
        }
    };
    Ok(writer)
}
