//! `dircollect` is a library and command-line tool for gathering the files of
//! a directory tree into a single text payload, such as the context for a
//! Large Language Model prompt.
//!
//! The heart of the crate is the ignore-pattern matcher and the pruned
//! directory walk that decide which files are visible at all:
//!
//! 1.  **Patterns**: ignore-file lines are loaded into a [`patterns::PatternStore`].
//! 2.  **Match**: a [`patterns::Matcher`] excludes candidates by glob, prunes
//!     directory-scoped patterns, and always drops `.git`.
//! 3.  **Walk**: a [`discovery::Walker`] lists the tree flat or recursively
//!     (optionally depth-limited), never entering an excluded directory.
//! 4.  **Select**: a [`filtering::FileSelector`] applies `--include` /
//!     `--exclude` globs to file names.
//!
//! The selected files can then be read ([`process`]) and rendered as Markdown
//! ([`format`]) or listed as plain paths ([`format_paths`]).
//!
//! # Example: Library Usage
//!
//! ```
//! use dircollect::{discover, format, process, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join(".gitignore"), "*.log\n").unwrap();
//! fs::write(temp_dir.path().join("main.py"), "print('hi')").unwrap();
//! fs::write(temp_dir.path().join("debug.log"), "noise").unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path().to_str().unwrap())
//!     .include(vec!["*.py".to_string()])
//!     .build()
//!     .unwrap();
//!
//! // 3. Discover, read and format.
//! let files = discover(&config).unwrap();
//! let files = process(files, &config);
//! let mut output = Vec::new();
//! format(&files, &config, &mut output).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "## File: main.py\n```py\nprint('hi')\n```\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod patterns;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{CandidatePath, FileInfo};
pub use errors::{Error, Result};

use std::io::Write;

/// Discovers the files selected by the configuration.
///
/// Resolves the source directory, loads the ignore file, walks the tree and
/// applies the include/exclude filters. The result is sorted by relative
/// path; file contents are not read.
///
/// # Errors
/// Fails if the source directory does not exist or is not a directory, or
/// if an existing ignore file cannot be read.
pub fn discover(config: &Config) -> Result<Vec<FileInfo>> {
    discovery::discover_files(&config.discovery, &config.input_path)
}

/// Reads the content of discovered files, dropping binary and unreadable ones.
pub fn process(files: Vec<FileInfo>, config: &Config) -> Vec<FileInfo> {
    processing::process_files(files, &config.processing)
}

/// Formats processed files as Markdown code blocks.
pub fn format(files: &[FileInfo], config: &Config, writer: &mut dyn Write) -> Result<()> {
    output::generate_output(files, &config.output, writer).map_err(Error::Output)
}

/// Writes the paths of the given files, one per line.
pub fn format_paths(files: &[FileInfo], config: &Config, writer: &mut dyn Write) -> Result<()> {
    output::paths::write_path_list(writer, files, &config.output).map_err(Error::Output)
}

/// Executes the complete pipeline: discover, then either list paths or
/// read and format contents, writing to the configured destination.
///
/// # Errors
/// Returns `Error::NoFilesFound` if nothing is left to output, and
/// propagates fatal errors from the individual stages.
pub fn run(config: &Config) -> Result<()> {
    let discovered = discover(config)?;
    if discovered.is_empty() {
        return Err(Error::NoFilesFound);
    }

    if config.output.paths_only {
        let mut writer = output::writer::setup_output_writer(config)?;
        return format_paths(&discovered, config, &mut writer);
    }

    let processed = process(discovered, config);
    if processed.is_empty() {
        return Err(Error::NoFilesFound);
    }
    let mut writer = output::writer::setup_output_writer(config)?;
    format(&processed, config, &mut writer)
}
