//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI
//! (or set through [`ConfigBuilder`]), making them available to the rest of
//! the application in a structured and type-safe manner.

use crate::discovery::WalkMode;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use path_resolve::resolve_source_dir;
mod builder;
mod builder_logic;
mod parsing;
mod path_resolve;

/// Configuration options related to file discovery and filtering.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Ignore file to load. `None` means `.gitignore` inside the source directory.
    pub ignore_file: Option<PathBuf>,
    /// Flat listing or recursive walk with an optional depth limit.
    pub mode: WalkMode,
    /// Basename globs a file must match (at least one) to be selected.
    pub include_patterns: Option<Vec<String>>,
    /// Basename globs that reject a file. Takes precedence over `include_patterns`.
    pub exclude_patterns: Option<Vec<String>>,
}

impl DiscoveryConfig {
    #[doc(hidden)]
    pub fn default_for_test() -> Self {
        Self {
            ignore_file: None,
            mode: WalkMode::Recursive { max_depth: None },
            include_patterns: None,
            exclude_patterns: None,
        }
    }
}

/// Configuration options related to processing file content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingConfig {
    /// Whether to include files detected as binary/non-text.
    pub include_binary: bool,
}

/// Configuration options related to formatting the final output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// List selected paths only, without reading file contents.
    pub paths_only: bool,
    /// Print absolute paths instead of paths relative to the source directory.
    pub absolute_paths: bool,
    /// Whether to add line numbers (`N | `) to the output.
    pub line_numbers: bool,
    /// Whether to wrap paths in backticks (`) in headers and listings.
    pub backticks: bool,
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// Holds all settings needed by the discovery, processing and output stages.
#[derive(Debug, Clone)]
pub struct Config {
    /// The source directory, as given. Resolved at discovery time.
    pub input_path: PathBuf,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for the processing stage.
    pub processing: ProcessingConfig,
    /// Configuration for the output stage.
    pub output: OutputConfig,
    /// Specifies where the final output should be written.
    pub output_destination: OutputDestination,
}
