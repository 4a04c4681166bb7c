// src/config/builder.rs

use super::{
    builder_logic::{determine_output_destination, determine_walk_mode, validate_builder_options},
    parsing::split_pattern_list,
    Config, DiscoveryConfig, OutputConfig, ProcessingConfig,
};
use crate::cli::Cli;
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// Every setter is optional; unset options take the same defaults as the
/// command line.
///
/// # Examples
///
/// ```
/// use dircollect::config::ConfigBuilder;
/// use dircollect::discovery::WalkMode;
///
/// let config = ConfigBuilder::new()
///     .input_path("src")
///     .max_depth(2)
///     .include(vec!["*.rs,*.toml".to_string()])
///     .paths_only(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.discovery.mode, WalkMode::Recursive { max_depth: Some(2) });
/// assert_eq!(
///     config.discovery.include_patterns,
///     Some(vec!["*.rs".to_string(), "*.toml".to_string()])
/// );
/// assert!(config.output.paths_only);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) input_path: Option<String>,
    pub(super) ignore_file: Option<String>,
    pub(super) recursive: Option<bool>,
    pub(super) max_depth: Option<usize>,
    pub(super) include: Option<Vec<String>>,
    pub(super) exclude: Option<Vec<String>>,
    pub(super) include_binary: Option<bool>,
    pub(super) paths_only: Option<bool>,
    pub(super) absolute_paths: Option<bool>,
    pub(super) line_numbers: Option<bool>,
    pub(super) backticks: Option<bool>,
    pub(super) output_file: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.source),
            ignore_file: cli.ignore_file,
            recursive: Some(!cli.no_recursive),
            max_depth: cli.max_depth,
            include: cli.include,
            exclude: cli.exclude,
            include_binary: Some(cli.include_binary),
            paths_only: Some(cli.paths_only),
            absolute_paths: Some(cli.absolute),
            line_numbers: Some(cli.line_numbers),
            backticks: Some(cli.backticks),
            output_file: cli.output_file,
        }
    }

    /// Sets the source directory to walk. Defaults to `.`.
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the ignore file. Defaults to `.gitignore` inside the source directory.
    pub fn ignore_file(mut self, path: impl Into<String>) -> Self {
        self.ignore_file = Some(path.into());
        self
    }

    /// Whether to walk subdirectories. Defaults to `true`.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Limits recursion: directories at this depth are not descended into.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Basename globs to include; each entry may be a comma-separated list.
    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.include = Some(patterns);
        self
    }

    /// Basename globs to exclude; each entry may be a comma-separated list.
    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = Some(patterns);
        self
    }

    pub fn include_binary(mut self, include: bool) -> Self {
        self.include_binary = Some(include);
        self
    }

    pub fn paths_only(mut self, paths_only: bool) -> Self {
        self.paths_only = Some(paths_only);
        self
    }

    pub fn absolute_paths(mut self, absolute: bool) -> Self {
        self.absolute_paths = Some(absolute);
        self
    }

    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = Some(line_numbers);
        self
    }

    pub fn backticks(mut self, backticks: bool) -> Self {
        self.backticks = Some(backticks);
        self
    }

    /// Writes output to this file instead of stdout.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Validates the options and builds the `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for conflicting options. The source path is
    /// not checked here; that happens when discovery resolves it.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        Ok(Config {
            input_path: PathBuf::from(self.input_path.unwrap_or_else(|| ".".to_string())),
            discovery: DiscoveryConfig {
                ignore_file: self.ignore_file.map(PathBuf::from),
                mode: determine_walk_mode(self.recursive, self.max_depth),
                include_patterns: split_pattern_list(self.include),
                exclude_patterns: split_pattern_list(self.exclude),
            },
            processing: ProcessingConfig {
                include_binary: self.include_binary.unwrap_or(false),
            },
            output: OutputConfig {
                paths_only: self.paths_only.unwrap_or(false),
                absolute_paths: self.absolute_paths.unwrap_or(false),
                line_numbers: self.line_numbers.unwrap_or(false),
                backticks: self.backticks.unwrap_or(false),
            },
            output_destination: determine_output_destination(self.output_file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputDestination;
    use crate::discovery::WalkMode;
    use crate::errors::{ConfigError, Error};
    use clap::Parser;

    #[test]
    fn test_basic_config_creation() -> anyhow::Result<()> {
        let config = ConfigBuilder::new().build()?;
        assert_eq!(config.input_path, PathBuf::from("."));
        assert_eq!(config.output_destination, OutputDestination::Stdout);
        assert_eq!(config.discovery.mode, WalkMode::Recursive { max_depth: None });
        assert!(config.discovery.ignore_file.is_none());
        assert!(!config.processing.include_binary);
        assert!(!config.output.paths_only);
        Ok(())
    }

    #[test]
    fn test_from_cli() -> anyhow::Result<()> {
        let cli = Cli::parse_from([
            "dircollect",
            "proj",
            "-g",
            "proj/.collectignore",
            "-d",
            "1",
            "-I",
            "*.py",
            "-E",
            "test_*,conftest.py",
            "-P",
            "-o",
            "out.txt",
        ]);
        let config = ConfigBuilder::from_cli(cli).build()?;
        assert_eq!(config.input_path, PathBuf::from("proj"));
        assert_eq!(
            config.discovery.ignore_file,
            Some(PathBuf::from("proj/.collectignore"))
        );
        assert_eq!(config.discovery.mode, WalkMode::Recursive { max_depth: Some(1) });
        assert_eq!(config.discovery.include_patterns, Some(vec!["*.py".to_string()]));
        assert_eq!(
            config.discovery.exclude_patterns,
            Some(vec!["test_*".to_string(), "conftest.py".to_string()])
        );
        assert!(config.output.paths_only);
        assert_eq!(
            config.output_destination,
            OutputDestination::File(PathBuf::from("out.txt"))
        );
        Ok(())
    }

    #[test]
    fn test_no_recursive_gives_flat_mode() -> anyhow::Result<()> {
        let config = ConfigBuilder::new().recursive(false).build()?;
        assert_eq!(config.discovery.mode, WalkMode::Flat);
        Ok(())
    }

    #[test]
    fn test_max_depth_conflicts_with_flat_mode() {
        let result = ConfigBuilder::new().recursive(false).max_depth(2).build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::Conflict { .. }))
        ));
    }

    #[test]
    fn test_line_numbers_conflict_with_paths_only() {
        let result = ConfigBuilder::new()
            .paths_only(true)
            .line_numbers(true)
            .build();
        assert!(result.is_err());
    }
}
