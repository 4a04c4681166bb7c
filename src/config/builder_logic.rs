// src/config/builder_logic.rs

use super::ConfigBuilder;
use crate::config::OutputDestination;
use crate::discovery::WalkMode;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if builder.max_depth.is_some() && !builder.recursive.unwrap_or(true) {
        return Err(ConfigError::Conflict {
            option1: "--max-depth".to_string(),
            option2: "--no-recursive".to_string(),
        }
        .into());
    }
    if builder.line_numbers.unwrap_or(false) && builder.paths_only.unwrap_or(false) {
        return Err(ConfigError::Conflict {
            option1: "--line-numbers".to_string(),
            option2: "--paths-only".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Determines the traversal mode from the recursion flag and depth limit.
pub(super) fn determine_walk_mode(recursive: Option<bool>, max_depth: Option<usize>) -> WalkMode {
    if recursive.unwrap_or(true) {
        WalkMode::Recursive { max_depth }
    } else {
        WalkMode::Flat
    }
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(output_file: Option<String>) -> OutputDestination {
    match output_file {
        Some(file_path_str) => OutputDestination::File(PathBuf::from(file_path_str)),
        None => OutputDestination::Stdout,
    }
}
