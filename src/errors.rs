//! Defines the error types used throughout the library.
//!
//! Only a few conditions are fatal: an unusable source directory, an
//! unreadable (but present) ignore file, and invalid option combinations.
//! Everything that goes wrong for a single entry during the walk is logged
//! and skipped instead of being surfaced here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A specialized `Result` type for `dircollect` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, as spelled on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Two options were given that cannot be used together.
    #[error("Cannot use {option1} and {option2} simultaneously.")]
    Conflict {
        /// The first conflicting option.
        option1: String,
        /// The second conflicting option.
        option2: String,
    },
}

/// Application-specific errors used throughout `dircollect`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Writing the rendered output failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// Invalid configuration settings or combinations.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The traversal root does not exist.
    #[error("Source directory not found: '{}'", .0.display())]
    RootNotFound(PathBuf),

    /// The traversal root exists but is not a directory.
    #[error("Source path is not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    /// No files survived the ignore file and the include/exclude filters.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = io_error_with_path(source_error, &path);

        match err {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Error::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_messages() {
        let conflict: Error = ConfigError::Conflict {
            option1: "--max-depth".to_string(),
            option2: "--no-recursive".to_string(),
        }
        .into();
        assert_eq!(
            conflict.to_string(),
            "Cannot use --max-depth and --no-recursive simultaneously."
        );

        let invalid = ConfigError::InvalidValue {
            option: "--include".to_string(),
            reason: "no patterns given".to_string(),
        };
        assert!(invalid.to_string().contains("--include"));
    }

    #[test]
    fn test_root_errors_display_path() {
        let err = Error::RootNotFound(PathBuf::from("missing/dir"));
        assert!(err.to_string().contains("missing/dir"));
        let err = Error::NotADirectory(PathBuf::from("file.txt"));
        assert!(err.to_string().contains("not a directory"));
    }
}
