// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves the source directory to an absolute, canonicalized `PathBuf`.
///
/// # Errors
/// `Error::RootNotFound` if the path does not exist, `Error::NotADirectory`
/// if it is not a directory, `Error::Io` for any other failure.
pub fn resolve_source_dir(input_path: &Path) -> Result<PathBuf> {
    let resolved = input_path.canonicalize().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::RootNotFound(input_path.to_path_buf())
        } else {
            io_error_with_path(e, input_path)
        }
    })?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory(input_path.to_path_buf()));
    }
    Ok(resolved)
}
