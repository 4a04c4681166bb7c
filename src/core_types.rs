//! Defines core data structures used throughout the application pipeline.
//!
//! `CandidatePath` is what the matcher sees during a walk; `FileInfo` is what
//! survives the walk and flows on to processing and output.

use crate::constants::GIT_DIR_NAME;
use std::path::{Component, Path, PathBuf};

/// A path under evaluation during traversal, relative to the traversal root.
///
/// The path is stored in forward-slash form regardless of platform. Two
/// candidates are equal when their normalized paths are equal; the
/// directory flag does not take part in equality.
///
/// # Examples
///
/// ```
/// use dircollect::core_types::CandidatePath;
/// use std::path::Path;
///
/// let dir = CandidatePath::from_relative(Path::new("src/build"), true);
/// assert_eq!(dir.as_str(), "src/build");
/// assert_eq!(dir.depth(), 1);
/// assert_eq!(dir.with_dir_suffix(), "src/build/");
/// assert_eq!(dir.file_name(), "build");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct CandidatePath {
    relative: String,
    is_directory: bool,
}

impl CandidatePath {
    /// Creates a candidate from an already slash-separated relative path.
    pub fn new(relative: impl Into<String>, is_directory: bool) -> Self {
        let relative = relative.into().replace('\\', "/");
        let relative = relative.trim_end_matches('/').to_string();
        Self {
            relative,
            is_directory,
        }
    }

    /// Creates a candidate from a platform path relative to the walk root.
    pub fn from_relative(path: &Path, is_directory: bool) -> Self {
        let relative = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        Self {
            relative,
            is_directory,
        }
    }

    /// The normalized relative path.
    pub fn as_str(&self) -> &str {
        &self.relative
    }

    /// The relative path with a trailing `/` when the candidate is a directory.
    pub fn with_dir_suffix(&self) -> String {
        if self.is_directory {
            format!("{}/", self.relative)
        } else {
            self.relative.clone()
        }
    }

    /// The last path segment.
    pub fn file_name(&self) -> &str {
        self.relative
            .rsplit('/')
            .next()
            .unwrap_or(self.relative.as_str())
    }

    /// Number of separators between the traversal root and this candidate.
    /// Entries directly under the root have depth 0.
    pub fn depth(&self) -> usize {
        self.relative.matches('/').count()
    }

    /// Whether any segment of the path is the version-control directory.
    pub fn has_git_segment(&self) -> bool {
        self.relative.split('/').any(|segment| segment == GIT_DIR_NAME)
    }
}

impl PartialEq for CandidatePath {
    fn eq(&self, other: &Self) -> bool {
        self.relative == other.relative
    }
}

impl std::hash::Hash for CandidatePath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.relative.hash(state);
    }
}

/// Represents a file selected during the walk, potentially with processed content.
///
/// # Examples
///
/// ```
/// use dircollect::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     absolute_path: PathBuf::from("/path/to/project/src/main.rs"),
///     relative_path: PathBuf::from("src/main.rs"),
///     size: 12,
///     ..Default::default()
/// };
///
/// assert!(file_info.processed_content.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the traversal root.
    pub relative_path: PathBuf,
    /// The size of the file in bytes, obtained from metadata.
    pub size: u64,
    /// The file content as read during processing; `None` until then,
    /// and for paths-only runs. Binary content is converted lossily.
    pub processed_content: Option<String>,
    /// Set during processing if the file looks binary.
    pub is_binary: bool,
}

impl FileInfo {
    /// The relative path in forward-slash form.
    pub fn relative_display(&self) -> String {
        self.relative_path.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_equality_ignores_kind() {
        let a = CandidatePath::new("src/lib.rs", false);
        let b = CandidatePath::new("src/lib.rs", true);
        assert_eq!(a, b);
        assert_ne!(a, CandidatePath::new("src/main.rs", false));
    }

    #[test]
    fn test_candidate_normalizes_separators() {
        let c = CandidatePath::new("a\\b\\c.txt", false);
        assert_eq!(c.as_str(), "a/b/c.txt");
        assert_eq!(c.depth(), 2);

        let d = CandidatePath::new("build/", true);
        assert_eq!(d.as_str(), "build");
        assert_eq!(d.with_dir_suffix(), "build/");
    }

    #[test]
    fn test_candidate_from_relative_path() {
        let c = CandidatePath::from_relative(Path::new("./dir/sub/file.py"), false);
        assert_eq!(c.as_str(), "dir/sub/file.py");
        assert_eq!(c.file_name(), "file.py");
        assert_eq!(c.with_dir_suffix(), "dir/sub/file.py");
    }

    #[test]
    fn test_root_entries_have_depth_zero() {
        assert_eq!(CandidatePath::new("a.py", false).depth(), 0);
        assert_eq!(CandidatePath::new("dir", true).depth(), 0);
        assert_eq!(CandidatePath::new("dir/c.py", false).depth(), 1);
    }

    #[test]
    fn test_git_segment_detection() {
        assert!(CandidatePath::new(".git", true).has_git_segment());
        assert!(CandidatePath::new("dir/.git", true).has_git_segment());
        assert!(CandidatePath::new("dir/.git/HEAD", false).has_git_segment());
        assert!(!CandidatePath::new(".github/workflows", true).has_git_segment());
        assert!(!CandidatePath::new("my.git", true).has_git_segment());
    }
}
