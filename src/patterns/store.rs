// src/patterns/store.rs

use crate::constants::{ANCHOR_PREFIX, COMMENT_PREFIX};
use crate::errors::{io_error_with_path, Result};
use glob::Pattern;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// How an ignore pattern is tested against a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The pattern ends in `/`. It matches a directory-suffixed candidate by
    /// glob, or any candidate whose path contains `/<pattern>`.
    DirectoryScoped,
    /// The pattern is globbed against the candidate's relative path.
    Glob,
}

/// A single normalized line from an ignore file.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    text: String,
    body: String,
    glob: Option<Pattern>,
    is_directory_pattern: bool,
    is_root_anchored: bool,
}

impl IgnorePattern {
    /// Builds a pattern from one (already trimmed) ignore-file line.
    ///
    /// A malformed glob is kept but never matches.
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let is_root_anchored = text.starts_with(ANCHOR_PREFIX);
        let is_directory_pattern = text.ends_with('/');
        let body = text
            .strip_prefix(ANCHOR_PREFIX)
            .unwrap_or(&text)
            .to_string();

        let glob = match Pattern::new(&body) {
            Ok(glob) => Some(glob),
            Err(e) => {
                warn!("Invalid ignore glob pattern '{}': {}", text, e);
                None
            }
        };

        Self {
            text,
            body,
            glob,
            is_directory_pattern,
            is_root_anchored,
        }
    }

    /// The pattern as written in the ignore file.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The pattern with the anchor prefix removed; this is what gets matched.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The compiled glob, or `None` when the pattern is malformed.
    pub fn glob(&self) -> Option<&Pattern> {
        self.glob.as_ref()
    }

    /// Whether the pattern ends in a path separator.
    pub fn is_directory_pattern(&self) -> bool {
        self.is_directory_pattern
    }

    /// Whether the pattern starts with `./`.
    pub fn is_root_anchored(&self) -> bool {
        self.is_root_anchored
    }

    /// Whether the glob compiled.
    pub fn is_valid(&self) -> bool {
        self.glob.is_some()
    }

    pub fn strategy(&self) -> MatchStrategy {
        if self.is_directory_pattern {
            MatchStrategy::DirectoryScoped
        } else {
            MatchStrategy::Glob
        }
    }
}

/// The set of ignore patterns active for one invocation.
///
/// Loaded once and read-only afterwards, so a single store can back any
/// number of walks.
#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    patterns: Vec<IgnorePattern>,
    source_missing: bool,
}

impl PatternStore {
    /// Loads patterns from an ignore file.
    ///
    /// A missing file is not an error: it yields an empty store for which
    /// [`PatternStore::source_missing`] returns `true`, leaving it to the
    /// caller to decide whether to warn.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file exists but cannot be read as UTF-8 text.
    ///
    /// # Examples
    /// ```
    /// use dircollect::patterns::PatternStore;
    /// use std::path::Path;
    /// # fn main() -> dircollect::Result<()> {
    /// let store = PatternStore::load(Path::new("/definitely/not/here/.gitignore"))?;
    /// assert!(store.is_empty());
    /// assert!(store.source_missing());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let store = Self::parse(&text);
                debug!(
                    "Loaded {} ignore pattern(s) from {}",
                    store.len(),
                    path.display()
                );
                Ok(store)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Ignore file not found: {}", path.display());
                Ok(Self {
                    patterns: Vec::new(),
                    source_missing: true,
                })
            }
            Err(e) => Err(io_error_with_path(e, path)),
        }
    }

    /// Parses ignore-file text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .map(IgnorePattern::new)
            .collect();
        Self {
            patterns,
            source_missing: false,
        }
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the store came from an ignore file that did not exist.
    pub fn source_missing(&self) -> bool {
        self.source_missing
    }
}
