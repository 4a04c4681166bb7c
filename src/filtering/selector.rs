// src/filtering/selector.rs

use glob::Pattern;
use log::warn;

/// Include/exclude filtering on file basenames.
///
/// This is independent of the ignore file and only ever sees files that
/// the matcher has already let through.
#[derive(Debug, Clone, Default)]
pub struct FileSelector {
    include: Option<Vec<Pattern>>,
    exclude: Vec<Pattern>,
}

impl FileSelector {
    /// Compiles the include and exclude globs.
    ///
    /// Malformed globs are logged and dropped, so they never match. An
    /// include list made up only of malformed globs therefore accepts nothing.
    pub fn new(include: Option<&[String]>, exclude: Option<&[String]>) -> Self {
        let include = include
            .filter(|patterns| !patterns.is_empty())
            .map(|patterns| compile_globs(patterns, "include"));
        let exclude = exclude
            .map(|patterns| compile_globs(patterns, "exclude"))
            .unwrap_or_default();
        Self { include, exclude }
    }

    /// Whether a file with this basename should be kept.
    ///
    /// # Examples
    /// ```
    /// use dircollect::filtering::FileSelector;
    ///
    /// let include = vec!["*.py".to_string()];
    /// let exclude = vec!["test_*".to_string()];
    /// let selector = FileSelector::new(Some(include.as_slice()), Some(exclude.as_slice()));
    ///
    /// assert!(selector.accepts("a.py"));
    /// assert!(!selector.accepts("test_a.py"));
    /// assert!(!selector.accepts("a.txt"));
    /// ```
    pub fn accepts(&self, basename: &str) -> bool {
        if self.exclude.iter().any(|p| p.matches(basename)) {
            return false;
        }
        match &self.include {
            Some(include) => include.iter().any(|p| p.matches(basename)),
            None => true,
        }
    }
}

/// One-shot form of [`FileSelector::accepts`].
pub fn accepts(basename: &str, include: Option<&[String]>, exclude: Option<&[String]>) -> bool {
    FileSelector::new(include, exclude).accepts(basename)
}

fn compile_globs(patterns: &[String], kind: &str) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(glob) => Some(glob),
            Err(e) => {
                warn!("Invalid {} glob pattern '{}': {}", kind, p, e);
                None
            }
        })
        .collect()
}
