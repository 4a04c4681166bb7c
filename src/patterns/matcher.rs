// src/patterns/matcher.rs

use super::store::{IgnorePattern, MatchStrategy, PatternStore};
use crate::core_types::CandidatePath;
use log::trace;

/// Decides whether candidates are excluded by the active ignore patterns.
///
/// The `.git` rule is checked first and cannot be overridden by any pattern.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'p> {
    patterns: &'p [IgnorePattern],
}

impl<'p> Matcher<'p> {
    pub fn new(store: &'p PatternStore) -> Self {
        Self {
            patterns: store.patterns(),
        }
    }

    /// Returns `true` if the candidate must not be visited or emitted.
    ///
    /// # Examples
    /// ```
    /// use dircollect::core_types::CandidatePath;
    /// use dircollect::patterns::{Matcher, PatternStore};
    ///
    /// let store = PatternStore::parse("build/\n*.txt\n");
    /// let matcher = Matcher::new(&store);
    ///
    /// assert!(matcher.is_excluded(&CandidatePath::new("build", true)));
    /// assert!(!matcher.is_excluded(&CandidatePath::new("build", false)));
    /// assert!(matcher.is_excluded(&CandidatePath::new("docs/notes.txt", false)));
    /// assert!(matcher.is_excluded(&CandidatePath::new("src/.git", true)));
    /// ```
    pub fn is_excluded(&self, candidate: &CandidatePath) -> bool {
        if candidate.has_git_segment() {
            trace!("Excluded by .git rule: {}", candidate.as_str());
            return true;
        }

        let suffixed = candidate.with_dir_suffix();
        match self
            .patterns
            .iter()
            .find(|pattern| pattern_matches(pattern, candidate, &suffixed))
        {
            Some(pattern) => {
                trace!(
                    "Excluded by pattern '{}': {}",
                    pattern.as_str(),
                    candidate.as_str()
                );
                true
            }
            None => false,
        }
    }
}

/// Convenience form of [`Matcher::is_excluded`].
pub fn is_excluded(candidate: &CandidatePath, patterns: &PatternStore) -> bool {
    Matcher::new(patterns).is_excluded(candidate)
}

fn pattern_matches(pattern: &IgnorePattern, candidate: &CandidatePath, suffixed: &str) -> bool {
    // Malformed globs never match.
    let Some(glob) = pattern.glob() else {
        return false;
    };
    match pattern.strategy() {
        MatchStrategy::DirectoryScoped => {
            glob.matches(suffixed) || contains_directory(suffixed, pattern.body())
        }
        MatchStrategy::Glob => glob.matches(candidate.as_str()),
    }
}

/// Substring test of `/<dir_pattern>` within `/<path>`.
///
/// Not anchored: `build/` also matches `src/build/` and `src/build/x.rs`.
fn contains_directory(path: &str, dir_pattern: &str) -> bool {
    format!("/{}", path).contains(&format!("/{}", dir_pattern))
}
