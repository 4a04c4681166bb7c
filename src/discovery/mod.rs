//! Discovers the files to collect: ignore patterns, pruned walk, then include/exclude filters.
use crate::config::{resolve_source_dir, DiscoveryConfig};
use crate::constants::DEFAULT_IGNORE_FILE;
use crate::core_types::FileInfo;
use crate::errors::Result;
use crate::filtering::FileSelector;
use crate::patterns::{Matcher, PatternStore};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use tracing::instrument;

mod walker;

pub use walker::{WalkMode, Walker};

/// Loads the ignore patterns configured for a run.
///
/// Falls back to `.gitignore` inside `source_dir`. A missing file yields an
/// empty pattern set; it is only warned about when it was named explicitly.
///
/// # Errors
/// Returns `Error::Io` if the ignore file exists but cannot be read.
pub fn load_ignore_patterns(config: &DiscoveryConfig, source_dir: &Path) -> Result<PatternStore> {
    let (path, explicit) = match &config.ignore_file {
        Some(path) => (path.clone(), true),
        None => (source_dir.join(DEFAULT_IGNORE_FILE), false),
    };
    let store = PatternStore::load(&path)?;
    if store.source_missing() {
        if explicit {
            warn!(
                "Ignore file '{}' not found; no ignore patterns will be applied.",
                path.display()
            );
        } else {
            debug!("No {} in source directory.", DEFAULT_IGNORE_FILE);
        }
    }
    Ok(store)
}

/// Discovers files under `input_path` according to `config`.
///
/// The source directory is resolved first; the returned files are sorted by
/// relative path. File contents are not read at this stage.
///
/// # Errors
/// Fails if the source directory is missing or not a directory, or if an
/// existing ignore file cannot be read.
///
/// # Examples
///
/// ```
/// use dircollect::config::DiscoveryConfig;
/// use dircollect::discovery::discover_files;
/// # use std::fs;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join(".gitignore"), "*.log\n")?;
/// fs::write(temp.path().join("main.rs"), "fn main() {}")?;
/// fs::write(temp.path().join("run.log"), "noise")?;
///
/// let files = discover_files(&DiscoveryConfig::default_for_test(), temp.path())?;
/// let names: Vec<String> = files.iter().map(|f| f.relative_display()).collect();
/// assert_eq!(names, vec![".gitignore", "main.rs"]);
/// # Ok(())
/// # }
/// ```
#[instrument(level = "debug", skip(config), fields(input = %input_path.display()))]
pub fn discover_files(config: &DiscoveryConfig, input_path: &Path) -> Result<Vec<FileInfo>> {
    let source_dir: PathBuf = resolve_source_dir(input_path)?;
    let patterns = load_ignore_patterns(config, &source_dir)?;
    discover_with_patterns(config, &source_dir, &patterns)
}

/// Discovers files using an already loaded pattern set.
///
/// The pattern set is only read, so one store can serve several walks.
pub fn discover_with_patterns(
    config: &DiscoveryConfig,
    source_dir: &Path,
    patterns: &PatternStore,
) -> Result<Vec<FileInfo>> {
    let selector = FileSelector::new(
        config.include_patterns.as_deref(),
        config.exclude_patterns.as_deref(),
    );
    let walker = Walker::new(source_dir, config.mode, Matcher::new(patterns))?;

    let mut files = walker.walk(|candidate| selector.accepts(candidate.file_name()))?;
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    debug!(
        "Discovery complete: {} file(s) selected under {}",
        files.len(),
        source_dir.display()
    );
    Ok(files)
}
