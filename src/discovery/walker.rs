// src/discovery/walker.rs

use crate::core_types::{CandidatePath, FileInfo};
use crate::errors::{io_error_with_path, Error, Result};
use crate::patterns::Matcher;
use log::{debug, trace, warn};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// How far the walker descends below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Only the direct children of the root; directories are never entered.
    Flat,
    /// Depth-first walk. With `max_depth = Some(n)`, directories whose depth
    /// (separator count) is `n` or more are not entered, so every emitted
    /// file has depth `<= n`.
    Recursive { max_depth: Option<usize> },
}

impl Default for WalkMode {
    fn default() -> Self {
        WalkMode::Recursive { max_depth: None }
    }
}

impl WalkMode {
    /// Whether a child directory at `depth` may be entered.
    fn descends_into(self, depth: usize) -> bool {
        match self {
            WalkMode::Flat => false,
            WalkMode::Recursive { max_depth: None } => true,
            WalkMode::Recursive {
                max_depth: Some(limit),
            } => depth < limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File { size: u64 },
    /// Sockets, fifos, symlinks to directories: never emitted or entered.
    Other,
}

/// A directory entry that survived the matcher.
#[derive(Debug)]
struct Child {
    path: PathBuf,
    candidate: CandidatePath,
    kind: EntryKind,
}

/// Traverses a directory tree, pruning excluded directories before descent.
///
/// Children of each directory are read into a sorted snapshot and filtered
/// through the [`Matcher`] first; only the survivors are emitted or entered.
/// An excluded directory is therefore never opened.
#[derive(Debug)]
pub struct Walker<'a> {
    root: PathBuf,
    mode: WalkMode,
    matcher: Matcher<'a>,
}

impl<'a> Walker<'a> {
    /// Creates a walker rooted at `root`.
    ///
    /// # Errors
    /// `Error::RootNotFound` if `root` does not exist, `Error::NotADirectory`
    /// if it is not a directory.
    pub fn new(root: impl Into<PathBuf>, mode: WalkMode, matcher: Matcher<'a>) -> Result<Self> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(md) if md.is_dir() => {}
            Ok(_) => return Err(Error::NotADirectory(root)),
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::RootNotFound(root)),
            Err(e) => return Err(io_error_with_path(e, &root)),
        }
        Ok(Self {
            root,
            mode,
            matcher,
        })
    }

    /// Walks the tree and returns every file accepted by the matcher and by
    /// `accept_file`, in depth-first, name-sorted order.
    ///
    /// Subdirectories that cannot be read are logged and skipped.
    ///
    /// # Errors
    /// Returns `Error::Io` only if the root directory itself cannot be listed.
    pub fn walk<F>(&self, mut accept_file: F) -> Result<Vec<FileInfo>>
    where
        F: FnMut(&CandidatePath) -> bool,
    {
        let mut files = Vec::new();
        let children = self
            .read_children(&self.root)
            .map_err(|e| io_error_with_path(e, &self.root))?;
        self.visit_children(children, &mut accept_file, &mut files);
        Ok(files)
    }

    fn visit_dir<F>(&self, dir: &Path, accept_file: &mut F, files: &mut Vec<FileInfo>)
    where
        F: FnMut(&CandidatePath) -> bool,
    {
        match self.read_children(dir) {
            Ok(children) => self.visit_children(children, accept_file, files),
            Err(e) => warn!("Skipping unreadable directory '{}': {}", dir.display(), e),
        }
    }

    fn visit_children<F>(&self, children: Vec<Child>, accept_file: &mut F, files: &mut Vec<FileInfo>)
    where
        F: FnMut(&CandidatePath) -> bool,
    {
        for child in children {
            match child.kind {
                EntryKind::File { size } => {
                    if !accept_file(&child.candidate) {
                        debug!("Rejected by file filter: {}", child.candidate.as_str());
                        continue;
                    }
                    files.push(FileInfo {
                        relative_path: PathBuf::from(child.candidate.as_str()),
                        absolute_path: child.path,
                        size,
                        ..Default::default()
                    });
                }
                EntryKind::Directory => {
                    if self.mode.descends_into(child.candidate.depth()) {
                        self.visit_dir(&child.path, accept_file, files);
                    } else {
                        trace!("Depth limit reached at: {}", child.candidate.as_str());
                    }
                }
                EntryKind::Other => {
                    trace!("Skipping non-file entry: {}", child.candidate.as_str());
                }
            }
        }
    }

    /// Lists `dir`, drops entries excluded by the matcher and sorts the rest by name.
    fn read_children(&self, dir: &Path) -> io::Result<Vec<Child>> {
        let mut children = Vec::new();
        for entry_result in fs::read_dir(dir)? {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in '{}': {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            let Some(kind) = classify(&entry, &path) else {
                continue;
            };

            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            let candidate =
                CandidatePath::from_relative(relative, kind == EntryKind::Directory);
            if self.matcher.is_excluded(&candidate) {
                debug!("Excluded: {}", candidate.with_dir_suffix());
                continue;
            }
            children.push(Child {
                path,
                candidate,
                kind,
            });
        }
        children.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(children)
    }
}

/// Determines what an entry is. Symlinks are resolved for files only, so
/// directory links are never followed. Returns `None` for broken entries.
fn classify(entry: &fs::DirEntry, path: &Path) -> Option<EntryKind> {
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(e) => {
            warn!("Skipping '{}': {}", path.display(), e);
            return None;
        }
    };
    if file_type.is_dir() {
        return Some(EntryKind::Directory);
    }
    // fs::metadata follows symlinks; a dangling link fails here.
    match fs::metadata(path) {
        Ok(md) if md.is_file() => Some(EntryKind::File { size: md.len() }),
        Ok(_) => Some(EntryKind::Other),
        Err(e) => {
            warn!("Skipping '{}': {}", path.display(), e);
            None
        }
    }
}
