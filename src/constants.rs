// src/constants.rs

/// Name of the version-control directory that is always pruned.
pub const GIT_DIR_NAME: &str = ".git";

/// Ignore file looked up inside the source directory when none is given.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Prefix marking a root-anchored ignore pattern.
pub const ANCHOR_PREFIX: &str = "./";

/// Lines in an ignore file starting with this are comments.
pub const COMMENT_PREFIX: char = '#';

/// Separator for the `--include` / `--exclude` pattern lists.
pub const PATTERN_LIST_SEPARATOR: char = ',';

/// Default width for formatting line numbers. Actual width adjusts dynamically.
pub const DEFAULT_LINE_NUMBER_WIDTH: usize = 5;
