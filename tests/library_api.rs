// tests/library_api.rs

use dircollect::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// A temporary source tree for exercising the library entry points.
struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    fn new(files: &[(&str, &str)]) -> anyhow::Result<Self> {
        let dir = tempdir()?;
        for (relative, content) in files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        Ok(Self { dir })
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new().input_path(self.path().to_string_lossy())
    }
}

fn names(files: &[FileInfo]) -> Vec<String> {
    files.iter().map(FileInfo::relative_display).collect()
}

#[test]
fn test_end_to_end_selection() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[
        ("a.py", "a"),
        ("b.txt", "b"),
        ("test_a.py", "t"),
        ("dir/c.py", "c"),
        ("dir/.git/HEAD", "ref"),
        ("patterns.ignore", "*.txt\n"),
    ])?;
    let ignore = harness.path().join("patterns.ignore");

    let config = harness
        .builder()
        .ignore_file(ignore.to_string_lossy())
        .include(vec!["*.py".to_string()])
        .build()?;

    let files = discover(&config)?;
    assert_eq!(names(&files), vec!["a.py", "dir/c.py", "test_a.py"]);
    Ok(())
}

#[test]
fn test_discovery_is_idempotent() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[
        ("z.rs", "z"),
        ("m/n/o.rs", "o"),
        ("m/a.rs", "a"),
        (".gitignore", "n/\n"),
    ])?;
    let config = harness.builder().build()?;

    let first = discover(&config)?;
    let second = discover(&config)?;
    assert_eq!(first, second);
    assert_eq!(names(&first), vec![".gitignore", "m/a.rs", "z.rs"]);
    Ok(())
}

#[test]
fn test_one_pattern_store_serves_many_walks() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[("keep.rs", "k"), ("drop.log", "d"), ("sub/more.rs", "m")])?;
    let store = PatternStore::parse("*.log\n");
    let source = harness.path().canonicalize()?;

    let flat_config = harness.builder().recursive(false).build()?;
    let deep_config = harness.builder().build()?;

    let flat = discover_with_patterns(&flat_config.discovery, &source, &store)?;
    let deep = discover_with_patterns(&deep_config.discovery, &source, &store)?;

    assert_eq!(names(&flat), vec!["keep.rs"]);
    assert_eq!(names(&deep), vec!["keep.rs", "sub/more.rs"]);
    Ok(())
}

#[test]
fn test_walker_with_custom_predicate() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[("a.rs", "a"), ("b.md", "b"), ("src/c.rs", "c")])?;
    let store = PatternStore::default();
    let walker = Walker::new(
        harness.path(),
        WalkMode::Recursive { max_depth: None },
        Matcher::new(&store),
    )?;

    let mut seen = Vec::new();
    let files = walker.walk(|candidate| {
        seen.push(candidate.as_str().to_string());
        candidate.as_str().ends_with(".rs")
    })?;

    assert_eq!(names(&files), vec!["a.rs", "src/c.rs"]);
    assert_eq!(seen, vec!["a.rs", "b.md", "src/c.rs"]);
    Ok(())
}

#[test]
fn test_full_pipeline_to_buffer() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[("lib.rs", "pub fn f() {}\n"), ("notes.txt", "hello\n")])?;
    let config = harness.builder().line_numbers(true).build()?;

    let files = process(discover(&config)?, &config);
    let mut output = Vec::new();
    format(&files, &config, &mut output)?;

    assert_eq!(
        String::from_utf8(output)?,
        "## File: lib.rs\n```rs\n    1 | pub fn f() {}\n```\n\n\
         ## File: notes.txt\n```txt\n    1 | hello\n```\n"
    );
    Ok(())
}

#[test]
fn test_format_paths_to_buffer() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[("b.rs", "b"), ("a/x.rs", "x")])?;
    let config = harness.builder().paths_only(true).backticks(true).build()?;

    let files = discover(&config)?;
    let mut output = Vec::new();
    format_paths(&files, &config, &mut output)?;

    assert_eq!(String::from_utf8(output)?, "`a/x.rs`\n`b.rs`\n");
    Ok(())
}

#[test]
fn test_missing_root_is_reported() -> anyhow::Result<()> {
    let harness = TestHarness::new(&[])?;
    let config = ConfigBuilder::new()
        .input_path(harness.path().join("absent").to_string_lossy())
        .build()?;

    assert!(matches!(discover(&config), Err(Error::RootNotFound(_))));
    Ok(())
}

#[test]
fn test_conflicting_options_rejected() {
    let result = ConfigBuilder::new().recursive(false).max_depth(1).build();
    assert!(matches!(result, Err(Error::Config(_))));
}
