// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, dircollect_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_error_missing_source_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    dircollect_cmd()
        .arg("non_existent_path_hopefully")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Source directory not found"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_source_is_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "plain.txt", "Not a directory")?;

    dircollect_cmd()
        .arg("plain.txt")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_no_recursive_with_max_depth() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A")?;

    // Rejected by the argument parser before any configuration is built.
    dircollect_cmd()
        .args(["-n", "-d", "2"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_line_numbers_with_paths_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A")?;

    dircollect_cmd()
        .args(["-L", "-P"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot use --line-numbers and --paths-only simultaneously.",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_invalid_max_depth_value() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    dircollect_cmd()
        .args(["-d", "deep"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    temp.close()?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir()?;
    create_file(temp.path(), "ok.txt", "Fine")?;
    create_file(temp.path(), "locked/secret.txt", "Hidden")?;
    let locked = temp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Running as root bypasses permission checks; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let assert = dircollect_cmd()
        .arg("-P")
        .env("RUST_LOG", "warn")
        .current_dir(temp.path())
        .assert();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    assert
        .success()
        .stdout("ok.txt\n")
        .stderr(predicate::str::contains("Skipping unreadable directory"));

    temp.close()?;
    Ok(())
}
