//! End-to-end tests for the depsync CLI
//!
//! These tests verify:
//! - Exit code 0 and no output when the sources agree
//! - Exit code 1 and a per-package report when they disagree
//! - Exit code 1 on resolution failures

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lays out a complete project tree with agreeing sources
fn create_synced_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    write_file(
        temp_dir.path(),
        "ci/deps/actions-310-minimum_versions.yaml",
        "\
name: actions-310-minimum_versions
dependencies:
  # required dependencies
  - python-dateutil=2.8.1
  # optional dependencies
  - beautifulsoup4=4.9.3
  - numpy=1.20.3
",
    );

    write_file(
        temp_dir.path(),
        "pandas/compat/_optional.py",
        r#"
VERSIONS = {
    "bs4": "4.9.3",
    "numpy": "1.20.3",
    "pytest": "6.0",
}

INSTALL_MAPPING = {
    "bs4": "beautifulsoup4",
}
"#,
    );

    write_file(
        temp_dir.path(),
        "setup.cfg",
        "\
[options.extras_require]
test =
    pytest>=6.0
all =
    beautifulsoup4>=4.9.3
    numpy>=1.20.3
    pytest>=6.0
",
    );

    temp_dir
}

fn depsync() -> Command {
    Command::cargo_bin("depsync").expect("binary not built")
}

#[test]
fn test_synced_project_exits_zero_silently() {
    let project = create_synced_project();

    depsync()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_mismatch_exits_one_with_report() {
    let project = create_synced_project();
    // Bump numpy only in the code table
    write_file(
        project.path(),
        "pandas/compat/_optional.py",
        r#"
VERSIONS = {
    "bs4": "4.9.3",
    "numpy": "1.21.0",
    "pytest": "6.0",
}

INSTALL_MAPPING = {
    "bs4": "beautifulsoup4",
}
"#,
    );

    depsync()
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("numpy")
                .and(predicate::str::contains("1.20.3"))
                .and(predicate::str::contains("1.21.0"))
                .and(predicate::str::contains("Please ensure these are aligned")),
        );
}

#[test]
fn test_missing_ci_file_exits_one() {
    let project = create_synced_project();
    fs::remove_file(
        project
            .path()
            .join("ci/deps/actions-310-minimum_versions.yaml"),
    )
    .unwrap();

    depsync()
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no CI file matches"));
}

#[test]
fn test_malformed_ci_line_exits_one() {
    let project = create_synced_project();
    write_file(
        project.path(),
        "ci/deps/actions-310-minimum_versions.yaml",
        "\
  # required dependencies
  - numpy
",
    );

    depsync()
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no version delimiter"));
}

#[test]
fn test_verbose_reports_to_stderr() {
    let project = create_synced_project();

    depsync()
        .arg(project.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("in sync"));
}

#[test]
fn test_path_overrides() {
    let project = create_synced_project();
    // Move the manifest somewhere non-standard
    let content = fs::read_to_string(project.path().join("setup.cfg")).unwrap();
    write_file(project.path(), "packaging/setup.cfg", &content);
    fs::remove_file(project.path().join("setup.cfg")).unwrap();

    depsync()
        .arg(project.path())
        .args(["--manifest-path", "packaging/setup.cfg"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
