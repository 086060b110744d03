//! One full check run: resolve, read, parse, compare, report
//!
//! Control flow is strictly linear. The three sources are read fully into
//! memory one after the other, the diff is computed once, and the report
//! (if any) is written to the supplied writer.

use crate::cli::CheckConfig;
use crate::domain::VersionMap;
use crate::error::{AppError, IoError};
use crate::report::{version_diff, write_report, SourcePaths};
use crate::source::{locate_ci_file, parse_ci_deps, parse_code_table, parse_manifest_extras};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Result of one check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every non-excluded package's minimum version agrees across sources
    InSync,
    /// At least one package disagrees; the report has been written
    OutOfSync { packages: BTreeSet<String> },
}

impl CheckOutcome {
    /// Returns true when the sources are in sync
    pub fn is_in_sync(&self) -> bool {
        matches!(self, CheckOutcome::InSync)
    }
}

/// Runs the whole check against the configured project tree, writing the
/// mismatch report (if any) to `writer`
pub fn run_check(config: &CheckConfig, writer: &mut dyn Write) -> Result<CheckOutcome, AppError> {
    let ci_path = locate_ci_file(&config.root, &config.ci_glob)?;
    let code_path = config.code_file();
    let manifest_path = config.manifest_file();

    // The CI file's required section is parsed but not compared: the other
    // two sources only declare optional dependency minimums.
    let ci_deps = parse_ci_deps(&ci_path, &read(&ci_path)?)?;
    let code_table = parse_code_table(&code_path, &read(&code_path)?)?;
    let manifest = parse_manifest_extras(
        &manifest_path,
        &read(&manifest_path)?,
        &code_table.install_mapping,
    )?;

    let outcome = compare(
        &SourcePaths {
            ci: ci_path,
            code: code_path,
            manifest: manifest_path,
        },
        &ci_deps.optional,
        &code_table.versions,
        &manifest,
        writer,
    )?;

    Ok(outcome)
}

/// Diffs the three maps and writes the report when they disagree
fn compare(
    paths: &SourcePaths,
    ci: &VersionMap,
    code: &VersionMap,
    manifest: &VersionMap,
    writer: &mut dyn Write,
) -> Result<CheckOutcome, AppError> {
    let packages = version_diff(ci, code, manifest);
    if packages.is_empty() {
        return Ok(CheckOutcome::InSync);
    }

    write_report(writer, paths, ci, code, manifest, &packages)
        .map_err(|source| IoError::WriteReport { source })?;

    Ok(CheckOutcome::OutOfSync { packages })
}

fn read(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))
}
