//! Version diff computation and report formatting
//!
//! This module provides:
//! - The three-way (name, version) pair diff
//! - The human-readable mismatch report

use crate::domain::VersionMap;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker printed when a source does not declare a package
const NOT_SPECIFIED: &str = "Not specified";

/// The resolved paths of the three sources, for report headers
#[derive(Debug, Clone)]
pub struct SourcePaths {
    /// CI environment file
    pub ci: PathBuf,
    /// Code version table module
    pub code: PathBuf,
    /// Packaging manifest
    pub manifest: PathBuf,
}

/// Returns the packages whose (name, version) pair is not present in all
/// three sources: the union of declared pairs minus the unanimous ones.
///
/// Sorted so report order is stable across runs.
pub fn version_diff(ci: &VersionMap, code: &VersionMap, manifest: &VersionMap) -> BTreeSet<String> {
    let mut packages = BTreeSet::new();
    for name in ci.keys().chain(code.keys()).chain(manifest.keys()) {
        let declared = ci.get(name);
        let unanimous = declared.is_some()
            && code.get(name) == declared
            && manifest.get(name) == declared;
        if !unanimous {
            packages.insert(name.clone());
        }
    }
    packages
}

/// Writes the mismatch report: one block per disagreeing package showing
/// what each source declares
pub fn write_report(
    writer: &mut dyn Write,
    paths: &SourcePaths,
    ci: &VersionMap,
    code: &VersionMap,
    manifest: &VersionMap,
    packages: &BTreeSet<String>,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "The following minimum version differences were found between {}, {} and {}. \
         Please ensure these are aligned:",
        paths.ci.display(),
        paths.code.display(),
        paths.manifest.display()
    )?;
    writeln!(writer)?;

    for package in packages {
        writeln!(writer, "{}", package.bold())?;
        write_source_line(writer, &paths.ci, ci.get(package))?;
        write_source_line(writer, &paths.code, code.get(package))?;
        write_source_line(writer, &paths.manifest, manifest.get(package))?;
        writeln!(writer)?;
    }

    Ok(())
}

fn write_source_line(
    writer: &mut dyn Write,
    path: &Path,
    version: Option<&String>,
) -> std::io::Result<()> {
    match version {
        Some(version) => writeln!(writer, "{}: {}", path.display(), version),
        None => writeln!(writer, "{}: {}", path.display(), NOT_SPECIFIED.dimmed()),
    }
}
