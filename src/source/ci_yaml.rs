//! CI environment file reader
//!
//! The file is YAML, but it is deliberately not parsed with a YAML parser:
//! the `# required dependencies` and `# optional dependencies` comments
//! carry the section structure, and a structured parser would drop them.
//! Instead a two-state line scan interprets every dependency entry after a
//! marker as `- name==version` (conda pins also appear as `- name=version`).
//!
//! Only `==` and `=` are recognized. Any other constraint operator in this
//! file is a malformed line, and malformed lines are hard errors: the file
//! is maintainer-edited and a bad line is a bug in the file.

use crate::domain::{is_excluded, VersionMap};
use crate::error::ParseError;
use std::path::Path;

/// Dependency versions read from the CI environment file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiDeps {
    /// Entries after the required-dependencies marker
    pub required: VersionMap,
    /// Entries after the optional-dependencies marker
    pub optional: VersionMap,
}

/// Parses required and optional dependency versions out of the CI file.
///
/// `path` is used for error messages only.
pub fn parse_ci_deps(path: &Path, content: &str) -> Result<CiDeps, ParseError> {
    let mut deps = CiDeps::default();
    let mut seen_required = false;
    let mut seen_optional = false;

    for line in content.lines() {
        if line.contains("# required dependencies") {
            seen_required = true;
        } else if line.contains("# optional dependencies") {
            seen_optional = true;
        } else if line.contains("- pip:") {
            // pip installs are declared elsewhere, not minimum versions
            continue;
        } else if seen_required && !line.trim().is_empty() {
            let (package, version) = split_dependency_line(path, line.trim())?;
            if is_excluded(package) {
                continue;
            }
            let target = if seen_optional {
                &mut deps.optional
            } else {
                &mut deps.required
            };
            target.insert(package.to_lowercase(), version.to_string());
        }
    }

    Ok(deps)
}

/// Splits a trimmed `- name==version` entry into name and version.
///
/// `==` takes precedence over `=` so pinned entries are not split inside
/// the operator.
fn split_dependency_line<'a>(path: &Path, line: &'a str) -> Result<(&'a str, &'a str), ParseError> {
    let (package, version) = if let Some((package, version)) = line.split_once("==") {
        (package, version)
    } else if let Some((package, version)) = line.split_once('=') {
        (package, version)
    } else {
        return Err(ParseError::missing_delimiter(path, line));
    };

    let package = package
        .strip_prefix("- ")
        .ok_or_else(|| ParseError::MissingListMarker {
            path: path.to_path_buf(),
            line: line.to_string(),
        })?;

    Ok((package, version))
}
