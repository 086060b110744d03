//! Packaging manifest (setup.cfg) extras reader
//!
//! Reads the `all` and `test` keys under `[options.extras_require]` as
//! newline-delimited lists of `package>=version` entries. Anything listed
//! under `test` is removed from `all` before comparison, since test-only
//! dependencies are not declared in the other two sources.
//!
//! The INI scan is deliberately minimal: sections, `key = value` lines and
//! indented continuation lines. That covers the manifest as maintainers
//! write it.

use crate::domain::{is_excluded, normalize_name, VersionMap};
use crate::error::ParseError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const EXTRAS_SECTION: &str = "options.extras_require";

/// Parses the non-test extras out of the manifest, normalizing names
/// through the install mapping.
///
/// `path` is used for error messages only.
pub fn parse_manifest_extras(
    path: &Path,
    content: &str,
    install_mapping: &BTreeMap<String, String>,
) -> Result<VersionMap, ParseError> {
    let extras = read_section(content, EXTRAS_SECTION).ok_or_else(|| {
        ParseError::MissingSection {
            path: path.to_path_buf(),
            section: EXTRAS_SECTION.to_string(),
        }
    })?;

    let all = extras.get("all").ok_or_else(|| missing_key(path, "all"))?;
    let test = extras.get("test").ok_or_else(|| missing_key(path, "test"))?;

    // Textual removal: a test entry masks the identical line in `all`
    let test_entries: BTreeSet<&str> = test.iter().map(String::as_str).collect();

    let mut versions = VersionMap::new();
    for entry in all {
        if test_entries.contains(entry.as_str()) {
            continue;
        }
        let (package, version) = entry
            .split_once(">=")
            .ok_or_else(|| ParseError::missing_delimiter(path, entry))?;
        if is_excluded(package) {
            continue;
        }
        versions.insert(
            normalize_name(package, install_mapping),
            version.to_string(),
        );
    }

    Ok(versions)
}

fn missing_key(path: &Path, key: &str) -> ParseError {
    ParseError::MissingKey {
        path: path.to_path_buf(),
        section: EXTRAS_SECTION.to_string(),
        key: key.to_string(),
    }
}

/// Reads one INI section as key -> list of value lines; None when the
/// section header never appears
fn read_section(content: &str, section: &str) -> Option<BTreeMap<String, Vec<String>>> {
    let header = format!("[{section}]");
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut in_section = false;
    let mut found = false;
    let mut current_key: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            in_section = trimmed == header;
            found |= in_section;
            current_key = None;
            continue;
        }
        if !in_section {
            continue;
        }

        // Indented lines continue the previous key's value list
        if line.starts_with([' ', '\t']) {
            if let (Some(key), false) = (&current_key, trimmed.is_empty()) {
                if let Some(values) = entries.get_mut(key) {
                    values.push(trimmed.to_string());
                }
            }
            continue;
        }

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim().to_string();
            let mut values = Vec::new();
            if !value.trim().is_empty() {
                values.push(value.trim().to_string());
            }
            entries.insert(key.clone(), values);
            current_key = Some(key);
        }
    }

    found.then_some(entries)
}
