//! Code version table reader
//!
//! The version table lives in a Python compat module as two module-level
//! dict literals:
//!
//! ```python
//! VERSIONS = {
//!     "bs4": "4.9.3",
//!     "numpy": "1.20.3",
//! }
//!
//! INSTALL_MAPPING = {
//!     "bs4": "beautifulsoup4",
//! }
//! ```
//!
//! Both are read with a line scan over the source text. Entries spanning
//! multiple lines are not supported; the checked module keeps one entry
//! per line.

use crate::domain::{is_excluded, normalize_name, VersionMap};
use crate::error::ParseError;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// The testing framework is listed in the table for import checking but
/// is not a runtime dependency.
const TEST_FRAMEWORK: &str = "pytest";

// Dict literal openers: VERSIONS = { / INSTALL_MAPPING = {
static TABLE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(VERSIONS|INSTALL_MAPPING)\s*=\s*\{\s*$").unwrap());

// Dict entry: "key": "value",
static TABLE_ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"([^"]+)"\s*:\s*"([^"]+)"\s*,?\s*$"#).unwrap());

/// The two tables read from the code module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    /// Normalized package name -> minimum version
    pub versions: VersionMap,
    /// Import name -> distribution name, where the two differ
    pub install_mapping: BTreeMap<String, String>,
}

/// Parses the VERSIONS and INSTALL_MAPPING tables out of the code module.
///
/// `path` is used for error messages only.
pub fn parse_code_table(path: &Path, content: &str) -> Result<CodeTable, ParseError> {
    let versions = read_table(content, "VERSIONS")
        .ok_or_else(|| ParseError::missing_table(path, "VERSIONS"))?;
    let install_mapping = read_table(content, "INSTALL_MAPPING")
        .ok_or_else(|| ParseError::missing_table(path, "INSTALL_MAPPING"))?;

    let mut normalized = VersionMap::new();
    for (package, version) in versions {
        if is_excluded(&package) || package == TEST_FRAMEWORK {
            continue;
        }
        normalized.insert(normalize_name(&package, &install_mapping), version);
    }

    Ok(CodeTable {
        versions: normalized,
        install_mapping,
    })
}

/// Reads one named dict literal; None when the opener never appears
fn read_table(content: &str, name: &str) -> Option<BTreeMap<String, String>> {
    let mut entries = BTreeMap::new();
    let mut in_table = false;
    let mut found = false;

    for line in content.lines() {
        if let Some(caps) = TABLE_OPEN_RE.captures(line) {
            in_table = &caps[1] == name;
            found |= in_table;
            continue;
        }
        if !in_table {
            continue;
        }
        if line.trim_start().starts_with('}') {
            in_table = false;
            continue;
        }
        if let Some(caps) = TABLE_ENTRY_RE.captures(line) {
            entries.insert(caps[1].to_string(), caps[2].to_string());
        }
    }

    found.then_some(entries)
}
