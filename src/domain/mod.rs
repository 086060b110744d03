//! Core domain models for depsync
//!
//! This module contains the fundamental types used throughout the application:
//! - The name -> minimum version mapping each source produces
//! - The fixed exclusion set
//! - Package name normalization

use std::collections::BTreeMap;

/// Mapping of case-folded package name to declared minimum version.
///
/// Ordered so that reports and tests are deterministic.
pub type VersionMap = BTreeMap<String, String>;

/// Packages never checked. tzdata is not uniformly declared across
/// the three sources.
pub const EXCLUDED_PACKAGES: &[&str] = &["tzdata"];

/// Returns true if the package is in the fixed exclusion set
pub fn is_excluded(package: &str) -> bool {
    EXCLUDED_PACKAGES.contains(&package)
}

/// Normalizes a package name for comparison: map the import name to the
/// distribution name where they differ, then case-fold.
pub fn normalize_name(package: &str, install_mapping: &BTreeMap<String, String>) -> String {
    install_mapping
        .get(package)
        .map(String::as_str)
        .unwrap_or(package)
        .to_lowercase()
}
