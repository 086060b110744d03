//! depsync - minimum dependency version sync checker
//!
//! This library provides the core functionality for cross-checking minimum
//! dependency versions declared in three places of a project tree:
//! - CI environment file (ci/deps/*-minimum_versions.yaml)
//! - Code version table (a Python module with VERSIONS / INSTALL_MAPPING)
//! - Packaging manifest (setup.cfg extras)

pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod report;
pub mod source;
