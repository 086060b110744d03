//! Readers for the three version declaration sources
//!
//! This module provides functionality to:
//! - Locate the CI environment file by glob pattern
//! - Parse dependency versions out of each source's textual format
//!
//! Each reader takes file content as a string so tests can feed synthetic
//! input without touching the file system.

mod ci_yaml;
mod code_table;
mod locate;
mod setup_cfg;

pub use ci_yaml::{parse_ci_deps, CiDeps};
pub use code_table::{parse_code_table, CodeTable};
pub use locate::locate_ci_file;
pub use setup_cfg::parse_manifest_extras;
