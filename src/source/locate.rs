//! CI environment file resolution
//!
//! The CI file name embeds the Python version it targets, so it is located
//! by glob. Exactly one match is expected; zero or several means the
//! project layout no longer matches the configured pattern.

use crate::error::ResolveError;
use std::path::{Path, PathBuf};

/// Locates the single CI environment file matching `pattern` under `root`
pub fn locate_ci_file(root: &Path, pattern: &str) -> Result<PathBuf, ResolveError> {
    let full_pattern = root.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let entries = glob::glob(&full_pattern).map_err(|e| ResolveError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    // Unreadable entries are treated as absent; the follow-up read of the
    // selected file reports the IO failure with its path.
    let mut matches: Vec<PathBuf> = entries.filter_map(Result::ok).collect();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(ResolveError::NoCiFile {
            pattern: pattern.to_string(),
        }),
        count => Err(ResolveError::AmbiguousCiFile {
            pattern: pattern.to_string(),
            count,
        }),
    }
}
