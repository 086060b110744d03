//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ResolveError: Issues locating the input files
//! - ParseError: Malformed lines or missing structure in the input files
//! - IoError: File system operation failures
//!
//! None of these are recovered from: the checked files are maintainer-edited,
//! so a malformed input indicates a bug in the input itself.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input file resolution errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Input file parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors locating the files to check
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The CI glob pattern matched nothing
    #[error("no CI file matches '{pattern}'")]
    NoCiFile { pattern: String },

    /// The CI glob pattern matched more than one file
    #[error("expected exactly one CI file matching '{pattern}', found {count}")]
    AmbiguousCiFile { pattern: String, count: usize },

    /// The glob pattern itself is invalid
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Errors parsing the files to check
#[derive(Error, Debug)]
pub enum ParseError {
    /// A dependency line carries no recognized version delimiter
    #[error("no version delimiter in dependency line '{line}' of {path}")]
    MissingDelimiter { path: PathBuf, line: String },

    /// A dependency line in the CI file lacks the `- ` list marker
    #[error("missing list marker in dependency line '{line}' of {path}")]
    MissingListMarker { path: PathBuf, line: String },

    /// A module-level table was not found in the code module
    #[error("table '{table}' not found in {path}")]
    MissingTable { path: PathBuf, table: String },

    /// An INI section was not found in the manifest
    #[error("section '[{section}]' not found in {path}")]
    MissingSection { path: PathBuf, section: String },

    /// An INI key was not found in the manifest
    #[error("key '{key}' not found under '[{section}]' in {path}")]
    MissingKey {
        path: PathBuf,
        section: String,
        key: String,
    },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read an input file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the mismatch report
    #[error("failed to write report: {source}")]
    WriteReport {
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates a new MissingDelimiter error
    pub fn missing_delimiter(path: impl Into<PathBuf>, line: impl Into<String>) -> Self {
        ParseError::MissingDelimiter {
            path: path.into(),
            line: line.into(),
        }
    }

    /// Creates a new MissingTable error
    pub fn missing_table(path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        ParseError::MissingTable {
            path: path.into(),
            table: table.into(),
        }
    }
}

impl IoError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::ReadError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_no_ci_file() {
        let err = ResolveError::NoCiFile {
            pattern: "ci/deps/actions-*-minimum_versions.yaml".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("no CI file matches"));
        assert!(msg.contains("minimum_versions.yaml"));
    }

    #[test]
    fn test_resolve_error_ambiguous() {
        let err = ResolveError::AmbiguousCiFile {
            pattern: "ci/deps/*.yaml".to_string(),
            count: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("exactly one CI file"));
        assert!(msg.contains("found 3"));
    }

    #[test]
    fn test_parse_error_missing_delimiter() {
        let err = ParseError::missing_delimiter("ci/deps/actions.yaml", "- numpy");
        let msg = format!("{}", err);
        assert!(msg.contains("no version delimiter"));
        assert!(msg.contains("- numpy"));
    }

    #[test]
    fn test_parse_error_missing_table() {
        let err = ParseError::missing_table("compat/_optional.py", "VERSIONS");
        let msg = format!("{}", err);
        assert!(msg.contains("table 'VERSIONS' not found"));
    }

    #[test]
    fn test_parse_error_missing_section() {
        let err = ParseError::MissingSection {
            path: PathBuf::from("setup.cfg"),
            section: "options.extras_require".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("[options.extras_require]"));
    }

    #[test]
    fn test_app_error_from_parse_error() {
        let parse_err = ParseError::missing_table("x.py", "VERSIONS");
        let app_err: AppError = parse_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_err = IoError::read_error(
            "setup.cfg",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let app_err: AppError = io_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to read"));
    }
}
