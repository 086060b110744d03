//! CLI argument parsing module for depsync

use clap::Parser;
use std::path::PathBuf;

/// Default glob for the CI environment file, relative to the project root
pub const DEFAULT_CI_GLOB: &str = "ci/deps/actions-*-minimum_versions.yaml";

/// Default path of the code version table, relative to the project root
pub const DEFAULT_CODE_PATH: &str = "pandas/compat/_optional.py";

/// Default path of the packaging manifest, relative to the project root
pub const DEFAULT_MANIFEST_PATH: &str = "setup.cfg";

/// Minimum dependency version sync checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depsync",
    version,
    about = "Checks that minimum dependency versions are in sync across CI, code and packaging manifests"
)]
pub struct CliArgs {
    /// Project root directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Glob pattern for the CI environment file, relative to the project root
    #[arg(long = "ci-glob", default_value = DEFAULT_CI_GLOB)]
    pub ci_glob: String,

    /// Path of the code module holding the version table, relative to the project root
    #[arg(long = "code-path", default_value = DEFAULT_CODE_PATH)]
    pub code_path: PathBuf,

    /// Path of the packaging manifest, relative to the project root
    #[arg(long = "manifest-path", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest_path: PathBuf,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Resolved configuration for one check run.
///
/// All paths are explicit so tests can point a run at a synthetic tree
/// instead of the hardcoded project layout.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Project root every other path is resolved against
    pub root: PathBuf,
    /// Glob pattern selecting the CI environment file
    pub ci_glob: String,
    /// Code module holding VERSIONS and INSTALL_MAPPING
    pub code_path: PathBuf,
    /// INI packaging manifest
    pub manifest_path: PathBuf,
}

impl CheckConfig {
    /// Creates a configuration rooted at the given directory with the
    /// default file locations
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ci_glob: DEFAULT_CI_GLOB.to_string(),
            code_path: PathBuf::from(DEFAULT_CODE_PATH),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }

    /// Sets the CI file glob (builder pattern)
    pub fn with_ci_glob(mut self, pattern: impl Into<String>) -> Self {
        self.ci_glob = pattern.into();
        self
    }

    /// Sets the code module path (builder pattern)
    pub fn with_code_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.code_path = path.into();
        self
    }

    /// Sets the packaging manifest path (builder pattern)
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Code module path resolved against the root
    pub fn code_file(&self) -> PathBuf {
        self.root.join(&self.code_path)
    }

    /// Manifest path resolved against the root
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join(&self.manifest_path)
    }
}

impl From<&CliArgs> for CheckConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            root: args.path.clone(),
            ci_glob: args.ci_glob.clone(),
            code_path: args.code_path.clone(),
            manifest_path: args.manifest_path.clone(),
        }
    }
}
