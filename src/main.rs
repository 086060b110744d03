//! depsync - minimum dependency version sync checker CLI
//!
//! Cross-checks minimum dependency versions declared in:
//! - the CI environment file (ci/deps/*-minimum_versions.yaml)
//! - the code version table (a Python module with VERSIONS / INSTALL_MAPPING)
//! - the packaging manifest (setup.cfg extras)
//!
//! Meant to be run as a pre-commit hook from the project root. Exits 0 when
//! every source agrees, 1 when any minimum version differs.

use clap::Parser;
use depsync::check::{run_check, CheckOutcome};
use depsync::cli::{CheckConfig, CliArgs};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = CheckConfig::from(&args);

    if args.verbose {
        eprintln!("depsync v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Project root: {}", config.root.display());
        eprintln!("CI glob: {}", config.ci_glob);
        eprintln!("Code module: {}", config.code_file().display());
        eprintln!("Manifest: {}", config.manifest_file().display());
    }

    let mut stdout = io::stdout().lock();
    let outcome = run_check(&config, &mut stdout)?;
    stdout.flush()?;

    match outcome {
        CheckOutcome::InSync => {
            if args.verbose {
                eprintln!("All minimum versions are in sync");
            }
            Ok(ExitCode::SUCCESS)
        }
        CheckOutcome::OutOfSync { packages } => {
            if args.verbose {
                eprintln!("{} package(s) out of sync", packages.len());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
