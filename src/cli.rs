// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for `taskpool`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskpool",
    version,
    about = "Run simulated tasks on a bounded worker pool and show their live status.",
    long_about = None
)]
pub struct CliArgs {
    /// Number of concurrent workers (must be positive).
    ///
    /// Parsed as a signed integer so that zero or negative values are
    /// reported as configuration errors rather than usage errors.
    #[arg(
        short = 'p',
        long = "processes",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub processes: i64,

    /// Task file: one `<name>: <seconds>` entry per line.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
