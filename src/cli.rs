// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The script itself is fixed; flags only affect diagnostics on stderr, and
//! stray positional arguments are ignored rather than rejected.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `announcer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "announcer",
    version,
    about = "Write a fixed script of route announcements to stdout, then idle.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level for stderr diagnostics (error, warn, info, debug, trace).
    ///
    /// If omitted, `ANNOUNCER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Positional arguments are accepted and ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    pub ignored: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
