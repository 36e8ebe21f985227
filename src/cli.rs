// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dirfeed`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dirfeed",
    version,
    about = "Serve the files of local directories as an RSS feed.",
    long_about = None
)]
pub struct CliArgs {
    /// Directories to watch for files. At least one is required; each is
    /// validated to exist and be listable before the server starts.
    #[arg(value_name = "DIR", required = true)]
    pub directories: Vec<PathBuf>,

    /// Base URL clients use to reach this server. Feed links are built as
    /// `{base-url}:{port}/file/{identifier}/{name}`.
    #[arg(long, value_name = "URL", default_value = "http://localhost")]
    pub base_url: String,

    /// Port the HTTP server listens on.
    #[arg(long, value_name = "PORT", default_value_t = 64055)]
    pub port: u16,

    /// Path to an optional feed config file (TOML).
    ///
    /// When omitted, all feed options fall back to their defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Seconds to sleep between directory scans.
    #[arg(long, value_name = "SECS", default_value_t = 60)]
    pub scan_interval_secs: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DIRFEED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
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
