// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;
use crate::types::OutputFormat;

/// Command-line arguments for `taskgrid`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskgrid",
    version,
    about = "Lay out a task dependency graph on a grid.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML).
    ///
    /// Default: `Roadmap.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub tasks: PathBuf,

    /// Root task id. Overrides `[layout].root` from the task file.
    #[arg(long, value_name = "ID")]
    pub root: Option<String>,

    /// Number of grid columns. Even values are bumped to the next odd one.
    ///
    /// If omitted, the column count is derived from the display width.
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Display width in pixels used to derive the column count.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Output format. Overrides `[layout].format`.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKGRID_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load, validate and annotate the graph; print the annotations but do
    /// not allocate grid cells.
    #[arg(long)]
    pub dry_run: bool,

    /// Keep running and re-render whenever the task file changes.
    #[arg(long)]
    pub watch: bool,
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
