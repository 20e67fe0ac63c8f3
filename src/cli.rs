// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::render::OutputFormat;
use crate::types::Orientation;

/// Command-line arguments for `tasklink`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasklink",
    version,
    about = "Derive blocking state and lay out the dependency flow of a TaskLink board.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the board snapshot file (TOML).
    ///
    /// Default: `TaskLink.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "TaskLink.toml")]
    pub board: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Override the `[layout]` orientation (`lr` or `tb`).
    #[arg(long, value_name = "DIR")]
    pub orientation: Option<Orientation>,

    /// Render as if the pointer hovered this task.
    #[arg(long, value_name = "TASK")]
    pub hover: Option<String>,

    /// Keep running and re-render whenever the board file changes.
    #[arg(long)]
    pub watch: bool,

    /// Parse + validate the board file and print a summary; no rendering.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKLINK_LOG` or a default level will be used.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::parse_from(["tasklink"]);
        assert_eq!(args.board, "TaskLink.toml");
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.orientation.is_none());
        assert!(!args.watch);
    }

    #[test]
    fn parses_render_flags() {
        let args = CliArgs::parse_from([
            "tasklink",
            "--board",
            "b.toml",
            "--format",
            "svg",
            "--orientation",
            "tb",
            "--hover",
            "task-1",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.format, OutputFormat::Svg);
        assert_eq!(args.orientation, Some(Orientation::TopToBottom));
        assert_eq!(args.hover.as_deref(), Some("task-1"));
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
