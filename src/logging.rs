// src/logging.rs

//! Logging setup for `tasklink` using `tracing` + `tracing-subscriber`.
//!
//! Filter priority:
//! 1. `--log-level` CLI flag (a plain level for every target)
//! 2. `TASKLINK_LOG` environment variable, any `EnvFilter` directive
//!    (e.g. `debug` or `info,tasklink::layout=trace`)
//! 3. `info`
//!
//! Logs go to STDERR so that stdout carries only the rendered report or SVG.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "TASKLINK_LOG";

/// Initialise the global logging subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.as_directive());
    }
    env.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| match EnvFilter::try_new(s) {
            Ok(filter) => Some(filter),
            Err(err) => {
                eprintln!("tasklink: ignoring invalid {LOG_ENV}={s:?}: {err}");
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new("info"))
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins_over_env() {
        let filter = build_filter(Some(LogLevel::Trace), Some("warn"));
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    fn env_accepts_target_directives() {
        let filter = build_filter(None, Some("info,tasklink::layout=debug"));
        assert!(filter.to_string().contains("tasklink::layout=debug"));
    }

    #[test]
    fn missing_env_defaults_to_info() {
        assert_eq!(build_filter(None, None).to_string(), "info");
        assert_eq!(build_filter(None, Some("  ")).to_string(), "info");
    }
}
