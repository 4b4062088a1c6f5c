//! Logging and tracing initialization.
//!
//! Log output goes to a JSONL file, never to the terminal, so command
//! output stays clean for piping. The file location comes from
//! `PROSEMETER_LOG_PATH` (exact file), `PROSEMETER_LOG_DIR` or the
//! config's `log_dir` (daily-rolled files), falling back to a `logs/`
//! directory under the user data dir.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Resolved log destination settings.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path. Wins over `log_dir` when set.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolled JSONL log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as the fallback for `PROSEMETER_LOG_DIR`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("PROSEMETER_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("PROSEMETER_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` maps to `error`,
/// `-v` to `debug`, `-vv` (or more) to `trace`, and no flags to the
/// config file's `log_level`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global JSONL tracing subscriber.
///
/// Returns the appender's worker guard; it must stay alive until the
/// process exits or buffered log lines are lost.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = match config.log_path {
        Some(ref path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => {
            let dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            tracing_appender::non_blocking(tracing_appender::rolling::daily(
                &dir,
                "prosemeter.jsonl",
            ))
        }
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_current_span(true)
        .init();

    Ok(guard)
}

/// Fallback log directory when nothing is configured.
fn default_log_dir() -> PathBuf {
    prosemeter_core::config::user_data_dir()
        .map(|dir| dir.into_std_path_buf().join("logs"))
        .unwrap_or_else(std::env::temp_dir)
}
