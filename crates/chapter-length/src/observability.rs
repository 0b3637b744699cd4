//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr so stdout stays clean for command
//! output. When a log path or directory is configured, a second layer
//! writes JSONL through a non-blocking `tracing-appender` writer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "CHAPTER_LENGTH_LOG_PATH";
const LOG_DIR_ENV: &str = "CHAPTER_LENGTH_LOG_DIR";
const LOG_FILE_PREFIX: &str = "chapter-length.jsonl";

/// Where JSONL logs should be written, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the log destination from the environment.
    ///
    /// `CHAPTER_LENGTH_LOG_PATH` wins over `CHAPTER_LENGTH_LOG_DIR`, which
    /// wins over the config file's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_values(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn from_values(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
        Self {
            log_path: env_path.filter(non_empty),
            log_dir: env_dir.filter(non_empty).or(config_dir),
        }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, each `-v`
/// steps up from the configured level, and with neither flag the config
/// level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the JSONL writer on drop; hold it for the
/// lifetime of `main`.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, file)));
    }

    if let Some(ref dir) = config.log_dir {
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)));
    }

    Ok(None)
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
