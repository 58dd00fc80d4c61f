//! Logging setup: everything to a log file, warnings and errors to stderr.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE: &str = "pocket.log";

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
///
/// The file filter comes from `RUST_LOG` (default `info`); `verbose` also echoes
/// `debug` and above to stderr.
pub fn setup_logging(verbose: bool) -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(env_filter);

    let stderr_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!("Log file: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Platform cache directory for logs (`~/.cache/pocket/logs` on Linux).
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "pocket")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("pocket"))
        .join("logs")
}
