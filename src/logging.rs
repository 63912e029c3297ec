//! File-backed tracing setup. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "grid-tac-toe.log";

/// Resolve the log directory, creating it if needed.
pub fn log_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let path = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let mut path = dirs::data_dir()
                .context("Unable to determine data directory for your platform")?;
            path.push("grid-tac-toe");
            path.push("logs");
            path
        }
    };

    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create log directory {}", path.display()))?;

    Ok(path)
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(override_dir: Option<&Path>, default_filter: &str) -> Result<WorkerGuard> {
    let dir = log_dir(override_dir)?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(dir = %dir.display(), "logging initialised");
    Ok(guard)
}
