use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// Initialise logging to `log_file`.
///
/// The terminal belongs to the dashboard, so nothing is logged unless a file
/// is configured. The level is `info` unless `level` says otherwise, and
/// `RUST_LOG` wins over both when set.
///
/// The returned guard flushes the background writer on drop and must be held
/// until the program exits.
pub fn init(log_file: Option<&Path>, level: Option<&str>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(level)?,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(Some(guard))
}

/// Filter for an explicit level string, or the default.
fn level_filter(level: Option<&str>) -> Result<EnvFilter> {
    let level = level.unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
}
