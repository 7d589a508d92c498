//! File logging for `--debug` runs.
//!
//! The TUI owns stdout, so events go to a file through a non-blocking writer.
//! Keep the returned guard alive until exit or buffered lines are lost.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SMARTTASKS_LOG_PATH;

pub fn default_log_path() -> PathBuf {
    std::env::home_dir()
        .unwrap_or_default()
        .join(SMARTTASKS_LOG_PATH)
}

pub fn default_filter() -> String {
    format!(
        "error,{}=debug,smarttasks_flow=debug,smarttasks_tui=debug",
        env!("CARGO_CRATE_NAME")
    )
}

pub fn init(log_file: Option<&Path>) -> Result<WorkerGuard, String> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .map_err(|e| format!("Failed to create log directory: {}", e))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_enables_workspace_crates() {
        let filter = default_filter();
        assert!(filter.starts_with("error,"));
        assert!(filter.contains("smarttasks_flow=debug"));
        assert!(filter.contains("smarttasks_tui=debug"));
    }

    #[test]
    fn default_log_path_lives_under_app_dir() {
        assert!(default_log_path().ends_with(SMARTTASKS_LOG_PATH));
    }
}
