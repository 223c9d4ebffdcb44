//! Tracing subscriber setup for the `warbond` binary.
//!
//! Always logs to stderr so stdout stays clean for `--json`. With
//! `CATALOG_LOG_TO_FILE` set, a session log is also written under the
//! platform cache directory:
//! - macOS: `~/Library/Caches/warbond/logs/<session>/client.log`
//! - Linux: `~/.cache/warbond/logs/<session>/client.log`
//! - Windows: `%LOCALAPPDATA%\warbond\cache\logs\<session>\client.log`
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    if !config.log_to_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    }

    let session_id = config
        .session_id
        .clone()
        .unwrap_or_else(|| format!("session_{}", chrono::Utc::now().timestamp()));
    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("Failed to create log directory: {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!(session = %session_id, "logging initialized");
    tracing::debug!("log file: {}/client.log", session_log_dir.display());

    Ok(Some(guard))
}

/// Platform-specific log directory, falling back to the temp directory.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "warbond")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("warbond"))
        .join("logs")
}
