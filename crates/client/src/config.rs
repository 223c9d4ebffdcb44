//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use catalog_service::{
    BundledContentSource, ContentSource, DirectoryContentSource, TimeoutContentSource,
};

const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Read catalog files from here instead of the bundled dataset.
    pub data_dir: Option<PathBuf>,
    /// Simulated delay for every bundled request.
    pub latency: Duration,
    /// Per-request limit; `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    pub log_to_file: bool,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            latency: Duration::ZERO,
            fetch_timeout: Some(Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS)),
            log_to_file: false,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CATALOG_DATA_DIR` - Data directory with RON/TOML catalog files (default: bundled data)
    /// - `CATALOG_LATENCY_MS` - Simulated latency for bundled data (default: 0)
    /// - `CATALOG_FETCH_TIMEOUT_MS` - Per-request timeout, 0 disables (default: 5000)
    /// - `CATALOG_LOG_TO_FILE` - Write a session log file (default: false)
    /// - `CATALOG_SESSION_ID` - Session name for the log file (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("CATALOG_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        if let Some(ms) = read_env::<u64>("CATALOG_LATENCY_MS") {
            config.latency = Duration::from_millis(ms);
        }

        if let Some(ms) = read_env::<u64>("CATALOG_FETCH_TIMEOUT_MS") {
            config.fetch_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }

        config.log_to_file = read_env_bool("CATALOG_LOG_TO_FILE");
        config.session_id = env::var("CATALOG_SESSION_ID").ok();

        config
    }

    /// Builds the content source this configuration describes.
    pub fn content_source(&self) -> Arc<dyn ContentSource> {
        match (&self.data_dir, self.fetch_timeout) {
            (Some(dir), Some(timeout)) => Arc::new(TimeoutContentSource::new(
                DirectoryContentSource::new(dir.clone()),
                timeout,
            )),
            (Some(dir), None) => Arc::new(DirectoryContentSource::new(dir.clone())),
            (None, Some(timeout)) => Arc::new(TimeoutContentSource::new(
                self.bundled(),
                timeout,
            )),
            (None, None) => Arc::new(self.bundled()),
        }
    }

    fn bundled(&self) -> BundledContentSource {
        BundledContentSource::new().with_latency(self.latency)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

/// `1`, `true`, `yes`, `on`, or a bare variable count as enabled.
fn read_env_bool(key: &str) -> bool {
    match env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "" | "1" | "true" | "yes" | "on"
        ),
        Err(_) => false,
    }
}
