//! Explicit runtime configuration.
//!
//! Everything the service and the provider need (credentials, endpoints, file
//! locations, the reference window) lives in one `StonksConfig` that is built
//! once at startup and handed out by reference.
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::error::StonksError;
use crate::result::Result;

/// Default Finnhub REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
/// Start of the default reference window (2020-02-05 06:00 UTC).
pub const DEFAULT_REFERENCE_START: i64 = 1_580_882_400;
/// Default length of the reference window in days.
pub const DEFAULT_REFERENCE_DAYS: u32 = 10;
/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fixed calendar window the reference price is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceWindow {
    /// First instant of the window.
    pub start: DateTime<Utc>,
    /// Window length in whole days.
    pub days: u32,
}

impl ReferenceWindow {
    /// Build a window from a unix timestamp and a length in days.
    pub fn from_timestamp(start: i64, days: u32) -> Result<Self> {
        let start = Utc
            .timestamp_opt(start, 0)
            .single()
            .ok_or_else(|| StonksError::Config(format!("invalid reference start {start}")))?;
        Ok(Self { start, days })
    }

    /// Last instant of the window.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + TimeDelta::days(i64::from(self.days))
    }

    /// Window bounds as unix seconds, the form quote APIs expect.
    pub fn as_unix_range(&self) -> (i64, i64) {
        (self.start.timestamp(), self.end().timestamp())
    }
}

impl Default for ReferenceWindow {
    fn default() -> Self {
        Self {
            start: Utc
                .timestamp_opt(DEFAULT_REFERENCE_START, 0)
                .single()
                .unwrap_or_default(),
            days: DEFAULT_REFERENCE_DAYS,
        }
    }
}

/// Configuration shared by the service and the quote provider.
#[derive(Debug, Clone)]
pub struct StonksConfig {
    /// API token for the quote provider.
    pub api_key: String,
    /// Base URL of the quote provider, without a trailing slash.
    pub base_url: String,
    /// Pipe-delimited symbol directory file.
    pub data_path: PathBuf,
    /// Executable that downloads a fresh directory file to `data_path`.
    pub refresh_script: Option<PathBuf>,
    /// Window used for the reference price.
    pub reference_window: ReferenceWindow,
    /// Timeout applied to each provider request.
    pub http_timeout: Duration,
}

impl StonksConfig {
    /// Creates a configuration with defaults for everything but the key and the data file.
    pub fn new(api_key: impl Into<String>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            data_path: data_path.into(),
            refresh_script: None,
            reference_window: ReferenceWindow::default(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Rejects configurations that cannot possibly work.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(StonksError::Config(String::from("API key is empty")));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(StonksError::Config(String::from("data path is empty")));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(StonksError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.reference_window.days == 0 {
            return Err(StonksError::Config(String::from(
                "reference window must span at least one day",
            )));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
