//! Command-line arguments for the stonks client.
//!
//! Every option can also come from the environment (or a `.env` file), which is
//! how the API key is normally supplied.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use stonks_common::config::{
    DEFAULT_BASE_URL, DEFAULT_REFERENCE_DAYS, DEFAULT_REFERENCE_START, DEFAULT_TIMEOUT_SECS,
    ReferenceWindow,
};
use stonks_common::{Result, StonksConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Finnhub API token.
    #[clap(long, env = "FINNHUB_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Pipe-delimited symbol directory (SYMBOL|DESCRIPTION|...).
    #[clap(long, env = "STONKS_DATA_PATH", default_value = "stonksdata.txt")]
    pub data_path: PathBuf,

    /// Executable that downloads a fresh directory file; receives the data path as argument.
    #[clap(long, env = "STONKS_REFRESH_SCRIPT")]
    pub refresh_script: Option<PathBuf>,

    /// Quote API base URL.
    #[clap(long, env = "FINNHUB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Start of the reference window, unix seconds.
    #[clap(long, default_value_t = DEFAULT_REFERENCE_START)]
    pub reference_start: i64,

    /// Length of the reference window in days.
    #[clap(long, default_value_t = DEFAULT_REFERENCE_DAYS)]
    pub reference_days: u32,

    /// HTTP timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print one-shot quotes as JSON instead of the chat summary.
    #[clap(long)]
    pub json: bool,

    /// Symbols to quote once and exit. Without any, commands are read from stdin.
    pub symbols: Vec<String>,
}

impl Args {
    /// Builds and validates the runtime configuration.
    pub fn to_config(&self) -> Result<StonksConfig> {
        let config = StonksConfig {
            api_key: self.api_key.trim().to_string(),
            base_url: self.base_url.trim().to_string(),
            data_path: self.data_path.clone(),
            refresh_script: self.refresh_script.clone(),
            reference_window: ReferenceWindow::from_timestamp(
                self.reference_start,
                self.reference_days,
            )?,
            http_timeout: Duration::from_secs(self.timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }
}
