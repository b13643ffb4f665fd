//! The quote service.
//!
//! `Stonks` owns a quote provider and the symbol directory and answers the
//! three requests the bot needs: an enriched quote, a bare price, and
//! reloading/refreshing the directory.
//!
//! Error policy:
//! - Loading the directory in `Stonks::new` is the only failure the caller is
//!   expected to treat as fatal.
//! - Everything else is per request and returned for display; a failed reload
//!   or refresh keeps the directory that was already loaded.
use std::path::PathBuf;
use std::process;

use log::{error, info, warn};

use crate::config::{ReferenceWindow, StonksConfig};
use crate::directory::SymbolDirectory;
use crate::enricher;
use crate::error::StonksError;
use crate::provider::QuoteProvider;
use crate::quote::QuoteDetail;
use crate::result::Result;

/// Quote service combining a provider with the symbol directory.
pub struct Stonks<P> {
    provider: P,
    directory: SymbolDirectory,
    reference_window: ReferenceWindow,
    refresh_script: Option<PathBuf>,
}

impl<P: QuoteProvider> Stonks<P> {
    /// Creates the service, loading the directory named in `config`.
    pub fn new(provider: P, config: &StonksConfig) -> Result<Self> {
        let directory = SymbolDirectory::load(config.data_path.clone())?;
        Ok(Self::with_directory(provider, directory, config))
    }

    /// Creates the service around an already loaded directory.
    pub fn with_directory(provider: P, directory: SymbolDirectory, config: &StonksConfig) -> Self {
        Self {
            provider,
            directory,
            reference_window: config.reference_window,
            refresh_script: config.refresh_script.clone(),
        }
    }

    /// Fetches and enriches a quote for `symbol`.
    ///
    /// A symbol missing from the directory is not an error here: the detail is
    /// returned without a description.
    pub fn quote(&self, symbol: &str) -> Result<QuoteDetail> {
        let symbol = symbol.trim().to_uppercase();
        info!("Looking up stock quote: {}", symbol);

        let raw = self.provider.quote(&symbol)?;
        enricher::validate(&symbol, &raw)?;
        info!("{:?}", raw);

        let closes = self.provider.daily_closes(&symbol, &self.reference_window)?;
        let reference = enricher::reference_price(&closes);
        if !reference.is_available() {
            info!(
                "{} has no closes after {}, no reference price calculated",
                symbol,
                self.reference_window.start.format("%Y-%m-%d")
            );
        }

        let description = match self.directory.lookup(&symbol) {
            Ok(description) => Some(description),
            Err(StonksError::SymbolNotFound(_)) => {
                warn!("No description for {}", symbol);
                None
            }
            Err(e) => return Err(e),
        };

        enricher::build_detail(&symbol, &raw, reference, description)
    }

    /// Current price of `symbol`, without enrichment.
    pub fn current_price(&self, symbol: &str) -> Result<f64> {
        let symbol = symbol.trim().to_uppercase();
        info!("Looking up stock price: {}", symbol);

        let raw = self.provider.quote(&symbol)?;
        enricher::validate(&symbol, &raw)?;
        Ok(raw.current)
    }

    /// Re-reads the directory file. Returns the number of symbols loaded.
    pub fn reload_descriptions(&self) -> Result<usize> {
        self.directory.reload()
    }

    /// Runs the refresh script to download a fresh directory file, then reloads it.
    ///
    /// The script receives the directory path as its only argument.
    pub fn refresh_descriptions(&self) -> Result<usize> {
        let script = self
            .refresh_script
            .as_ref()
            .ok_or_else(|| StonksError::Refresh(String::from("no refresh script configured")))?;

        info!("Pulling new descriptions with {}", script.display());
        let output = process::Command::new(script)
            .arg(self.directory.path())
            .output()
            .map_err(|e| {
                error!("Error pulling new descriptions: {}", e);
                StonksError::Refresh(format!("{}: {}", script.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Error pulling new descriptions: {} {}", output.status, stderr.trim());
            return Err(StonksError::Refresh(format!(
                "{} exited with {}",
                script.display(),
                output.status
            )));
        }

        self.reload_descriptions()
    }

    /// The provider quotes are fetched from.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The directory backing description lookups.
    pub fn directory(&self) -> &SymbolDirectory {
        &self.directory
    }
}
