//! Blocking Finnhub adapter implementing `QuoteProvider`.
//!
//! The token is sent in the `X-Finnhub-Token` header rather than the query
//! string so it does not end up in logged URLs.
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use stonks_common::config::ReferenceWindow;
use stonks_common::quote::RawQuote;
use stonks_common::{QuoteProvider, Result, StonksConfig, StonksError};

use crate::model::candles::CandleResponse;
use crate::model::quote::QuoteResponse;

const TOKEN_HEADER: &str = "X-Finnhub-Token";
/// Candle resolution used for the reference window.
const DAILY: &str = "D";

/// HTTP client for the Finnhub REST API.
pub struct FinnhubProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FinnhubProvider {
    /// Creates a provider from the shared configuration.
    pub fn new(config: &StonksConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(provider_error)?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(query)
            .header(TOKEN_HEADER, &self.api_key)
            .send()
            .map_err(provider_error)?;

        info!("GET {}: {}", response.url().path(), response.status());
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        debug!("Error body: {}", body);
        return Err(StonksError::Provider(format!("response status {status}")));
    }
    response.json().map_err(provider_error)
}

fn provider_error(err: reqwest::Error) -> StonksError {
    StonksError::Provider(err.without_url().to_string())
}

impl QuoteProvider for FinnhubProvider {
    fn quote(&self, symbol: &str) -> Result<RawQuote> {
        let response: QuoteResponse = self.get("quote", &[("symbol", symbol.to_string())])?;
        Ok(response.into())
    }

    fn daily_closes(&self, symbol: &str, window: &ReferenceWindow) -> Result<Vec<f64>> {
        let (from, to) = window.as_unix_range();
        let response: CandleResponse = self.get(
            "stock/candle",
            &[
                ("symbol", symbol.to_string()),
                ("resolution", DAILY.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ],
        )?;
        let status = response.status.clone();
        response.into_closes().ok_or_else(|| {
            StonksError::Provider(format!("unexpected candle status '{status}' for {symbol}"))
        })
    }
}
