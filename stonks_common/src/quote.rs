//! Quote data model.
//!
//! A `RawQuote` is what the provider hands back; a `QuoteDetail` is the
//! enriched, display-ready record built from it for a single request.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StonksError;

/// Price snapshot for one symbol as returned by the quote provider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawQuote {
    /// Current (last traded) price.
    pub current: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Session open.
    pub open: f64,
    /// Previous session close.
    pub previous_close: f64,
}

/// Historical baseline price, or the marker that none could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ReferencePrice {
    /// Mean of the first and last close in the reference window.
    Available(f64),
    /// The symbol has no closes in the reference window.
    Unavailable,
}

impl ReferencePrice {
    /// The price, if one was computed.
    pub fn value(&self) -> Option<f64> {
        match self {
            ReferencePrice::Available(price) => Some(*price),
            ReferencePrice::Unavailable => None,
        }
    }

    /// `true` unless this is the unavailable marker.
    pub fn is_available(&self) -> bool {
        matches!(self, ReferencePrice::Available(_))
    }
}

impl fmt::Display for ReferencePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePrice::Available(price) => write!(f, "{price:5.2}"),
            ReferencePrice::Unavailable => f.write_str("n/a"),
        }
    }
}

/// Enriched quote returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDetail {
    /// Upper-cased ticker symbol.
    pub symbol: String,
    /// Current price.
    pub price: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Session open.
    pub open: f64,
    /// Previous session close.
    pub previous_close: f64,
    /// Change against the previous close, in percent.
    pub daily_change_percent: f64,
    /// Baseline from the reference window.
    pub reference_price: ReferencePrice,
    /// Company or fund description; `None` if the directory has no entry.
    pub description: Option<String>,
    /// Chat-ready rendering of the fields above.
    pub summary: String,
}

impl QuoteDetail {
    /// Encode the detail as a JSON string.
    pub fn to_json(&self) -> Result<String, StonksError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

impl fmt::Display for QuoteDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_reference_renders_as_na() {
        assert_eq!(ReferencePrice::Unavailable.to_string(), "n/a");
        assert_eq!(ReferencePrice::Unavailable.value(), None);
        assert_eq!(ReferencePrice::Available(110.0).to_string(), "110.00");
    }

    #[test]
    fn reference_price_serializes_with_status_tag() {
        let json = serde_json::to_string(&ReferencePrice::Unavailable).unwrap();
        assert_eq!(json, r#"{"status":"unavailable"}"#);
        let json = serde_json::to_string(&ReferencePrice::Available(1.5)).unwrap();
        assert_eq!(json, r#"{"status":"available","value":1.5}"#);
    }

    #[test]
    fn detail_json_carries_missing_description_as_null() {
        let detail = QuoteDetail {
            symbol: "NEW".into(),
            price: 12.0,
            high: 12.5,
            low: 11.0,
            open: 11.0,
            previous_close: 10.0,
            daily_change_percent: 20.0,
            reference_price: ReferencePrice::Unavailable,
            description: None,
            summary: String::new(),
        };
        let value: serde_json::Value = serde_json::from_str(&detail.to_json().unwrap()).unwrap();
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(value["reference_price"]["status"], "unavailable");
    }
}
