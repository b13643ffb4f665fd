//! `/stock/candle` payload.
use serde::Deserialize;

/// Status Finnhub reports when the window holds no candles.
pub const NO_DATA: &str = "no_data";
/// Status of a successful candle response.
pub const OK: &str = "ok";

/// Daily candle series; only closes are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct CandleResponse {
    /// Close prices, oldest first.
    #[serde(rename = "c", default)]
    pub closes: Vec<f64>,
    /// `ok` or `no_data`.
    #[serde(rename = "s")]
    pub status: String,
}

impl CandleResponse {
    /// Closes for the window; `None` if the status is neither `ok` nor `no_data`.
    pub fn into_closes(self) -> Option<Vec<f64>> {
        match self.status.as_str() {
            OK => Some(self.closes),
            NO_DATA => Some(Vec::new()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_keeps_closes() {
        let json = r#"{"c":[321.45,323.62,320.03],"h":[1,2,3],"l":[1,2,3],"o":[1,2,3],"s":"ok","t":[1,2,3],"v":[1,2,3]}"#;
        let candles: CandleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(candles.into_closes(), Some(vec![321.45, 323.62, 320.03]));
    }

    #[test]
    fn no_data_is_an_empty_series() {
        let candles: CandleResponse = serde_json::from_str(r#"{"s":"no_data"}"#).unwrap();
        assert_eq!(candles.into_closes(), Some(Vec::new()));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let candles: CandleResponse = serde_json::from_str(r#"{"s":"error"}"#).unwrap();
        assert_eq!(candles.into_closes(), None);
    }
}
