//! `/quote` payload.
//!
//! Unknown symbols come back as HTTP 200 with every price set to zero and the
//! change fields set to `null`, so every field defaults.
use serde::Deserialize;
use stonks_common::quote::RawQuote;

/// Price snapshot as sent by Finnhub.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteResponse {
    /// Current price.
    #[serde(rename = "c", default)]
    pub current_price: f64,
    /// Session high.
    #[serde(rename = "h", default)]
    pub high_price: f64,
    /// Session low.
    #[serde(rename = "l", default)]
    pub low_price: f64,
    /// Session open.
    #[serde(rename = "o", default)]
    pub open_price: f64,
    /// Previous close.
    #[serde(rename = "pc", default)]
    pub previous_close_price: f64,
}

impl From<QuoteResponse> for RawQuote {
    fn from(response: QuoteResponse) -> Self {
        RawQuote {
            current: response.current_price,
            high: response.high_price,
            low: response.low_price,
            open: response.open_price,
            previous_close: response.previous_close_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_quote() {
        let json = r#"{"c":261.74,"d":-1.2,"dp":-0.456,"h":263.31,"l":260.68,"o":261.07,"pc":262.94,"t":1582641000}"#;
        let quote: RawQuote = serde_json::from_str::<QuoteResponse>(json).unwrap().into();
        assert_eq!(quote.current, 261.74);
        assert_eq!(quote.high, 263.31);
        assert_eq!(quote.low, 260.68);
        assert_eq!(quote.open, 261.07);
        assert_eq!(quote.previous_close, 262.94);
    }

    #[test]
    fn decodes_unknown_symbol_as_zeros() {
        let json = r#"{"c":0,"d":null,"dp":null,"h":0,"l":0,"o":0,"pc":0,"t":0}"#;
        let quote: RawQuote = serde_json::from_str::<QuoteResponse>(json).unwrap().into();
        assert_eq!(quote, RawQuote::default());
    }
}
