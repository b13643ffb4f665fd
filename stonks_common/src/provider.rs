//! Seam between the core and whatever fetches market data.
//!
//! The core never talks to the network itself. A `QuoteProvider` returns raw
//! quotes and historical closes; any error it returns is propagated to the
//! caller unchanged.
use crate::config::ReferenceWindow;
use crate::quote::RawQuote;
use crate::result::Result;

/// Source of quotes and historical closes.
pub trait QuoteProvider {
    /// Current price snapshot for `symbol`.
    fn quote(&self, symbol: &str) -> Result<RawQuote>;

    /// Daily closes for `symbol` inside `window`, oldest first.
    ///
    /// An empty vector means the symbol has no data in the window.
    fn daily_closes(&self, symbol: &str, window: &ReferenceWindow) -> Result<Vec<f64>>;
}

impl<P: QuoteProvider + ?Sized> QuoteProvider for Box<P> {
    fn quote(&self, symbol: &str) -> Result<RawQuote> {
        (**self).quote(symbol)
    }

    fn daily_closes(&self, symbol: &str, window: &ReferenceWindow) -> Result<Vec<f64>> {
        (**self).daily_closes(symbol, window)
    }
}
