//! Payload types returned by the Finnhub REST API.
//!
//! - `quote` — `/quote` snapshot.
//! - `candles` — `/stock/candle` daily series.
pub mod candles;
pub mod quote;
