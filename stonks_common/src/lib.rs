//!
//! Core types and logic for the stonks quote bot.
//!
//! This crate aggregates:
//! - `error` — unified error type `StonksError` used across the workspace.
//! - `result` — handy `Result<T, StonksError>` alias.
//! - `config` — explicit configuration passed to the service and the provider.
//! - `quote` — raw quotes, reference prices and the enriched `QuoteDetail`.
//! - `directory` — the symbol → description lookup table loaded from disk.
//! - `enricher` — derived numbers and summary formatting for a quote.
//! - `provider` — the seam to whatever fetches prices from the outside world.
//! - `stonks` — the service tying provider, directory and enricher together.
//! - `command` — chat-style commands understood by the front end.
#![warn(missing_docs)]
pub mod command;
pub mod config;
pub mod directory;
pub mod enricher;
pub mod error;
pub mod provider;
pub mod quote;
pub mod result;
pub mod stonks;

pub use command::Command;
pub use config::StonksConfig;
pub use directory::SymbolDirectory;
pub use error::StonksError;
pub use provider::QuoteProvider;
pub use result::Result;
pub use stonks::Stonks;
