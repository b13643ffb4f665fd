//! Error types shared between the core and the client binary.
//!
//! `StonksError` separates "nothing to show for this symbol" conditions
//! (`SymbolNotFound`, `NoData`, `DataUnavailable`) from failures of the outside
//! world (`Provider`, `Io`), so callers can decide what to tell the user.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the core and the client.
#[derive(Error, Debug)]
pub enum StonksError {
    /// I/O error while reading the directory file or running the refresh script.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The directory file exists but could not be parsed.
    #[error("Parse directory file error: {0}")]
    ParseDirectory(String),

    /// The symbol has no entry in the directory.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered, but with an all-zero quote for this symbol.
    #[error("No data found for symbol {0}")]
    NoData(String),

    /// A derived value could not be computed from the fetched prices.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Transport, authentication or decoding failure of the quote provider.
    #[error("Quote provider error: {0}")]
    Provider(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A chat line that does not form a known command.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Pulling a fresh directory file failed.
    #[error("Refresh failed: {0}")]
    Refresh(String),

    /// Missing or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error indicating a poisoned lock was encountered.
    #[error("Lock Poisoned: {0}")]
    MutexLock(String),
}

impl StonksError {
    /// Whether the error means "nothing known about this symbol" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StonksError::SymbolNotFound(_) | StonksError::NoData(_))
    }
}

impl<T> From<PoisonError<T>> for StonksError {
    fn from(err: PoisonError<T>) -> Self {
        StonksError::MutexLock(err.to_string())
    }
}

impl From<csv::Error> for StonksError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            if let csv::ErrorKind::Io(io_err) = err.into_kind() {
                return StonksError::Io(io_err);
            }
            return StonksError::ParseDirectory(String::from("unreadable file"));
        }
        StonksError::ParseDirectory(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_directory_and_empty_quotes() {
        assert!(StonksError::SymbolNotFound("X".into()).is_not_found());
        assert!(StonksError::NoData("X".into()).is_not_found());
        assert!(!StonksError::Provider("timeout".into()).is_not_found());
        assert!(!StonksError::DataUnavailable("pc".into()).is_not_found());
    }

    #[test]
    fn no_data_message_names_symbol() {
        let err = StonksError::NoData("ZZZZ".into());
        assert_eq!(err.to_string(), "No data found for symbol ZZZZ");
    }
}
