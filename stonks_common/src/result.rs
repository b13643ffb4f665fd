//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `StonksError`, so functions can simply
//! return `Result<T>`.
use crate::error::StonksError;

/// Workspace-wide `Result` alias with `StonksError` as the default error.
pub type Result<T, E = StonksError> = std::result::Result<T, E>;
