//! Result type alias for the parser crate.
//!
//! Defaults the error type to `ParseError`, so functions can simply return
//! `Result<T>`.
use crate::error::ParseError;

/// Crate-wide `Result` alias with `ParseError` as the default error.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
