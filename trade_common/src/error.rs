//! Error types produced while parsing dealer messages.
//!
//! The `ParseError` enum is the whole failure taxonomy of the parser. Every
//! variant carries enough context (the offending token or a short reason) to be
//! reported back to whoever produced the line.
use thiserror::Error;

/// Failure returned by the message parser and the registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Structural problem with the line: empty input, wrong token count,
    /// unknown verb or side, malformed number.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Dealer token is not one of the known dealer codes.
    #[error("Unknown dealer: {0}")]
    UnknownDealer(String),

    /// Commodity token is not one of the known commodity names.
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),
}

impl ParseError {
    /// Shorthand for building an `InvalidMessage` from anything printable.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ParseError::InvalidMessage(reason.into())
    }
}
