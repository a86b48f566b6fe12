//! Error types used across the trade client.
//!
//! The `ClientError` enum unifies I/O, message parsing, and serialization errors so that
//! they can be propagated easily with `Result<T, ClientError>`.
use std::io;
use thiserror::Error;
use trade_common::ParseError;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum ClientError {
    /// I/O error while reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A message line was rejected by the parser.
    #[error("Line {line}: {source}")]
    Rejected {
        /// 1-based line number in the input.
        line: usize,
        /// Why the parser rejected it.
        source: ParseError,
    },
    /// Failure while encoding a command as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
