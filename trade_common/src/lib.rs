//!
//! Parser for single-line dealer trading messages.
//!
//! This crate aggregates:
//! - `error` — `ParseError`, the parser's failure taxonomy.
//! - `result` — handy `Result<T, ParseError>` alias.
//! - `dealer` — known dealer codes.
//! - `commodity` — known commodities.
//! - `side` — buy/sell side of a post.
//! - `command` — the `Command` variants a line can produce.
//! - `parser` — `parse_message`, the line-to-`Command` entry point.
#![warn(missing_docs)]
pub mod command;
pub mod commodity;
pub mod dealer;
pub mod error;
pub mod parser;
pub mod result;
pub mod side;

pub use command::Command;
pub use error::ParseError;
pub use parser::parse_message;
pub use result::Result;
