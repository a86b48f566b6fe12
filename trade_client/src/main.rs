//! Trade Client — reads dealer messages, one per line, from a file or stdin, parses
//! each with `trade_common` and prints the accepted commands to stdout. Rejected lines
//! are logged with their line number and the reason.
//!
//! Usage example (CLI):
//! ```bash
//! trade_client --path ./messages.txt --format json
//! echo "DB POST SELL RICE 1 10.5" | trade_client
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).
#![warn(missing_docs)]
mod args;
mod error;
mod processor;
mod result;

use crate::args::Args;
use crate::error::ClientError;
use crate::processor::MessageProcessor;
use crate::result::Result;
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

fn main() -> Result<(), ClientError> {
    init_logger();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match args.path.as_deref() {
        Some(raw) => {
            let file_path = normalize_path(raw);
            info!("Reading messages from {}", file_path.display());
            Box::new(BufReader::new(File::open(file_path)?))
        }
        None => {
            info!("Reading messages from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let processor = MessageProcessor::new(args.format, args.fail_fast);
    let summary = processor.run(reader, io::stdout().lock())?;

    info!(
        "Done: {} accepted, {} rejected",
        summary.accepted, summary.rejected
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
