//! Command-line arguments for the trade client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};

/// How accepted commands are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
    /// `<line>: <canonical command>`
    Text,
    /// One JSON object per accepted line.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a file with one message per line. Reads stdin when omitted.
    #[clap(long)]
    pub path: Option<String>,

    /// Output format for accepted messages.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop at the first rejected message and exit with its error.
    #[clap(long)]
    pub fail_fast: bool,
}
