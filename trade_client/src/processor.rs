//! Feeding message lines through the parser.
//!
//! `MessageProcessor` reads lines from any `BufRead`, parses each one with
//! `trade_common::parse_message`, writes accepted commands to a `Write` sink in
//! the configured format, and logs rejected lines.
use std::io::{BufRead, Write};

use log::{debug, warn};
use serde::Serialize;
use trade_common::{Command, parse_message};

use crate::args::OutputFormat;
use crate::error::ClientError;
use crate::result::Result;

/// Counters reported once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a command.
    pub accepted: usize,
    /// Lines the parser rejected.
    pub rejected: usize,
}

/// JSON record written for each accepted line.
#[derive(Serialize)]
struct Accepted<'a> {
    line: usize,
    command: &'a Command,
}

/// Runs every input line through the parser.
pub struct MessageProcessor {
    format: OutputFormat,
    fail_fast: bool,
}

impl MessageProcessor {
    /// Create a processor writing in `format`; with `fail_fast` the first
    /// rejected line aborts the run.
    pub fn new(format: OutputFormat, fail_fast: bool) -> Self {
        Self { format, fail_fast }
    }

    /// Process all lines of `reader`, writing accepted commands to `out`.
    ///
    /// Blank lines are skipped. Rejections are logged and counted unless
    /// `fail_fast` is set, in which case the first one is returned as
    /// `ClientError::Rejected`.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut out: W) -> Result<Summary> {
        let mut summary = Summary::default();

        for (idx, line_result) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_message(&line) {
                Ok(command) => {
                    debug!("Line {}: parsed {:?}", line_no, command);
                    self.write_command(&mut out, line_no, &command)?;
                    summary.accepted += 1;
                }
                Err(e) if self.fail_fast => {
                    return Err(ClientError::Rejected {
                        line: line_no,
                        source: e,
                    });
                }
                Err(e) => {
                    warn!("Line {}: rejected '{}': {}", line_no, line.trim(), e);
                    summary.rejected += 1;
                }
            }
        }
        out.flush()?;
        Ok(summary)
    }

    fn write_command<W: Write>(&self, out: &mut W, line: usize, command: &Command) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}: {}", line, command)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &Accepted { line, command })?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
