//! Prefix list reader.
//!
//! Lines are trimmed; blank lines and lines starting with `#` are ignored.
//! Every other line must be a prefix; failures are collected per line and
//! never abort the read.

use crate::models::{CanonicalizeError, NetworkRecord};
use crate::processing::normalize;
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// A line that could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source text.
    pub line_no: usize,
    /// Trimmed line content.
    pub text: String,
    pub error: CanonicalizeError,
}

/// Accepted networks and rejected lines from one input.
#[derive(Debug, Default)]
pub struct ParsedInput {
    /// Canonical records in input order, duplicates included.
    pub networks: Vec<NetworkRecord>,
    pub rejected: Vec<RejectedLine>,
}

/// Canonicalize every prefix line in `text`, logging a warning per bad line.
pub fn parse_lines(text: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match normalize(line) {
            Ok(network) => parsed.networks.push(network),
            Err(error) => {
                log::warn!(
                    "{skip} line {line_no}: '{line}' - {error}",
                    skip = "Skipping".yellow(),
                    line_no = i + 1,
                );
                parsed.rejected.push(RejectedLine {
                    line_no: i + 1,
                    text: line.to_string(),
                    error,
                });
            }
        }
    }

    log::debug!(
        "parsed {} networks, rejected {} lines",
        parsed.networks.len(),
        parsed.rejected.len()
    );
    parsed
}

/// Read and parse a prefix list file.
///
/// # Returns
/// * `Ok(ParsedInput)` - accepted networks and rejected lines
/// * `Err` - if the file does not exist or cannot be read
pub fn read_input(path: &str) -> Result<ParsedInput, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Input file does not exist: {path}").into());
    }
    log::info!("Reading input file: {path}");
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading input file {path}: {e}"))?;
    Ok(parse_lines(&text))
}
