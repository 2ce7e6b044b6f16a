//! Compacts lists of IPv4 prefixes into the smallest equivalent set.
//!
//! Inputs are canonicalized (host bits zeroed, prefixes finer than /24
//! widened to their /24), de-duplicated, stripped of networks covered by
//! larger ones, and sibling networks are coalesced until nothing more merges.

pub mod cli;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use input::{parse_lines, ParsedInput, RejectedLine};
use models::NetworkRecord;
use output::ReductionSummary;

/// Compacted networks together with what was skipped on the way in.
#[derive(Debug)]
pub struct CompactOutcome {
    /// Sorted, minimal cover of the accepted input.
    pub networks: Vec<NetworkRecord>,
    pub rejected: Vec<RejectedLine>,
    pub summary: ReductionSummary,
}

/// Compact already parsed input.
pub fn compact_parsed(parsed: ParsedInput) -> CompactOutcome {
    let original = parsed.networks.len();
    let networks = processing::compact(parsed.networks);
    let summary = ReductionSummary::new(original, networks.len());
    CompactOutcome {
        networks,
        rejected: parsed.rejected,
        summary,
    }
}

/// Parse a prefix list and compact it, without touching the filesystem.
pub fn compact_lines(text: &str) -> CompactOutcome {
    compact_parsed(parse_lines(text))
}
