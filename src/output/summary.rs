//! Reduction statistics.

use colored::Colorize;
use std::fmt;

/// How much a compaction shrank the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionSummary {
    /// Accepted input networks, before de-duplication.
    pub original: usize,
    /// Networks left after compaction.
    pub merged: usize,
}

impl ReductionSummary {
    pub fn new(original: usize, merged: usize) -> ReductionSummary {
        ReductionSummary { original, merged }
    }

    pub fn removed(&self) -> usize {
        self.original.saturating_sub(self.merged)
    }

    /// Percentage of entries removed; 0 for an empty input.
    pub fn percent(&self) -> f64 {
        if self.original == 0 {
            0.0
        } else {
            100.0 * self.removed() as f64 / self.original as f64
        }
    }
}

impl fmt::Display for ReductionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "original: {}, merged: {}, reduced by {} ({:.1}%)",
            self.original,
            self.merged,
            self.removed(),
            self.percent()
        )
    }
}

/// Print the summary report to stdout.
pub fn print_summary(summary: &ReductionSummary, rejected: usize) {
    log::info!("Summary: {summary}");
    println!("{:>18} {}", "Original subnets:", summary.original);
    println!("{:>18} {}", "Merged subnets:", summary.merged.to_string().green());
    println!(
        "{:>18} {} ({})",
        "Reduction:",
        summary.removed(),
        format!("{:.1}%", summary.percent()).green()
    );
    if rejected > 0 {
        println!(
            "{:>18} {}",
            "Skipped lines:",
            rejected.to_string().on_red()
        );
    }
}
