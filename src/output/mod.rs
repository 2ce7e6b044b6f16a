//! Output of compacted networks.
//!
//! - [`writer`] - one CIDR per line to a file
//! - [`summary`] - reduction statistics and the terminal report

mod summary;
mod writer;

pub use summary::{print_summary, ReductionSummary};
pub use writer::{render, write_output};
