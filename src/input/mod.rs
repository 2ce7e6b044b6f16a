//! Reading prefix lists from text.
//!
//! - [`reader`] - line filtering and per-line canonicalization

mod reader;

pub use reader::{parse_lines, read_input, ParsedInput, RejectedLine};
