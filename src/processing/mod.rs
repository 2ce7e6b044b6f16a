//! Subnet compaction logic.
//!
//! - [`canonicalize`] - parsing raw prefixes into canonical records
//! - [`dedup`] - removal of duplicate records
//! - [`containment`] - removal of networks covered by larger ones
//! - [`coalesce`] - folding sibling networks into supernets
//! - [`merge`] - the whole pipeline

mod canonicalize;
mod coalesce;
mod containment;
mod dedup;
mod merge;

// Re-export public functions
pub use canonicalize::normalize;
pub use coalesce::{coalesce, coalesce_pass, PassResult};
pub use containment::remove_contained;
pub use dedup::de_duplicate_networks;
pub use merge::compact;
