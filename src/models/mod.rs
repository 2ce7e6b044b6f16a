//! Domain models for subnet compaction.
//!
//! - [`NetworkRecord`] - canonical, network-aligned IPv4 block capped at /24
//! - [`CanonicalizeError`] - per-line canonicalization failures

mod error;
mod network;

// Re-export public types
pub use error::CanonicalizeError;
pub use network::{block_size, prefix_mask, NetworkRecord, IPV4_BITS, MAX_PREFIX_LENGTH};
