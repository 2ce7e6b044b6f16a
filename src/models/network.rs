//! Canonical IPv4 network record and prefix-mask utilities.
//!
//! Provides [`NetworkRecord`], a network-aligned CIDR block whose prefix is
//! never finer than [`MAX_PREFIX_LENGTH`], along with the mask helpers the
//! merge stages build on.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::CanonicalizeError;

/// Number of bits in an IPv4 address.
pub const IPV4_BITS: u8 = 32;

/// Finest prefix a record may carry. Anything more specific is widened to
/// the enclosing /24.
pub const MAX_PREFIX_LENGTH: u8 = 24;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above 32 are treated as /32.
///
/// # Examples
/// ```
/// use subnet_compact::models::prefix_mask;
/// assert_eq!(prefix_mask(24), 0xFFFFFF00);
/// assert_eq!(prefix_mask(0), 0);
/// ```
pub fn prefix_mask(len: u8) -> u32 {
    let right_len = u32::from(IPV4_BITS.saturating_sub(len));
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (IPV4_BITS - len.min(IPV4_BITS))
}

/// An IPv4 network in canonical form.
///
/// The base address always has its host bits zeroed and the prefix length is
/// never above [`MAX_PREFIX_LENGTH`]. Ordering is by `(base, prefix_len)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkRecord {
    base: u32,
    prefix_len: u8,
}

impl NetworkRecord {
    /// Build a record from any address and declared prefix length.
    ///
    /// The prefix is capped at /24 and the address is cut down to the network
    /// address of the capped prefix.
    pub fn new(addr: Ipv4Addr, prefix_len: u32) -> NetworkRecord {
        let prefix_len = prefix_len.min(u32::from(MAX_PREFIX_LENGTH)) as u8;
        NetworkRecord {
            base: u32::from(addr) & prefix_mask(prefix_len),
            prefix_len,
        }
    }

    /// Network (lowest) address.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    /// Network address as an integer.
    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn mask(&self) -> u32 {
        prefix_mask(self.prefix_len)
    }

    /// Number of addresses covered, `2^(32 - prefix_len)`.
    pub fn block_size(&self) -> u64 {
        block_size(self.prefix_len)
    }

    /// Highest (broadcast) address in the network.
    pub fn last_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base | !self.mask())
    }

    /// True when `other` lies entirely inside `self` and is strictly smaller.
    ///
    /// Equal networks do not contain each other.
    pub fn contains(&self, other: &NetworkRecord) -> bool {
        self.prefix_len < other.prefix_len && other.base & self.mask() == self.base
    }

    /// Combine `self` with the block right after it into their common supernet.
    ///
    /// Returns `None` unless both halves have the same prefix, `next` starts
    /// exactly one block after `self`, and `self` sits on the boundary of the
    /// one-bit-shorter prefix. Two adjacent blocks that straddle that boundary
    /// (e.g. `10.0.1.0/24` and `10.0.2.0/24`) are not siblings.
    pub fn merge_with(&self, next: &NetworkRecord) -> Option<NetworkRecord> {
        if self.prefix_len != next.prefix_len || self.prefix_len == 0 {
            return None;
        }
        let parent_len = self.prefix_len - 1;
        if u64::from(next.base) != u64::from(self.base) + self.block_size() {
            return None;
        }
        if self.base & prefix_mask(parent_len) != self.base {
            return None;
        }
        Some(NetworkRecord::new(self.network(), u32::from(parent_len)))
    }
}

impl std::fmt::Display for NetworkRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len)
    }
}

impl FromStr for NetworkRecord {
    type Err = CanonicalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::processing::normalize(s)
    }
}

impl Serialize for NetworkRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkRecord {
    fn deserialize<D>(deserializer: D) -> Result<NetworkRecord, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
