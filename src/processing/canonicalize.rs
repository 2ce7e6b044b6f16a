//! Turns raw `<ip>/<prefix>` strings into canonical [`NetworkRecord`]s.

use crate::models::{CanonicalizeError, NetworkRecord};
use std::net::Ipv4Addr;

/// Parse and canonicalize one prefix string.
///
/// The declared prefix is capped at /24 and host bits are zeroed, so
/// `10.0.0.5/32` becomes `10.0.0.0/24`. Prefixes above 32 are not rejected,
/// they are capped like any other.
///
/// # Errors
/// * [`CanonicalizeError::Format`] - not exactly two `/` separated parts, or a
///   prefix that is not a plain non-negative integer
/// * [`CanonicalizeError::AddressParse`] - address is not a dotted quad
pub fn normalize(input: &str) -> Result<NetworkRecord, CanonicalizeError> {
    let input = input.trim();
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 2 {
        return Err(CanonicalizeError::Format {
            input: input.to_string(),
        });
    }

    let addr: Ipv4Addr = parts[0]
        .parse()
        .map_err(|_| CanonicalizeError::AddressParse {
            address: parts[0].to_string(),
        })?;

    let prefix = parse_prefix(parts[1]).ok_or_else(|| CanonicalizeError::Format {
        input: input.to_string(),
    })?;

    Ok(NetworkRecord::new(addr, prefix))
}

/// Digits only. Values too large for u32 saturate, they get capped anyway.
fn parse_prefix(prefix: &str) -> Option<u32> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(prefix.parse().unwrap_or(u32::MAX))
}
