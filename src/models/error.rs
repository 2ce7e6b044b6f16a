//! Errors raised while canonicalizing a single input prefix.

use std::error::Error;
use std::fmt;

/// Why one raw prefix string could not be turned into a [`super::NetworkRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalizeError {
    /// Not of the form `<ip>/<prefix>`, or the prefix is not a non-negative integer.
    Format { input: String },
    /// The address part is not a valid dotted-quad IPv4 address.
    AddressParse { address: String },
}

impl fmt::Display for CanonicalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalizeError::Format { input } => {
                write!(f, "invalid CIDR format, expected <ip>/<prefix>: '{input}'")
            }
            CanonicalizeError::AddressParse { address } => {
                write!(f, "invalid IPv4 address: '{address}'")
            }
        }
    }
}

impl Error for CanonicalizeError {}
