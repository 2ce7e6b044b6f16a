//! Duplicate removal for canonical network records.

use crate::models::NetworkRecord;
use itertools::Itertools;

/// Collapse records sharing the same canonical form.
///
/// First occurrences are kept; the result is not sorted.
pub fn de_duplicate_networks(records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
    let before = records.len();
    let unique: Vec<NetworkRecord> = records.into_iter().unique().collect();
    log::debug!(
        "de-duplicate: {} -> {} networks ({} duplicates)",
        before,
        unique.len(),
        before - unique.len()
    );
    unique
}
