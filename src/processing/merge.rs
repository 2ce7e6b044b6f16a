//! The full compaction pipeline over canonical records.

use super::{coalesce, de_duplicate_networks, remove_contained};
use crate::models::NetworkRecord;

/// Reduce a set of networks to the smallest equivalent cover.
///
/// De-duplicates, sorts, drops contained networks, then coalesces siblings to
/// a fixed point. Never fails. The result is sorted by `(base, prefix_len)`,
/// contains no duplicates, no network inside another and no mergeable pair.
pub fn compact(records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
    log::info!("#Start compact() with {} networks", records.len());

    let mut records = de_duplicate_networks(records);
    records.sort();
    let records = remove_contained(records);
    let mut records = coalesce(records);
    records.sort();

    log::info!("#End compact() -> {} networks", records.len());
    records
}
