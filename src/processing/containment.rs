//! Removal of networks already covered by a larger network in the set.

use crate::models::NetworkRecord;

/// Drop every record that lies inside another, strictly larger, record.
///
/// Every record is checked against every other one, since a covering network
/// need not be a neighbour in sorted order. Input order is preserved.
pub fn remove_contained(records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
    let covered: Vec<bool> = records
        .iter()
        .map(|inner| {
            if let Some(outer) = records.iter().find(|outer| outer.contains(inner)) {
                log::trace!("{inner} is contained in {outer}, removing");
                true
            } else {
                false
            }
        })
        .collect();

    let before = records.len();
    let kept: Vec<NetworkRecord> = records
        .into_iter()
        .zip(covered)
        .filter_map(|(record, covered)| (!covered).then_some(record))
        .collect();
    log::debug!(
        "containment filter: {} -> {} networks",
        before,
        kept.len()
    );
    kept
}
