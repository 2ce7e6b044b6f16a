//! Iterative coalescing of sibling networks into their supernets.
//!
//! Each pass walks the sorted set once, folding `a/p` + `a+2^(32-p)/p` into
//! `a/(p-1)`. The output of a pass is kept as a stack so a freshly merged
//! network can fold again into the one just below it, letting runs like four
//! consecutive /24s collapse into a /22 within a single pass. Passes repeat
//! until one makes no merge.

use crate::models::NetworkRecord;

/// Result of a single coalescing pass.
#[derive(Debug)]
pub struct PassResult {
    pub records: Vec<NetworkRecord>,
    pub merges: usize,
}

/// Run one left-to-right pass over records sorted by `(base, prefix_len)`.
pub fn coalesce_pass(records: &[NetworkRecord]) -> PassResult {
    let mut stack: Vec<NetworkRecord> = Vec::with_capacity(records.len());
    let mut merges = 0;
    let mut i = 0;

    while i < records.len() {
        let current = records[i];
        let merged = records
            .get(i + 1)
            .and_then(|next| current.merge_with(next));

        match merged {
            Some(mut merged) => {
                log::trace!("merge {} + {} -> {}", current, records[i + 1], merged);
                merges += 1;
                // cascade into what is already on the stack
                while let Some(top) = stack.last() {
                    match top.merge_with(&merged) {
                        Some(parent) => {
                            log::trace!("cascade {} + {} -> {}", top, merged, parent);
                            merges += 1;
                            merged = parent;
                            stack.pop();
                        }
                        None => break,
                    }
                }
                stack.push(merged);
                // the right half is consumed
                i += 2;
            }
            None => {
                stack.push(current);
                i += 1;
            }
        }
    }

    PassResult {
        records: stack,
        merges,
    }
}

/// Coalesce until a fixed point is reached. Returns the records sorted.
///
/// Expects a set free of duplicates and contained networks.
pub fn coalesce(mut records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
    let mut pass = 0;
    loop {
        records.sort();
        pass += 1;
        let result = coalesce_pass(&records);
        log::debug!(
            "coalesce pass {}: {} -> {} networks ({} merges)",
            pass,
            records.len(),
            result.records.len(),
            result.merges
        );
        records = result.records;
        if result.merges == 0 {
            break;
        }
    }
    records.sort();
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalize;

    fn nets(list: &[&str]) -> Vec<NetworkRecord> {
        list.iter().map(|s| normalize(s).unwrap()).collect()
    }

    fn strings(records: &[NetworkRecord]) -> Vec<String> {
        records.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_pass_merges_pair() {
        let result = coalesce_pass(&nets(&["10.0.0.0/24", "10.0.1.0/24"]));
        assert_eq!(strings(&result.records), vec!["10.0.0.0/23"]);
        assert_eq!(result.merges, 1);
    }

    #[test]
    fn test_pass_cascades_four() {
        let result = coalesce_pass(&nets(&[
            "10.0.0.0/24",
            "10.0.1.0/24",
            "10.0.2.0/24",
            "10.0.3.0/24",
        ]));
        assert_eq!(strings(&result.records), vec!["10.0.0.0/22"]);
        assert_eq!(result.merges, 3);
    }

    #[test]
    fn test_pass_cascades_eight() {
        let input: Vec<String> = (0..8).map(|i| format!("10.0.{i}.0/24")).collect();
        let input: Vec<&str> = input.iter().map(|s| s.as_str()).collect();
        let result = coalesce_pass(&nets(&input));
        assert_eq!(strings(&result.records), vec!["10.0.0.0/21"]);
    }

    #[test]
    fn test_pass_three_leaves_remainder() {
        let result = coalesce_pass(&nets(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]));
        assert_eq!(strings(&result.records), vec!["10.0.0.0/23", "10.0.2.0/24"]);
    }

    #[test]
    fn test_pass_consumed_half_not_reused() {
        // 10.0.1.0/24 is used by the first merge and must not pair with 10.0.2.0/24
        let result = coalesce_pass(&nets(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]));
        assert_eq!(result.merges, 1);
    }

    #[test]
    fn test_pass_no_merge_on_gap() {
        let result = coalesce_pass(&nets(&["10.0.0.0/24", "10.0.2.0/24"]));
        assert_eq!(result.merges, 0);
        assert_eq!(strings(&result.records), vec!["10.0.0.0/24", "10.0.2.0/24"]);
    }

    #[test]
    fn test_pass_no_merge_across_boundary() {
        let result = coalesce_pass(&nets(&["10.0.1.0/24", "10.0.2.0/24"]));
        assert_eq!(result.merges, 0);
    }

    #[test]
    fn test_coalesce_needs_second_pass() {
        // 10.0.2.0/23 is pushed without a merge of its own, so it only meets
        // the freshly built 10.0.0.0/23 in the next pass
        let input = nets(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/23"]);
        let first = coalesce_pass(&input);
        assert_eq!(strings(&first.records), vec!["10.0.0.0/23", "10.0.2.0/23"]);
        assert_eq!(strings(&coalesce(input)), vec!["10.0.0.0/22"]);
    }

    #[test]
    fn test_pass_cascade_onto_unmerged_top() {
        let result = coalesce_pass(&nets(&["10.0.0.0/23", "10.0.2.0/24", "10.0.3.0/24"]));
        assert_eq!(strings(&result.records), vec!["10.0.0.0/22"]);
        assert_eq!(result.merges, 2);
    }

    #[test]
    fn test_coalesce_mixed_sizes() {
        let result = coalesce(nets(&[
            "10.0.4.0/22",
            "10.0.0.0/24",
            "10.0.1.0/24",
            "10.0.2.0/23",
            "10.1.0.0/24",
        ]));
        assert_eq!(strings(&result), vec!["10.0.0.0/21", "10.1.0.0/24"]);
    }

    #[test]
    fn test_coalesce_sorts_unsorted_input() {
        let result = coalesce(nets(&["192.168.0.0/24", "10.0.0.0/24"]));
        assert_eq!(strings(&result), vec!["10.0.0.0/24", "192.168.0.0/24"]);
    }

    #[test]
    fn test_coalesce_whole_space() {
        let result = coalesce(nets(&["128.0.0.0/1", "0.0.0.0/1"]));
        assert_eq!(strings(&result), vec!["0.0.0.0/0"]);
    }

    #[test]
    fn test_coalesce_empty_and_single() {
        assert!(coalesce(vec![]).is_empty());
        assert_eq!(strings(&coalesce(nets(&["1.2.3.0/24"]))), vec!["1.2.3.0/24"]);
    }
}
