//! Per-slice order reconstruction
//!
//! Each slice is an independent one-dimensional problem: its token
//! universe is some contiguous stretch of a secret axis ordering, and
//! every response in it is a range query over that stretch, i.e. a
//! "must-be-contiguous" constraint. Feeding all of a slice's responses
//! into a consecutive-arrangement structure and reading off its frontier
//! recovers the stretch up to global reversal.
//!
//! Constraints are applied in the slice's canonical response order. No
//! search or backtracking happens at this level; constraints an
//! individual structure cannot honor are dropped silently inside it, so
//! under heavy subsampling the frontier degrades gracefully instead of
//! failing.

use crate::arrangement::ArrangementTree;
use crate::cluster::Slice;
use crate::tokenize::Label;
use std::collections::BTreeSet;

/// Reconstruct one linear order per slice. The result's label set always
/// equals the slice's token universe: reconstruction only orders labels,
/// it never drops or invents them.
pub fn order_slices(slices: &[Slice]) -> Vec<Vec<Label>> {
    slices
        .iter()
        .map(|slice| {
            let mut tree = ArrangementTree::new(slice.tokens());
            for response in &slice.responses {
                let subset: BTreeSet<Label> = response.iter().copied().collect();
                tree.constrain_contiguous(&subset);
            }
            tree.frontier()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_slices;

    fn response_set(responses: &[&[Label]]) -> BTreeSet<Vec<Label>> {
        responses.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_ordered_slice_covers_exactly_the_token_universe() {
        let responses = response_set(&[&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]);
        let slices = cluster_slices(&responses);
        let orders = order_slices(&slices);

        assert_eq!(orders.len(), slices.len());
        for (slice, order) in slices.iter().zip(&orders) {
            let ordered: BTreeSet<Label> = order.iter().copied().collect();
            assert_eq!(ordered, slice.tokens());
            assert_eq!(order.len(), slice.tokens().len());
        }
    }

    #[test]
    fn test_overlapping_ranges_recover_the_line() {
        // Responses are ranges of the line 1..=5, each sharing two
        // tokens with the next; the reconstruction must produce that
        // line up to reversal.
        let responses = response_set(&[&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]);
        let slices = cluster_slices(&responses);
        assert_eq!(slices.len(), 1);

        let orders = order_slices(&slices);
        let forward = vec![1, 2, 3, 4, 5];
        let mut backward = forward.clone();
        backward.reverse();
        assert!(orders[0] == forward || orders[0] == backward);
    }

    #[test]
    fn test_singleton_slice_orders_to_one_label() {
        let responses = response_set(&[&[9]]);
        let slices = cluster_slices(&responses);
        let orders = order_slices(&slices);
        assert_eq!(orders, vec![vec![9]]);
    }

    #[test]
    fn test_empty_slice_list() {
        let orders = order_slices(&[]);
        assert!(orders.is_empty());
    }
}
