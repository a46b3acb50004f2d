//! Greedy clustering of responses into independent reconstruction slices
//!
//! Two responses that share at least two tokens must describe records
//! that are close along a common axis, so they belong to the same
//! one-dimensional reconstruction sub-problem. The clusterer consumes
//! responses in their canonical (lexicographic-by-label-sequence) order
//! and maintains a growing slice list: each incoming response seeds a
//! candidate slice, absorbs every existing slice whose accumulated token
//! set meets the response's tokens in >= 2 labels, and is appended to
//! the list.
//!
//! The merge is streaming and insertion-order dependent: a response can
//! absorb a slice through tokens contributed by *different* earlier
//! responses, which a static connected-components computation over the
//! pairwise response-overlap graph would not. That asymmetry is part of
//! the procedure's semantics (see `test_union_overlap_beats_pairwise`),
//! not an implementation accident, so the sorted input order must be
//! kept deterministic.

use crate::tokenize::Label;
use std::collections::BTreeSet;

/// One independent reconstruction sub-problem: a set of responses
/// mutually connected through >= 2-token overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub responses: BTreeSet<Vec<Label>>,
}

impl Slice {
    fn seed(response: Vec<Label>) -> Self {
        let mut responses = BTreeSet::new();
        responses.insert(response);
        Self { responses }
    }

    /// Union of all labels appearing in any response of this slice.
    pub fn tokens(&self) -> BTreeSet<Label> {
        self.responses.iter().flatten().copied().collect()
    }
}

/// Partition the tokenized response set into slices.
///
/// Every input response lands in exactly one output slice.
pub fn cluster_slices(responses: &BTreeSet<Vec<Label>>) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();

    for response in responses {
        let tokens: BTreeSet<Label> = response.iter().copied().collect();
        let mut combined = Slice::seed(response.clone());

        // Absorb every existing slice overlapping the incoming response
        // in >= 2 tokens; keep the rest in their original order.
        let mut kept = Vec::with_capacity(slices.len() + 1);
        for slice in slices {
            let overlap = slice.tokens().intersection(&tokens).take(2).count();
            if overlap >= 2 {
                combined.responses.extend(slice.responses);
            } else {
                kept.push(slice);
            }
        }
        kept.push(combined);
        slices = kept;
    }

    slices
}
