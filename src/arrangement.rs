//! Consecutive-arrangement constraint structure
//!
//! Capability boundary for the reconstruction core: a structure over a
//! fixed label universe that accepts "this subset must be contiguous"
//! constraints and hands back one linearization consistent with every
//! constraint it accepted. An infeasible constraint is dropped silently
//! (best-effort consolidation); the structure never errors and callers
//! must not assume every submitted constraint was honored.
//!
//! This implementation decides feasibility with a prefix-extension
//! search: once a constraint's run has started and is unfinished, the
//! next element must lie in every such constraint, so the candidate set
//! at each step is the intersection of the started-unfinished
//! constraints. Unconstrained ties resolve to ascending label order.
//! Everything here is internal policy — any consecutive-ones solver
//! (e.g. a PQ-tree) can stand in behind the same three operations.

use crate::tokenize::Label;
use std::collections::BTreeSet;

/// Diagnostic classification of the structure's remaining ordering
/// freedom. No behavioral contract; used only in debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freedom {
    /// Single-label universe.
    Leaf,
    /// No non-trivial constraint accepted yet: any permutation is valid.
    Unordered,
    /// At least one accepted constraint restricts the arrangement.
    Ordered,
}

/// Constraint structure over a fixed label universe.
#[derive(Debug, Clone)]
pub struct ArrangementTree {
    universe: BTreeSet<Label>,
    accepted: Vec<BTreeSet<Label>>,
    frontier: Vec<Label>,
}

impl ArrangementTree {
    /// Build an unconstrained structure; its initial frontier is the
    /// universe in ascending order.
    pub fn new(universe: BTreeSet<Label>) -> Self {
        let frontier = universe.iter().copied().collect();
        Self {
            universe,
            accepted: Vec::new(),
            frontier,
        }
    }

    /// Require `subset` to occupy a contiguous run in every linearization.
    ///
    /// Returns whether the constraint was accepted. Rejection leaves the
    /// structure exactly as it was.
    pub fn constrain_contiguous(&mut self, subset: &BTreeSet<Label>) -> bool {
        debug_assert!(subset.is_subset(&self.universe));

        // Singletons and the full universe are contiguous in any
        // permutation; nothing to record.
        if subset.len() <= 1 || subset.len() == self.universe.len() {
            return true;
        }

        self.accepted.push(subset.clone());
        match self.solve() {
            Some(order) => {
                self.frontier = order;
                true
            }
            None => {
                self.accepted.pop();
                false
            }
        }
    }

    /// One permutation of the universe in which every accepted subset is
    /// contiguous. Deterministic for a fixed constraint history.
    pub fn frontier(&self) -> Vec<Label> {
        self.frontier.clone()
    }

    pub fn freedom(&self) -> Freedom {
        if self.universe.len() <= 1 {
            Freedom::Leaf
        } else if self.accepted.is_empty() {
            Freedom::Unordered
        } else {
            Freedom::Ordered
        }
    }

    fn solve(&self) -> Option<Vec<Label>> {
        let mut order = Vec::with_capacity(self.universe.len());
        let mut remaining = self.universe.clone();
        let mut placed_counts = vec![0usize; self.accepted.len()];
        if self.extend(&mut order, &mut remaining, &mut placed_counts) {
            Some(order)
        } else {
            None
        }
    }

    fn extend(
        &self,
        order: &mut Vec<Label>,
        remaining: &mut BTreeSet<Label>,
        placed_counts: &mut [usize],
    ) -> bool {
        if remaining.is_empty() {
            return true;
        }

        // A started, unfinished constraint pins the next element inside
        // itself; with several active at once the candidate set is their
        // intersection.
        let active: Vec<usize> = self
            .accepted
            .iter()
            .enumerate()
            .filter(|(i, c)| placed_counts[*i] > 0 && placed_counts[*i] < c.len())
            .map(|(i, _)| i)
            .collect();

        let candidates: Vec<Label> = remaining
            .iter()
            .copied()
            .filter(|x| active.iter().all(|&i| self.accepted[i].contains(x)))
            .collect();

        for x in candidates {
            order.push(x);
            remaining.remove(&x);
            for (i, c) in self.accepted.iter().enumerate() {
                if c.contains(&x) {
                    placed_counts[i] += 1;
                }
            }

            if self.extend(order, remaining, placed_counts) {
                return true;
            }

            for (i, c) in self.accepted.iter().enumerate() {
                if c.contains(&x) {
                    placed_counts[i] -= 1;
                }
            }
            remaining.insert(x);
            order.pop();
        }

        false
    }
}
