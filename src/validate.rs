//! Scoring reconstructed orders against the ground-truth grid
//!
//! The attacker's output is a set of reconstructed rows (label orders
//! mapped back to points). Ground truth is the set of canonical rows:
//! for each axis whose extent exceeds 2, every contiguous line of the
//! box-reachable grid varying along that axis. Orientation is
//! unrecoverable from co-occurrence evidence, so a row matches a
//! canonical row read forward or backward.
//!
//! Two scores:
//! - exact correctness: every reconstructed row matches some canonical
//!   row *and* the row counts agree;
//! - edge accuracy: the fraction of adjacent point pairs, across all
//!   reconstructed rows, that are true grid neighbors. With no pairs at
//!   all (no row of length >= 2) accuracy is defined as 0.0.

use crate::grid::{Grid, Point};
use crate::tokenize::{Label, TokenMap};

/// Detokenize reconstructed orders and drop singletons, which carry no
/// ordering information.
pub fn reconstructed_rows(map: &TokenMap, orders: &[Vec<Label>]) -> Vec<Vec<Point>> {
    orders
        .iter()
        .filter(|order| order.len() >= 2)
        .map(|order| map.detokenize_order(order))
        .collect()
}

/// Ground-truth rows. Coordinates range over `[1, extent)` on every
/// axis, matching the box-reachable region; axes of extent <= 2 have at
/// most one reachable coordinate and contribute no rows of their own.
pub fn canonical_rows(grid: &Grid) -> Vec<Vec<Point>> {
    let mut rows = Vec::new();

    if grid.n2 > 2 {
        for x in 1..grid.n0 {
            for y in 1..grid.n1 {
                rows.push((1..grid.n2).map(|z| Point::new(x, y, z)).collect());
            }
        }
    }
    if grid.n1 > 2 {
        for x in 1..grid.n0 {
            for z in 1..grid.n2 {
                rows.push((1..grid.n1).map(|y| Point::new(x, y, z)).collect());
            }
        }
    }
    if grid.n0 > 2 {
        for y in 1..grid.n1 {
            for z in 1..grid.n2 {
                rows.push((1..grid.n0).map(|x| Point::new(x, y, z)).collect());
            }
        }
    }

    rows
}

/// Exact-match check: as many reconstructed rows as canonical rows, and
/// each reconstructed row equal to some canonical row in either
/// orientation.
pub fn check_correct(grid: &Grid, rows: &[Vec<Point>]) -> bool {
    let canonical = canonical_rows(grid);
    if canonical.len() != rows.len() {
        return false;
    }

    rows.iter().all(|row| {
        canonical.iter().any(|truth| {
            row == truth || row.iter().rev().eq(truth.iter())
        })
    })
}

/// Soft score: fraction of adjacent pairs that are grid neighbors.
pub fn edge_accuracy(rows: &[Vec<Point>]) -> f64 {
    let mut correct = 0usize;
    let mut total = 0usize;

    for row in rows {
        for pair in row.windows(2) {
            total += 1;
            if pair[0].is_grid_neighbor(&pair[1]) {
                correct += 1;
            }
        }
    }

    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}
