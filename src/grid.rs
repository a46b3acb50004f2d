//! Grid points and exhaustive box-query enumeration
//!
//! The simulated dataset is a dense integer grid: one record per cell.
//! An adversary observing an encrypted range-search scheme sees, for each
//! issued box query, the (opaque) identities of the records it returns.
//! This module enumerates every point and every axis-aligned box query,
//! producing the candidate response set the leakage model filters down.
//!
//! Box bounds range over `[1, extent)` on each axis, so coordinate 0 never
//! appears in a response. The degenerate third axis (extent 2) pins its
//! box range to the single cell `[1, 1]`, which is how the driving
//! two-dimensional scenario is expressed in a three-axis enumerator.

use std::collections::BTreeSet;

/// A grid cell. Ordering is lexicographic by coordinate, which fixes the
/// canonical enumeration order used throughout the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Point {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// True if `self` and `other` are adjacent cells: they differ by
    /// exactly 1 in exactly one coordinate and are equal in the others.
    pub fn is_grid_neighbor(&self, other: &Point) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx + dy + dz == 1
    }
}

/// Grid extents along the three axes.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub n0: u32,
    pub n1: u32,
    pub n2: u32,
}

impl Grid {
    pub fn new(n0: u32, n1: u32, n2: u32) -> Self {
        Self { n0, n1, n2 }
    }

    /// Enumerate every point with `0 <= coordinate < extent`, in
    /// lexicographic order.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity((self.n0 * self.n1 * self.n2) as usize);
        for x in 0..self.n0 {
            for y in 0..self.n1 {
                for z in 0..self.n2 {
                    points.push(Point::new(x, y, z));
                }
            }
        }
        points
    }

    /// Enumerate every axis-aligned box (min <= max per axis, bounds in
    /// `[1, extent)`) and collect the contained points of each. Distinct
    /// boxes that return the same point set collapse to one response.
    ///
    /// Deliberately exhaustive: cost is the product of the squares of the
    /// extents, and the scenario sizes are small by design.
    pub fn box_responses(&self, points: &[Point]) -> BTreeSet<Vec<Point>> {
        let mut responses = BTreeSet::new();
        for min0 in 1..self.n0 {
            for max0 in min0..self.n0 {
                for min1 in 1..self.n1 {
                    for max1 in min1..self.n1 {
                        for min2 in 1..self.n2 {
                            for max2 in min2..self.n2 {
                                let response: Vec<Point> = points
                                    .iter()
                                    .copied()
                                    .filter(|p| {
                                        p.x >= min0
                                            && p.x <= max0
                                            && p.y >= min1
                                            && p.y <= max1
                                            && p.z >= min2
                                            && p.z <= max2
                                    })
                                    .collect();
                                responses.insert(response);
                            }
                        }
                    }
                }
            }
        }
        responses
    }
}
