//! Immutable problem data: distance matrix and nearest-neighbour orderings.
//!
//! The model is derived once from an external [`DistanceProvider`] and never
//! mutated afterwards.  Everything else in the workspace reads it through a
//! shared reference (or an `Arc`).
//!
//! # Self-distance sentinel
//!
//! The diagonal holds [`SELF_DISTANCE`] (`f64::MAX`).  The heuristic
//! `1 / d` on the diagonal is therefore effectively zero, no division by
//! zero can happen on a self edge, and a node always sorts behind every
//! other node in its own distance row.

use crate::error::check_index;
use crate::{AcoError, AcoResult, SymmetricMatrix};

/// Distance stored on the diagonal of every [`ProblemModel`].
pub const SELF_DISTANCE: f64 = f64::MAX;

// ── DistanceProvider ──────────────────────────────────────────────────────────

/// Source of pairwise distances for a symmetric TSP instance.
///
/// Instance loaders (TSPLIB parsers, benchmark libraries, …) live outside
/// this workspace; they only need to implement this trait.
/// [`ProblemModel::new`] reads `distance(i, j)` for `i < j` only and mirrors
/// the value, so a provider never has to be symmetric itself.
pub trait DistanceProvider {
    fn node_count(&self) -> usize;

    /// Distance between two distinct nodes, both in `[0, node_count)`.
    fn distance(&self, i: usize, j: usize) -> f64;
}

/// A provider backed by a caller-supplied closure.
pub struct FnDistance<F> {
    node_count: usize,
    f:          F,
}

impl<F: Fn(usize, usize) -> f64> FnDistance<F> {
    pub fn new(node_count: usize, f: F) -> Self {
        Self { node_count, f }
    }
}

impl<F: Fn(usize, usize) -> f64> DistanceProvider for FnDistance<F> {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        (self.f)(i, j)
    }
}

/// A provider backed by an explicit row-major distance table.
#[derive(Clone, Debug)]
pub struct ExplicitMatrix {
    rows: Vec<Vec<f64>>,
}

impl ExplicitMatrix {
    /// Wrap `rows`.  Fails with a range error unless the table is square.
    pub fn new(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(AcoError::Range(format!(
                "distance table row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        Ok(Self { rows })
    }
}

impl DistanceProvider for ExplicitMatrix {
    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }
}

// ── ProblemModel ──────────────────────────────────────────────────────────────

/// Distance matrix plus, for every node, all other nodes ordered by
/// ascending distance.
#[derive(Clone, Debug)]
pub struct ProblemModel {
    distances:  SymmetricMatrix,
    /// `neighbours[i]` has `node_count - 1` entries and never contains `i`.
    neighbours: Vec<Vec<usize>>,
}

impl ProblemModel {
    /// Build the model from `provider`.
    ///
    /// Fails with a range error if any off-diagonal distance is negative,
    /// NaN, infinite, or not below [`SELF_DISTANCE`].
    pub fn new<P: DistanceProvider + ?Sized>(provider: &P) -> AcoResult<Self> {
        let n = provider.node_count();
        let mut distances = SymmetricMatrix::filled(n, SELF_DISTANCE);

        for i in 0..n {
            for j in (i + 1)..n {
                let d = provider.distance(i, j);
                if !d.is_finite() || d < 0.0 || d >= SELF_DISTANCE {
                    return Err(AcoError::Range(format!(
                        "distance between nodes {i} and {j} must be finite and non-negative, got {d}"
                    )));
                }
                distances.set(i, j, d)?;
            }
        }

        // Stable sort over ascending indices: equal distances keep index order.
        let neighbours = (0..n)
            .map(|i| {
                let mut row: Vec<usize> = (0..n).filter(|&j| j != i).collect();
                row.sort_by(|&a, &b| distances.at(i, a).total_cmp(&distances.at(i, b)));
                row
            })
            .collect();

        Ok(Self { distances, neighbours })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.distances.size()
    }

    /// Distance between `i` and `j`; [`SELF_DISTANCE`] when `i == j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> AcoResult<f64> {
        self.distances.get(i, j)
    }

    /// All other nodes ordered by ascending distance from `node`.
    pub fn nearest_neighbours(&self, node: usize) -> AcoResult<&[usize]> {
        check_index(node, self.node_count())?;
        Ok(&self.neighbours[node])
    }

    /// The full distance matrix.
    #[inline]
    pub fn distances(&self) -> &SymmetricMatrix {
        &self.distances
    }

    /// Length of `tour` including the edge from its last node back to the
    /// first.  Tours with fewer than two nodes have length zero.
    pub fn tour_length(&self, tour: &[usize]) -> AcoResult<f64> {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return Ok(0.0);
        };
        if tour.len() < 2 {
            check_index(first, self.node_count())?;
            return Ok(0.0);
        }
        let mut length = self.distance(last, first)?;
        for edge in tour.windows(2) {
            length += self.distance(edge[0], edge[1])?;
        }
        Ok(length)
    }
}
