//! Pheromone densities and the derived choice-info matrix.
//!
//! # Recompute ordering
//!
//! `choice_info[i][j] = density[i][j]^α · (1 / distance[i][j])^β`
//!
//! The heuristic factor `(1/d)^β` never changes and is computed once at
//! construction.  Every density mutation (`set_density`, `evaporate`,
//! `deposit`) marks the choice-info matrix stale; reads of a stale matrix
//! fail with [`AcoError::InvalidState`] until
//! [`PheromoneStore::recompute_choice_info`] has run.  The colony runs the
//! whole evaporate + deposit pass first and recomputes exactly once after it.

use aco_core::error::check_index;
use aco_core::{AcoError, AcoResult, SymmetricMatrix};

/// Symmetric pheromone-density matrix plus its cached choice-info matrix.
#[derive(Clone, Debug)]
pub struct PheromoneStore {
    initial:     f64,
    alpha:       f64,
    density:     SymmetricMatrix,
    /// `(1/d)^β`, fixed for the store's lifetime.
    heuristic:   SymmetricMatrix,
    choice_info: SymmetricMatrix,
    stale:       bool,
}

impl PheromoneStore {
    /// Create a store over `distances` with every density set to
    /// `initial_density`, and compute the first choice-info matrix.
    ///
    /// Fails with a range error unless `initial_density` is finite and > 0.
    pub fn new(
        initial_density: f64,
        alpha:           f64,
        beta:            f64,
        distances:       &SymmetricMatrix,
    ) -> AcoResult<Self> {
        if !(initial_density.is_finite() && initial_density > 0.0) {
            return Err(AcoError::Range(format!(
                "initial pheromone density must be finite and > 0, got {initial_density}"
            )));
        }

        let n = distances.size();
        let mut heuristic = SymmetricMatrix::filled(n, 0.0);
        heuristic.update_off_diagonal(|i, j, _| (1.0 / distances.at(i, j)).powf(beta));

        let mut store = Self {
            initial:     initial_density,
            alpha,
            density:     SymmetricMatrix::filled(n, initial_density),
            heuristic,
            choice_info: SymmetricMatrix::filled(n, 0.0),
            stale:       true,
        };
        store.recompute_choice_info();
        Ok(store)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.density.size()
    }

    /// The density every edge starts with and returns to on reset.
    #[inline]
    pub fn initial_density(&self) -> f64 {
        self.initial
    }

    /// `true` after a density mutation until the next recompute.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // ── Density ───────────────────────────────────────────────────────────

    pub fn density(&self, i: usize, j: usize) -> AcoResult<f64> {
        self.density.get(i, j)
    }

    /// Set the density of edge `{i, j}`.  Fails with a range error for a
    /// negative or non-finite value.
    pub fn set_density(&mut self, i: usize, j: usize, value: f64) -> AcoResult<()> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(AcoError::Range(format!(
                "pheromone density must be finite and >= 0, got {value}"
            )));
        }
        self.density.set(i, j, value)?;
        self.stale = true;
        Ok(())
    }

    /// Multiply every off-diagonal density by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) -> AcoResult<()> {
        if !(0.0..1.0).contains(&rate) {
            return Err(AcoError::Range(format!(
                "evaporation rate must lie in [0, 1), got {rate}"
            )));
        }
        let keep = 1.0 - rate;
        self.density.update_off_diagonal(|_, _, v| v * keep);
        self.stale = true;
        Ok(())
    }

    /// Add `amount` to every edge of the closed `tour`: each consecutive
    /// pair plus the edge from the last node back to the first.
    ///
    /// All indices are validated before anything is written, so a failed
    /// deposit leaves the store untouched.
    pub fn deposit(&mut self, tour: &[usize], amount: f64) -> AcoResult<()> {
        if !(amount.is_finite() && amount >= 0.0) {
            return Err(AcoError::Range(format!(
                "pheromone deposit must be finite and >= 0, got {amount}"
            )));
        }
        let n = self.node_count();
        for &node in tour {
            check_index(node, n)?;
        }
        if tour.len() < 2 {
            return Ok(());
        }

        let closing = (tour[tour.len() - 1], tour[0]);
        let edges = tour.windows(2).map(|w| (w[0], w[1])).chain(std::iter::once(closing));
        for (i, j) in edges {
            let v = self.density.at(i, j) + amount;
            self.density.set(i, j, v)?;
        }
        self.stale = true;
        Ok(())
    }

    // ── Choice info ───────────────────────────────────────────────────────

    /// Rebuild the choice-info matrix from the current densities.
    pub fn recompute_choice_info(&mut self) {
        let Self { alpha, density, heuristic, choice_info, .. } = &mut *self;
        let alpha = *alpha;
        choice_info.update_off_diagonal(|i, j, _| density.at(i, j).powf(alpha) * heuristic.at(i, j));
        choice_info.set_diagonal(0.0);
        self.stale = false;
    }

    /// Cached `τ^α · η^β` for edge `{i, j}`.
    pub fn choice_info(&self, i: usize, j: usize) -> AcoResult<f64> {
        self.ensure_fresh()?;
        self.choice_info.get(i, j)
    }

    /// Row `i` of the choice-info matrix, indexed by candidate node.
    pub fn choice_row(&self, i: usize) -> AcoResult<&[f64]> {
        self.ensure_fresh()?;
        self.choice_info.row(i)
    }

    /// Restore every density to the initial value and recompute choice info.
    pub fn reset_pheromone(&mut self) {
        self.density.fill(self.initial);
        self.recompute_choice_info();
    }

    fn ensure_fresh(&self) -> AcoResult<()> {
        if self.stale {
            Err(AcoError::InvalidState(
                "choice info read after a pheromone update without recompute".into(),
            ))
        } else {
            Ok(())
        }
    }
}
