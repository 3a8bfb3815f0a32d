//! Next-node selection strategies.
//!
//! The colony holds exactly one strategy for its whole lifetime.  The
//! [`Selector`] enum is the closed set built from a
//! [`SelectorKind`](aco_core::SelectorKind) tag; custom strategies implement
//! [`NodeSelector`] directly and are installed with
//! [`AntSystemBuilder::with_selector`](crate::AntSystemBuilder::with_selector).

use aco_core::{AcoError, AcoResult, AntRng, ProblemModel, SelectorKind};

use crate::{Candidates, ConstructionContext};

/// Picks the next node for an ant standing on `current`.
///
/// `Send + Sync` because one selector is shared by every construction
/// worker.  Implementations must return a member of
/// `candidates.unvisited()`; [`Ant::step`](crate::Ant::step) rejects anything
/// else.
pub trait NodeSelector: Send + Sync {
    fn select_next(
        &self,
        current:    usize,
        candidates: &Candidates<'_>,
        ctx:        &ConstructionContext<'_>,
        rng:        &mut AntRng,
    ) -> AcoResult<usize>;
}

fn no_candidates(current: usize) -> AcoError {
    AcoError::Range(format!("no unvisited candidates remain from node {current}"))
}

// ── RandomSelector ────────────────────────────────────────────────────────────

/// Uniform draw over the unvisited nodes.  Ignores pheromone and distance.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomSelector;

impl NodeSelector for RandomSelector {
    fn select_next(
        &self,
        current:    usize,
        candidates: &Candidates<'_>,
        _ctx:       &ConstructionContext<'_>,
        rng:        &mut AntRng,
    ) -> AcoResult<usize> {
        rng.choose(candidates.unvisited())
            .copied()
            .ok_or_else(|| no_candidates(current))
    }
}

// ── NearestNeighbourSelector ──────────────────────────────────────────────────

/// The first unvisited entry of the current node's nearest-neighbour list.
/// Deterministic; consumes no randomness.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestNeighbourSelector;

impl NearestNeighbourSelector {
    /// Closest node to `current` for which `is_visited` is `false`.
    ///
    /// Shared with the greedy tour that sizes the initial pheromone, which
    /// runs before any pheromone store exists.
    pub fn nearest_unvisited(
        problem:    &ProblemModel,
        current:    usize,
        is_visited: impl Fn(usize) -> bool,
    ) -> AcoResult<usize> {
        problem
            .nearest_neighbours(current)?
            .iter()
            .copied()
            .find(|&k| !is_visited(k))
            .ok_or_else(|| no_candidates(current))
    }
}

impl NodeSelector for NearestNeighbourSelector {
    fn select_next(
        &self,
        current:    usize,
        candidates: &Candidates<'_>,
        ctx:        &ConstructionContext<'_>,
        _rng:       &mut AntRng,
    ) -> AcoResult<usize> {
        if candidates.is_empty() {
            return Err(no_candidates(current));
        }
        Self::nearest_unvisited(ctx.problem, current, |k| candidates.is_visited(k))
    }
}

// ── RouletteWheelSelector ─────────────────────────────────────────────────────

/// Draw proportional to `choice_info(current, k)` over unvisited `k`.
///
/// Degenerate rows are handled without surfacing an error:
///
/// - weights of `+∞` (zero-length edges) dominate; the draw is uniform among
///   the infinite-weight candidates.
/// - a total weight of zero falls back to a uniform draw over all candidates.
#[derive(Copy, Clone, Debug, Default)]
pub struct RouletteWheelSelector;

impl NodeSelector for RouletteWheelSelector {
    fn select_next(
        &self,
        current:    usize,
        candidates: &Candidates<'_>,
        ctx:        &ConstructionContext<'_>,
        rng:        &mut AntRng,
    ) -> AcoResult<usize> {
        let unvisited = candidates.unvisited();
        if unvisited.is_empty() {
            return Err(no_candidates(current));
        }

        let row = ctx.pheromone.choice_row(current)?;
        let weight = |k: usize| -> AcoResult<f64> {
            let w = *row.get(k).ok_or(AcoError::Index { index: k, node_count: row.len() })?;
            // 0 · ∞ on a fully evaporated zero-length edge.
            Ok(if w.is_nan() { 0.0 } else { w })
        };

        let mut total = 0.0;
        for &k in unvisited {
            total += weight(k)?;
        }

        if total.is_infinite() {
            let mut dominant = Vec::new();
            for &k in unvisited {
                if weight(k)?.is_infinite() {
                    dominant.push(k);
                }
            }
            return rng.choose(&dominant).copied().ok_or_else(|| no_candidates(current));
        }

        if total <= 0.0 {
            return rng.choose(unvisited).copied().ok_or_else(|| no_candidates(current));
        }

        let target = rng.gen_range(0.0..total);
        let mut running = 0.0;
        let mut last_positive = unvisited[0];
        for &k in unvisited {
            let w = weight(k)?;
            if w <= 0.0 {
                continue;
            }
            running += w;
            last_positive = k;
            if running > target {
                return Ok(k);
            }
        }
        // Rounding left the running sum a hair below the target.
        Ok(last_positive)
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

/// The built-in strategies, chosen by tag when the colony is built.
#[derive(Copy, Clone, Debug)]
pub enum Selector {
    Random(RandomSelector),
    RouletteWheel(RouletteWheelSelector),
    NearestNeighbour(NearestNeighbourSelector),
}

impl Selector {
    pub fn kind(&self) -> SelectorKind {
        match self {
            Selector::Random(_)           => SelectorKind::Random,
            Selector::RouletteWheel(_)    => SelectorKind::RouletteWheel,
            Selector::NearestNeighbour(_) => SelectorKind::NearestNeighbour,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        SelectorKind::default().into()
    }
}

impl From<SelectorKind> for Selector {
    fn from(kind: SelectorKind) -> Self {
        match kind {
            SelectorKind::Random           => Selector::Random(RandomSelector),
            SelectorKind::RouletteWheel    => Selector::RouletteWheel(RouletteWheelSelector),
            SelectorKind::NearestNeighbour => Selector::NearestNeighbour(NearestNeighbourSelector),
        }
    }
}

impl NodeSelector for Selector {
    #[inline]
    fn select_next(
        &self,
        current:    usize,
        candidates: &Candidates<'_>,
        ctx:        &ConstructionContext<'_>,
        rng:        &mut AntRng,
    ) -> AcoResult<usize> {
        match self {
            Selector::Random(s)           => s.select_next(current, candidates, ctx, rng),
            Selector::RouletteWheel(s)    => s.select_next(current, candidates, ctx, rng),
            Selector::NearestNeighbour(s) => s.select_next(current, candidates, ctx, rng),
        }
    }
}
