//! The `AntSystem` struct and its iteration loop.

use std::sync::Arc;

use aco_core::{AcoError, AcoResult, AntRngs, ColonyRng, ProblemModel};

use crate::{
    Ant, ColonyObserver, ConstructionContext, IterationStats, NodeSelector, NoopObserver,
    Parameters, PheromoneStore, Selector, StatsAggregator,
};

/// The best tour of one iteration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestTour {
    pub iteration:   u64,
    /// Closed length, including the edge back to `tour[0]`.
    pub tour_length: f64,
    pub tour:        Vec<usize>,
}

// ── AntSystem ─────────────────────────────────────────────────────────────────

/// Ant System colony over one problem instance.
///
/// `AntSystem<S>` drives the synchronous iteration loop:
///
/// 1. **Seed**: every ant is initialised at a uniformly random start node
///    drawn from the colony RNG (several ants may share a start node).
/// 2. **Construct** (optionally parallel with the `parallel` feature):
///    `node_count − 1` calls of [`Ant::step`] per ant, reading only the
///    problem and a stable pheromone snapshot.
/// 3. **Close**: each ant adds its edge back to the start node.
/// 4. **Update** (sequential): evaporate, deposit `1 / L` along every ant's
///    closed tour (nothing for `L = 0`), then recompute choice info once.
/// 5. **Record**: the shortest tour (first ant wins ties) is appended to
///    the best-tour history; every length feeds the statistics row.
///
/// Ants, parameters and the selector are fixed for the colony's lifetime.
/// Create via [`AntSystemBuilder`][crate::AntSystemBuilder].
pub struct AntSystem<S: NodeSelector = Selector> {
    pub(crate) problem:    Arc<ProblemModel>,
    pub(crate) parameters: Parameters,
    pub(crate) pheromone:  PheromoneStore,
    pub(crate) selector:   S,
    pub(crate) ants:       Vec<Ant>,
    /// Per-ant RNGs, stored beside `ants` for the split borrow.
    pub(crate) rngs:       AntRngs,
    /// Start-node draws.  Touched only on the calling thread.
    pub(crate) colony_rng: ColonyRng,
    pub(crate) best_tours: Vec<BestTour>,
    pub(crate) stats:      StatsAggregator,
    pub(crate) iteration:  u64,
    #[cfg(feature = "parallel")]
    pub(crate) pool:       Option<rayon::ThreadPool>,
}

impl<S: NodeSelector> AntSystem<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one iteration with no observer.
    pub fn execute(&mut self) -> AcoResult<&BestTour> {
        self.execute_observed(&mut NoopObserver)
    }

    /// Run one iteration, calling `observer` at its start and end.
    ///
    /// On error the iteration is abandoned: nothing is recorded, the
    /// iteration counter stays put and the choice info is fresh, so the
    /// colony can execute again.
    pub fn execute_observed<O: ColonyObserver>(&mut self, observer: &mut O) -> AcoResult<&BestTour> {
        let iteration = self.iteration;
        observer.on_iteration_start(iteration);
        self.stats.start_iteration(iteration);

        if let Err(e) = self.process_iteration(iteration) {
            self.stats.abandon_iteration();
            return Err(e);
        }
        self.iteration += 1;

        let (Some(best), Some(stats)) = (self.best_tours.last(), self.stats.history().last()) else {
            return Err(AcoError::InvalidState(format!("iteration {iteration} left no record")));
        };
        observer.on_iteration_end(iteration, best, stats);
        Ok(best)
    }

    /// Run `iterations` iterations, then call
    /// [`ColonyObserver::on_run_end`] once.
    pub fn run<O: ColonyObserver>(&mut self, iterations: u64, observer: &mut O) -> AcoResult<()> {
        for _ in 0..iterations {
            self.execute_observed(observer)?;
        }
        observer.on_run_end(self.iteration);
        Ok(())
    }

    /// Forget every recorded iteration and restore the initial pheromone.
    ///
    /// Ants, parameters, the selector and the RNG streams carry on; a reset
    /// colony does not replay the tours of its first run.
    pub fn reset(&mut self) {
        self.best_tours.clear();
        self.stats.clear_stats();
        self.pheromone.reset_pheromone();
        self.iteration = 0;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// One entry per executed iteration, oldest first.
    pub fn best_tours(&self) -> &[BestTour] {
        &self.best_tours
    }

    /// Shortest tour recorded since construction or the last reset.  The
    /// earliest iteration wins ties.
    pub fn best_tour(&self) -> Option<&BestTour> {
        self.best_tours
            .iter()
            .min_by(|a, b| a.tour_length.total_cmp(&b.tour_length))
    }

    pub fn iteration_stats(&self) -> &[IterationStats] {
        self.stats.history()
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn pheromone(&self) -> &PheromoneStore {
        &self.pheromone
    }

    pub fn problem(&self) -> &Arc<ProblemModel> {
        &self.problem
    }

    /// Iterations executed since construction or the last reset.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    // ── Iteration phases ──────────────────────────────────────────────────

    fn process_iteration(&mut self, iteration: u64) -> AcoResult<()> {
        // ── Phase 1: seed start nodes ────────────────────────────────────
        let n = self.problem.node_count();
        for ant in &mut self.ants {
            let start = self.colony_rng.gen_range(0..n);
            ant.initialise(start)?;
        }

        // ── Phase 2: construct (barrier on return) ───────────────────────
        self.construct_tours()?;

        // ── Phase 3: close tours ─────────────────────────────────────────
        let mut lengths = Vec::with_capacity(self.ants.len());
        for ant in &mut self.ants {
            lengths.push(ant.close_tour(&self.problem)?);
        }

        // ── Phase 4: pheromone update ────────────────────────────────────
        let amounts: Vec<f64> = lengths.iter().map(|&l| deposit_amount(l)).collect();
        let updated = self.update_pheromone(&amounts);
        self.pheromone.recompute_choice_info();
        updated?;

        // ── Phase 5: record ──────────────────────────────────────────────
        let best = self
            .ants
            .iter()
            .min_by(|a, b| a.compare_length(b))
            .ok_or_else(|| AcoError::InvalidState("colony has no ants".into()))?;
        let best = BestTour {
            iteration,
            tour_length: best.tour_length(),
            tour:        best.tour().to_vec(),
        };
        self.stats.stop_iteration(&lengths)?;
        self.best_tours.push(best);
        Ok(())
    }

    /// Evaporate, then lay `amounts[i]` along ant `i`'s closed tour.  The
    /// caller recomputes choice info whether or not this succeeds.
    fn update_pheromone(&mut self, amounts: &[f64]) -> AcoResult<()> {
        self.pheromone.evaporate(self.parameters.evaporation_rate)?;
        for (ant, &amount) in self.ants.iter().zip(amounts) {
            self.pheromone.deposit(ant.tour(), amount)?;
        }
        Ok(())
    }

    // ── Construction phase ────────────────────────────────────────────────

    /// Build every ant's tour from the current pheromone snapshot.
    ///
    /// The sequential path moves all ants one step per round.  The parallel
    /// path runs each ant to completion on a Rayon worker.  Every ant draws
    /// only from its own RNG, so both orders produce identical tours.
    fn construct_tours(&mut self) -> AcoResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ants     = &mut self.ants;
        let rngs     = self.rngs.as_mut_slice();
        let selector = &self.selector;
        let ctx      = ConstructionContext::new(&self.problem, &self.pheromone);

        #[cfg(not(feature = "parallel"))]
        {
            let rounds = self.problem.node_count().saturating_sub(1);
            for _ in 0..rounds {
                for (ant, rng) in ants.iter_mut().zip(rngs.iter_mut()) {
                    ant.step(&ctx, selector, rng)?;
                }
            }
            Ok(())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut work = || {
                ants.par_iter_mut()
                    .zip(rngs.par_iter_mut())
                    .try_for_each(|(ant, rng)| {
                        while ant.steps_remaining() > 0 {
                            ant.step(&ctx, selector, rng)?;
                        }
                        Ok::<(), AcoError>(())
                    })
            };
            match &self.pool {
                Some(pool) => pool.install(work),
                None       => work(),
            }
        }
    }
}

impl<S: NodeSelector + std::fmt::Debug> std::fmt::Debug for AntSystem<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AntSystem")
            .field("node_count", &self.problem.node_count())
            .field("selector", &self.selector)
            .field("iteration", &self.iteration)
            .field("best_tours", &self.best_tours.len())
            .finish()
    }
}

/// Pheromone an ant lays for a closed tour of `length`: `1 / length`, or
/// nothing when that is not finite (a zero-length tour).
pub(crate) fn deposit_amount(length: f64) -> f64 {
    let amount = 1.0 / length;
    if amount.is_finite() { amount } else { 0.0 }
}
