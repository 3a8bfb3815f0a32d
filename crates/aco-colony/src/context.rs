//! Read-only snapshot handed to ants and selectors during construction.

use aco_core::ProblemModel;

use crate::PheromoneStore;

/// Everything an ant may read while it builds its tour.
///
/// Holds shared references only, so one context may be shared by every ant
/// in the construction phase, including across Rayon workers.  The colony
/// drops it before the pheromone update phase begins.
#[derive(Clone, Copy)]
pub struct ConstructionContext<'a> {
    pub problem:   &'a ProblemModel,
    pub pheromone: &'a PheromoneStore,
}

impl<'a> ConstructionContext<'a> {
    pub fn new(problem: &'a ProblemModel, pheromone: &'a PheromoneStore) -> Self {
        Self { problem, pheromone }
    }
}
