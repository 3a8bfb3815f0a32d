//! Per-run algorithm parameters derived from the problem and configuration.

use aco_core::error::check_index;
use aco_core::{AcoError, AcoResult, ColonyConfig, ColonyRng, ProblemModel};

use crate::NearestNeighbourSelector;

/// Fixed for the lifetime of one colony.
///
/// `initial_pheromone = 1 / (number_of_ants · L_nn)`, where `L_nn` is the
/// closed length of one greedy nearest-neighbour tour from
/// `nearest_neighbour_start`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// One ant per node.
    pub number_of_ants:                usize,
    pub alpha:                         f64,
    pub beta:                          f64,
    pub evaporation_rate:              f64,
    pub initial_pheromone:             f64,
    pub nearest_neighbour_tour_length: f64,
    pub nearest_neighbour_start:       usize,
}

impl Parameters {
    /// Derive parameters, drawing the greedy tour's start node from `rng`.
    ///
    /// Fails with a range error for problems with fewer than two nodes.
    pub fn new(problem: &ProblemModel, config: &ColonyConfig, rng: &mut ColonyRng) -> AcoResult<Self> {
        require_two_nodes(problem)?;
        let start = rng.gen_range(0..problem.node_count());
        Self::from_start_node(problem, config, start)
    }

    /// Derive parameters with the greedy tour starting at `start`.
    pub fn from_start_node(problem: &ProblemModel, config: &ColonyConfig, start: usize) -> AcoResult<Self> {
        require_two_nodes(problem)?;
        let n = problem.node_count();
        check_index(start, n)?;

        let length = nearest_neighbour_tour_length(problem, start)?;
        if !(length.is_finite() && length > 0.0) {
            return Err(AcoError::Range(format!(
                "nearest-neighbour tour from node {start} has length {length}; \
                 initial pheromone needs a positive finite length"
            )));
        }

        Ok(Self {
            number_of_ants:                n,
            alpha:                         config.alpha,
            beta:                          config.beta,
            evaporation_rate:              config.evaporation_rate,
            initial_pheromone:             1.0 / (n as f64 * length),
            nearest_neighbour_tour_length: length,
            nearest_neighbour_start:       start,
        })
    }
}

/// Closed length of the greedy tour that always moves to the closest
/// unvisited node, starting from `start`.
pub fn nearest_neighbour_tour_length(problem: &ProblemModel, start: usize) -> AcoResult<f64> {
    let n = problem.node_count();
    check_index(start, n)?;

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut current = start;
    let mut length = 0.0;
    for _ in 1..n {
        let next = NearestNeighbourSelector::nearest_unvisited(problem, current, |k| visited[k])?;
        length += problem.distance(current, next)?;
        visited[next] = true;
        current = next;
    }
    if n >= 2 {
        length += problem.distance(current, start)?;
    }
    Ok(length)
}

fn require_two_nodes(problem: &ProblemModel) -> AcoResult<()> {
    if problem.node_count() < 2 {
        return Err(AcoError::Range(format!(
            "an ant colony needs at least 2 nodes, got {}",
            problem.node_count()
        )));
    }
    Ok(())
}
