//! Fluent builder for constructing an [`AntSystem`].

use std::sync::Arc;

use aco_core::{AcoError, AcoResult, AntId, AntRngs, ColonyConfig, ColonyRng, ProblemModel};

use crate::{Ant, AntSystem, NodeSelector, Parameters, PheromoneStore, Selector, StatsAggregator};

/// Fluent builder for [`AntSystem<S>`].
///
/// # Required inputs
///
/// - [`ColonyConfig`]: seed, exponents, evaporation rate, strategy tag.
/// - [`ProblemModel`] via [`.problem()`](Self::problem).
///
/// # Optional inputs (have defaults)
///
/// | Method                        | Default                                  |
/// |-------------------------------|------------------------------------------|
/// | `.parameter_start_node(n)`    | drawn from the colony RNG                |
/// | `.with_selector(s)`           | the built-in strategy for `config.selector` |
///
/// # Example
///
/// ```rust,ignore
/// let mut colony = AntSystemBuilder::new(config)
///     .problem(ProblemModel::new(&PlanarInstance::euc_2d(points))?)
///     .build()?;
/// colony.run(200, &mut NoopObserver)?;
/// ```
pub struct AntSystemBuilder<S: NodeSelector = Selector> {
    config:     ColonyConfig,
    problem:    Option<Arc<ProblemModel>>,
    start_node: Option<usize>,
    selector:   S,
}

impl AntSystemBuilder<Selector> {
    /// Start a builder using the built-in strategy named by
    /// `config.selector`.
    pub fn new(config: ColonyConfig) -> Self {
        let selector = Selector::from(config.selector);
        Self {
            config,
            problem:    None,
            start_node: None,
            selector,
        }
    }
}

impl<S: NodeSelector> AntSystemBuilder<S> {
    /// Supply the problem instance.  Accepts an owned model or a shared
    /// `Arc`.
    pub fn problem(mut self, problem: impl Into<Arc<ProblemModel>>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    /// Fix the start node of the greedy tour that sizes the initial
    /// pheromone instead of drawing it.
    pub fn parameter_start_node(mut self, node: usize) -> Self {
        self.start_node = Some(node);
        self
    }

    /// Replace the strategy.  `config.selector` is ignored afterwards.
    pub fn with_selector<T: NodeSelector>(self, selector: T) -> AntSystemBuilder<T> {
        AntSystemBuilder {
            config:     self.config,
            problem:    self.problem,
            start_node: self.start_node,
            selector,
        }
    }

    /// Validate inputs, derive parameters and the initial pheromone, and
    /// return a ready-to-run [`AntSystem`].
    pub fn build(self) -> AcoResult<AntSystem<S>> {
        self.config.validate()?;
        let problem = self.problem.ok_or(AcoError::MissingArgument("problem"))?;

        // ── Parameters and initial pheromone ─────────────────────────────
        let mut colony_rng = ColonyRng::new(self.config.seed);
        let parameters = match self.start_node {
            Some(start) => Parameters::from_start_node(&problem, &self.config, start)?,
            None        => Parameters::new(&problem, &self.config, &mut colony_rng)?,
        };
        let pheromone = PheromoneStore::new(
            parameters.initial_pheromone,
            parameters.alpha,
            parameters.beta,
            problem.distances(),
        )?;

        // ── Ants and their RNG streams ───────────────────────────────────
        let n = parameters.number_of_ants;
        let ants = (0..n)
            .map(|i| {
                AntId::try_from(i)
                    .map(|id| Ant::new(id, problem.node_count()))
                    .map_err(|_| AcoError::Range(format!("{n} ants exceed the AntId range")))
            })
            .collect::<AcoResult<Vec<_>>>()?;
        let rngs = AntRngs::new(n, colony_rng.random::<u64>());

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| AcoError::InvalidState(format!("cannot start worker pool: {e}")))?,
            ),
            None => None,
        };

        Ok(AntSystem {
            problem,
            parameters,
            pheromone,
            selector:   self.selector,
            ants,
            rngs,
            colony_rng,
            best_tours: Vec::new(),
            stats:      StatsAggregator::new(),
            iteration:  0,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
