//! `aco-colony`: the Ant System iteration loop for the symmetric TSP.
//!
//! # One iteration
//!
//! ```text
//! execute():
//!   ① Seed        every ant starts at a uniformly random node.
//!   ② Construct   node_count − 1 rounds of Ant::step for every ant
//!                   (parallel with the `parallel` feature).
//!   ③ Close       add each ant's edge back to its start node.
//!   ④ Update      evaporate, deposit 1/L per ant, recompute choice info.
//!   ⑤ Record      append the iteration-best tour and min/mean/max stats.
//! ```
//!
//! Construction only reads the problem model and the pheromone store; the
//! update phase is the only writer and runs after every ant has finished.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`pheromone`]  | `PheromoneStore` (density + choice-info matrices)           |
//! | [`parameters`] | `Parameters` (ant count, ρ, τ₀ from a nearest-neighbour tour) |
//! | [`context`]    | `ConstructionContext<'a>`: read-only snapshot for ants      |
//! | [`selector`]   | `NodeSelector` trait, three strategies, `Selector` enum     |
//! | [`ant`]        | `Ant`, `AntState`, `Candidates<'a>`                         |
//! | [`stats`]      | `StatsAggregator`, `IterationStats`                         |
//! | [`observer`]   | `ColonyObserver` trait, `NoopObserver`                      |
//! | [`system`]     | `AntSystem`, `BestTour`                                     |
//! | [`builder`]    | `AntSystemBuilder`                                          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs tour construction on Rayon's thread pool.         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on history rows.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aco_colony::{AntSystemBuilder, NoopObserver};
//! use aco_core::{ColonyConfig, PlanarInstance, ProblemModel};
//!
//! let problem = Arc::new(ProblemModel::new(&PlanarInstance::euc_2d(points))?);
//! let mut colony = AntSystemBuilder::new(ColonyConfig::default())
//!     .problem(problem)
//!     .build()?;
//! colony.run(100, &mut NoopObserver)?;
//! println!("best: {:?}", colony.best_tour());
//! ```

pub mod ant;
pub mod builder;
pub mod context;
pub mod observer;
pub mod parameters;
pub mod pheromone;
pub mod selector;
pub mod stats;
pub mod system;


pub use ant::{Ant, AntState, Candidates};
pub use builder::AntSystemBuilder;
pub use context::ConstructionContext;
pub use observer::{ColonyObserver, NoopObserver};
pub use parameters::Parameters;
pub use pheromone::PheromoneStore;
pub use selector::{
    NearestNeighbourSelector, NodeSelector, RandomSelector, RouletteWheelSelector, Selector,
};
pub use stats::{IterationStats, StatsAggregator};
pub use system::{AntSystem, BestTour};
