//! Colony observer trait for progress reporting and data collection.

use crate::{BestTour, IterationStats};

/// Callbacks invoked by [`AntSystem::execute_observed`] and
/// [`AntSystem::run`] at key points of the iteration loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ColonyObserver for ProgressPrinter {
///     fn on_iteration_end(&mut self, iteration: u64, best: &BestTour, _stats: &IterationStats) {
///         if iteration % self.interval == 0 {
///             println!("iteration {iteration}: best {:.1}", best.tour_length);
///         }
///     }
/// }
/// ```
///
/// [`AntSystem::execute_observed`]: crate::AntSystem::execute_observed
/// [`AntSystem::run`]: crate::AntSystem::run
pub trait ColonyObserver {
    /// Called before any ant is placed on a start node.
    fn on_iteration_start(&mut self, _iteration: u64) {}

    /// Called after pheromone update, once the iteration's best tour and
    /// statistics have been recorded.
    fn on_iteration_end(&mut self, _iteration: u64, _best: &BestTour, _stats: &IterationStats) {}

    /// Called once by [`AntSystem::run`](crate::AntSystem::run) after its
    /// final iteration.  `iterations` is the colony's total iteration count.
    fn on_run_end(&mut self, _iterations: u64) {}
}

/// A [`ColonyObserver`] that does nothing.
pub struct NoopObserver;

impl ColonyObserver for NoopObserver {}
