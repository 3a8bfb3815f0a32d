//! The `OutputWriter` trait implemented by backend writers.

use crate::{BestTourRow, IterationStatsRow, OutputResult};

/// Trait implemented by every history backend.
///
/// Errors are returned to the caller; [`ColonyOutputObserver`] stores the
/// first one for [`take_error`].
///
/// [`ColonyOutputObserver`]: crate::ColonyOutputObserver
/// [`take_error`]: crate::ColonyOutputObserver::take_error
pub trait OutputWriter {
    fn write_iteration_stats(&mut self, row: &IterationStatsRow) -> OutputResult<()>;

    fn write_best_tour(&mut self, row: &BestTourRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
