//! `ColonyOutputObserver<W>`: bridges `ColonyObserver` to an `OutputWriter`.

use aco_colony::{BestTour, ColonyObserver, IterationStats};

use crate::writer::OutputWriter;
use crate::{BestTourRow, IterationStatsRow, OutputError, OutputResult};

/// A [`ColonyObserver`] that writes one statistics row and one best-tour
/// row per iteration to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ColonyObserver`
/// methods have no return value.  After `colony.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ColonyOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ColonyOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if every write
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer outside of `run`, e.g. after driving the colony
    /// with `execute_observed`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ColonyObserver for ColonyOutputObserver<W> {
    fn on_iteration_end(&mut self, _iteration: u64, best: &BestTour, stats: &IterationStats) {
        let result = self.writer.write_iteration_stats(&IterationStatsRow::from(stats));
        self.store_err(result);
        let result = self.writer.write_best_tour(&BestTourRow::from(best));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _iterations: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
