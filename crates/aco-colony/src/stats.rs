//! Per-iteration tour-length statistics.

use aco_core::{AcoError, AcoResult};

/// Min / mean / max closed tour length of one iteration's ants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    pub iteration: u64,
    pub min:       f64,
    pub mean:      f64,
    pub max:       f64,
}

/// Collects one [`IterationStats`] row per iteration.
///
/// Usage is bracketed: `start_iteration(i)`, run the iteration,
/// `stop_iteration(&lengths)`.  Starting again before stopping replaces the
/// open iteration.
#[derive(Clone, Debug, Default)]
pub struct StatsAggregator {
    open:    Option<u64>,
    history: Vec<IterationStats>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_iteration(&mut self, iteration: u64) {
        self.open = Some(iteration);
    }

    /// Close the open iteration with the ants' tour lengths and append its
    /// row to the history.
    pub fn stop_iteration(&mut self, lengths: &[f64]) -> AcoResult<&IterationStats> {
        let Some(iteration) = self.open else {
            return Err(AcoError::InvalidState("stop_iteration without start_iteration".into()));
        };
        if lengths.is_empty() {
            return Err(AcoError::Range(format!("iteration {iteration} produced no tour lengths")));
        }

        let (min, max, sum) = lengths.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), &l| (lo.min(l), hi.max(l), sum + l),
        );
        self.open = None;
        self.history.push(IterationStats {
            iteration,
            min,
            mean: sum / lengths.len() as f64,
            max,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Close the open iteration without recording a row.
    pub fn abandon_iteration(&mut self) {
        self.open = None;
    }

    /// Drop the history and any open iteration.
    pub fn clear_stats(&mut self) {
        self.open = None;
        self.history.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn history(&self) -> &[IterationStats] {
        &self.history
    }
}
