//! Flat rows written by output backends.

use aco_colony::{BestTour, IterationStats};

/// Tour-length statistics of one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStatsRow {
    pub iteration: u64,
    pub min:       f64,
    pub mean:      f64,
    pub max:       f64,
}

impl From<&IterationStats> for IterationStatsRow {
    fn from(s: &IterationStats) -> Self {
        Self { iteration: s.iteration, min: s.min, mean: s.mean, max: s.max }
    }
}

/// The best tour of one iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTourRow {
    pub iteration:   u64,
    pub tour_length: f64,
    /// Node indices in visiting order, separated by single spaces.
    pub tour:        String,
}

impl From<&BestTour> for BestTourRow {
    fn from(b: &BestTour) -> Self {
        let tour = b.tour.iter().map(usize::to_string).collect::<Vec<_>>().join(" ");
        Self { iteration: b.iteration, tour_length: b.tour_length, tour }
    }
}
