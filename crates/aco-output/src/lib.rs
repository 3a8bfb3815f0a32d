//! `aco-output`: history writers for Ant System runs.
//!
//! | Backend | Files created                            |
//! |---------|------------------------------------------|
//! | CSV     | `iteration_stats.csv`, `best_tours.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`ColonyOutputObserver`], which implements `aco_colony::ColonyObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use aco_output::{ColonyOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ColonyOutputObserver::new(writer);
//! colony.run(100, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ColonyOutputObserver;
pub use row::{BestTourRow, IterationStatsRow};
pub use writer::OutputWriter;
