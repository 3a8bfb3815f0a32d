//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `iteration_stats.csv`: `iteration,min,mean,max`
//! - `best_tours.csv`: `iteration,tour_length,tour`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BestTourRow, IterationStatsRow, OutputResult};

pub const ITERATION_STATS_FILE: &str = "iteration_stats.csv";
pub const BEST_TOURS_FILE: &str = "best_tours.csv";

/// Writes colony history to two CSV files.
pub struct CsvWriter {
    stats:    Writer<File>,
    tours:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut stats = Writer::from_path(dir.join(ITERATION_STATS_FILE))?;
        stats.write_record(["iteration", "min", "mean", "max"])?;

        let mut tours = Writer::from_path(dir.join(BEST_TOURS_FILE))?;
        tours.write_record(["iteration", "tour_length", "tour"])?;

        Ok(Self { stats, tours, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_iteration_stats(&mut self, row: &IterationStatsRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.iteration.to_string(),
            row.min.to_string(),
            row.mean.to_string(),
            row.max.to_string(),
        ])?;
        Ok(())
    }

    fn write_best_tour(&mut self, row: &BestTourRow) -> OutputResult<()> {
        self.tours.write_record(&[
            row.iteration.to_string(),
            row.tour_length.to_string(),
            row.tour.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stats.flush()?;
        self.tours.flush()?;
        Ok(())
    }
}
