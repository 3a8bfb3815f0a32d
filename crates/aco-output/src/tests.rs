//! Integration tests for aco-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use aco_colony::{AntSystemBuilder, BestTour, IterationStats};
    use aco_core::{ColonyConfig, PlanarInstance, PlanarPoint, ProblemModel};

    use crate::csv::{BEST_TOURS_FILE, CsvWriter, ITERATION_STATS_FILE};
    use crate::observer::ColonyOutputObserver;
    use crate::row::{BestTourRow, IterationStatsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn stats_row(iteration: u64) -> IterationStatsRow {
        IterationStatsRow { iteration, min: 10.0, mean: 12.5, max: 15.0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(ITERATION_STATS_FILE).exists());
        assert!(dir.path().join(BEST_TOURS_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(ITERATION_STATS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(ITERATION_STATS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["iteration", "min", "mean", "max"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(BEST_TOURS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["iteration", "tour_length", "tour"]);
    }

    #[test]
    fn stats_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_iteration_stats(&stats_row(4)).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join(ITERATION_STATS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "10");
        assert_eq!(&rows[0][2], "12.5");
        assert_eq!(&rows[0][3], "15");
    }

    #[test]
    fn tour_is_space_separated() {
        let best = BestTour { iteration: 2, tour_length: 7.5, tour: vec![3, 0, 2, 1] };
        let row = BestTourRow::from(&best);
        assert_eq!(row.tour, "3 0 2 1");

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_best_tour(&row).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join(BEST_TOURS_FILE));
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][1], "7.5");
        assert_eq!(&rows[0][2], "3 0 2 1");
    }

    #[test]
    fn stats_row_from_history() {
        let stats = IterationStats { iteration: 9, min: 1.0, mean: 2.0, max: 3.0 };
        assert_eq!(
            IterationStatsRow::from(&stats),
            IterationStatsRow { iteration: 9, min: 1.0, mean: 2.0, max: 3.0 }
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn integration_csv() {
        let points = (0..8)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / 8.0;
                PlanarPoint::new(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        let problem = ProblemModel::new(&PlanarInstance::new(points)).unwrap();
        let mut colony = AntSystemBuilder::new(ColonyConfig::default())
            .problem(problem)
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ColonyOutputObserver::new(writer);
        colony.run(5, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let stats = read_rows(dir.path().join(ITERATION_STATS_FILE));
        let tours = read_rows(dir.path().join(BEST_TOURS_FILE));
        assert_eq!(stats.len(), 5);
        assert_eq!(tours.len(), 5);
        for (i, row) in tours.iter().enumerate() {
            assert_eq!(row[0].parse::<u64>().unwrap(), i as u64);
            assert_eq!(row[2].split(' ').count(), 8);
            let length: f64 = row[1].parse().unwrap();
            assert_eq!(length, colony.best_tours()[i].tour_length);
        }
    }

    struct Failing;

    impl OutputWriter for Failing {
        fn write_iteration_stats(&mut self, _row: &IterationStatsRow) -> crate::OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn write_best_tour(&mut self, _row: &BestTourRow) -> crate::OutputResult<()> {
            Err(std::io::Error::other("second failure").into())
        }

        fn finish(&mut self) -> crate::OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn observer_keeps_first_error() {
        use aco_colony::ColonyObserver;

        let mut obs = ColonyOutputObserver::new(Failing);
        let best = BestTour { iteration: 0, tour_length: 1.0, tour: vec![0, 1] };
        let stats = IterationStats { iteration: 0, min: 1.0, mean: 1.0, max: 1.0 };
        obs.on_iteration_end(0, &best, &stats);

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }
}
