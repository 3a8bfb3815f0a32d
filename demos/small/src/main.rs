//! small: a 30-city Ant System run on a random planar instance.
//!
//! Cities are scattered uniformly over a 1 000 × 1 000 square with TSPLIB
//! `EUC_2D` rounding.  Writes `iteration_stats.csv` and `best_tours.csv`
//! under `output/small`, plus a `summary.json` with the parameters and the
//! best tour found.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use aco_colony::{AntSystemBuilder, BestTour, ColonyObserver, IterationStats};
use aco_core::{ColonyConfig, ColonyRng, PlanarInstance, PlanarPoint, ProblemModel, SelectorKind};
use aco_output::writer::OutputWriter;
use aco_output::{ColonyOutputObserver, CsvWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const CITY_COUNT:      usize = 30;
const SEED:            u64   = 42;
const ITERATIONS:      u64   = 200;
const SIDE:            f64   = 1_000.0;
const REPORT_INTERVAL: u64   = 20;
const OUTPUT_DIR:      &str  = "output/small";

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints a line every `interval` iterations and whenever the overall best
/// improves, then forwards to the CSV observer.
struct ProgressObserver<W: OutputWriter> {
    inner:    ColonyOutputObserver<W>,
    interval: u64,
    best:     f64,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: ColonyOutputObserver<W>, interval: u64) -> Self {
        Self { inner, interval, best: f64::INFINITY }
    }
}

impl<W: OutputWriter> ColonyObserver for ProgressObserver<W> {
    fn on_iteration_start(&mut self, iteration: u64) {
        self.inner.on_iteration_start(iteration);
    }

    fn on_iteration_end(&mut self, iteration: u64, best: &BestTour, stats: &IterationStats) {
        let improved = best.tour_length < self.best;
        if improved {
            self.best = best.tour_length;
        }
        if improved || iteration % self.interval == 0 {
            println!(
                "iter {iteration:>4}  best {:>8.1}  min {:>8.1}  mean {:>8.1}  max {:>8.1}{}",
                self.best,
                stats.min,
                stats.mean,
                stats.max,
                if improved { "  *" } else { "" },
            );
        }
        self.inner.on_iteration_end(iteration, best, stats);
    }

    fn on_run_end(&mut self, iterations: u64) {
        self.inner.on_run_end(iterations);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== small: Ant System on {CITY_COUNT} random cities ===");
    println!("Iterations: {ITERATIONS}  |  Seed: {SEED}");
    println!();

    // 1. Random instance from its own RNG stream.
    let mut rng = ColonyRng::new(SEED).child(1);
    let points: Vec<PlanarPoint> = (0..CITY_COUNT)
        .map(|_| PlanarPoint::new(rng.gen_range(0.0..SIDE), rng.gen_range(0.0..SIDE)))
        .collect();
    let problem = ProblemModel::new(&PlanarInstance::euc_2d(points))?;

    // 2. Colony.
    let config = ColonyConfig {
        seed:             SEED,
        alpha:            1.0,
        beta:             3.0,
        evaporation_rate: 0.5,
        selector:         SelectorKind::RouletteWheel,
        num_threads:      None, // all logical cores
    };
    let mut colony = AntSystemBuilder::new(config.clone()).problem(problem).build()?;
    let params = colony.parameters();
    println!(
        "Ants: {}  |  L_nn: {:.0} (from node {})  |  tau0: {:.3e}",
        params.number_of_ants,
        params.nearest_neighbour_tour_length,
        params.nearest_neighbour_start,
        params.initial_pheromone,
    );
    println!();

    // 3. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(ColonyOutputObserver::new(writer), REPORT_INTERVAL);

    // 4. Run.
    let t0 = Instant::now();
    colony.run(ITERATIONS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let best = colony
        .best_tour()
        .ok_or_else(|| anyhow::anyhow!("colony recorded no tours"))?;
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Best tour: {:.0} (iteration {}), {:.1}% of the nearest-neighbour tour",
        best.tour_length,
        best.iteration,
        100.0 * best.tour_length / colony.parameters().nearest_neighbour_tour_length,
    );

    let summary = serde_json::json!({
        "config":     config,
        "parameters": colony.parameters(),
        "best":       best,
        "iterations": colony.iteration(),
    });
    let summary_path = Path::new(OUTPUT_DIR).join("summary.json");
    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  {}", summary_path.display());

    Ok(())
}
