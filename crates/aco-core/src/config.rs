//! Colony configuration and the selection-strategy tag.

use std::fmt;
use std::str::FromStr;

use crate::{AcoError, AcoResult};

// ── SelectorKind ──────────────────────────────────────────────────────────────

/// Which node-selection strategy the colony's ants use.
///
/// Resolved once when the colony is built and fixed for its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectorKind {
    /// Uniform draw among unvisited nodes; ignores pheromone.
    Random,
    /// Draw proportional to choice info.
    #[default]
    RouletteWheel,
    /// Always the closest unvisited node.
    NearestNeighbour,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 3] = [
        SelectorKind::Random,
        SelectorKind::RouletteWheel,
        SelectorKind::NearestNeighbour,
    ];
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectorKind::Random           => "random",
            SelectorKind::RouletteWheel    => "roulette-wheel",
            SelectorKind::NearestNeighbour => "nearest-neighbour",
        };
        f.write_str(s)
    }
}

impl FromStr for SelectorKind {
    type Err = AcoError;

    /// Case-insensitive; `-`, `_` and no separator are all accepted
    /// (`"roulette-wheel"`, `"Roulette_Wheel"`, `"roulettewheel"`).
    fn from_str(s: &str) -> AcoResult<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "random"           => Ok(SelectorKind::Random),
            "roulettewheel"    => Ok(SelectorKind::RouletteWheel),
            "nearestneighbour"
            | "nearestneighbor" => Ok(SelectorKind::NearestNeighbour),
            _ => Err(AcoError::Range(format!(
                "unknown selection strategy {s:?}: expected \"random\", \"roulette-wheel\" or \"nearest-neighbour\""
            ))),
        }
    }
}

// ── ColonyConfig ──────────────────────────────────────────────────────────────

/// Top-level colony configuration.
///
/// Typically built in code or deserialized from JSON by the application
/// crate and handed to `AntSystemBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Pheromone exponent α in `τ^α · η^β`.  Must be finite and ≥ 0.
    pub alpha: f64,

    /// Heuristic exponent β in `τ^α · η^β`.  Must be finite and ≥ 0.
    /// Typical values lie in 2–5.
    pub beta: f64,

    /// ρ: fraction of pheromone removed per iteration, in `[0, 1)`.
    pub evaporation_rate: f64,

    pub selector: SelectorKind,

    /// Worker thread count for parallel construction.  `None` uses all
    /// logical cores.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            seed:             42,
            alpha:            1.0,
            beta:             2.0,
            evaporation_rate: 0.5,
            selector:         SelectorKind::RouletteWheel,
            num_threads:      None,
        }
    }
}

impl ColonyConfig {
    /// Check every numeric field; the first violation is returned as a
    /// range error.
    pub fn validate(&self) -> AcoResult<()> {
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(AcoError::Range(format!("alpha must be finite and >= 0, got {}", self.alpha)));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(AcoError::Range(format!("beta must be finite and >= 0, got {}", self.beta)));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::Range(format!(
                "evaporation rate must lie in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if self.num_threads == Some(0) {
            return Err(AcoError::Range("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
