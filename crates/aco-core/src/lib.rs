//! `aco-core`: foundational types for the ant system workspace.
//!
//! This crate is a dependency of every other `aco-*` crate.  It has no
//! `aco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`ids`]       | `AntId`                                                    |
//! | [`matrix`]    | `SymmetricMatrix` (flat, bounds-checked, mirrored writes)  |
//! | [`problem`]   | `DistanceProvider`, `FnDistance`, `ExplicitMatrix`, `ProblemModel` |
//! | [`planar`]    | `PlanarPoint`, `PlanarInstance` (Euclidean provider)       |
//! | [`rng`]       | `AntRng` (per-ant), `AntRngs`, `ColonyRng` (colony-level)  |
//! | [`config`]    | `ColonyConfig`, `SelectorKind`                             |
//! | [`error`]     | `AcoError`, `AcoResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod matrix;
pub mod planar;
pub mod problem;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ColonyConfig, SelectorKind};
pub use error::{AcoError, AcoResult};
pub use ids::AntId;
pub use matrix::SymmetricMatrix;
pub use planar::{PlanarInstance, PlanarPoint};
pub use problem::{DistanceProvider, ExplicitMatrix, FnDistance, ProblemModel, SELF_DISTANCE};
pub use rng::{AntRng, AntRngs, ColonyRng};
