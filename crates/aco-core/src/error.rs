//! Error taxonomy shared by every `aco-*` crate.
//!
//! All variants describe programming errors raised synchronously at the
//! violating call.  Nothing in the core performs I/O, so there is no
//! transient failure class and nothing is retried.

use thiserror::Error;

/// The error type for the problem model, pheromone store, selectors, ants
/// and the colony orchestrator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A constructor or configuration value lies outside its valid domain.
    #[error("value out of range: {0}")]
    Range(String),

    /// A node index is not below the problem's node count.
    #[error("node index {index} out of range for {node_count} nodes")]
    Index { index: usize, node_count: usize },

    /// An operation was called in a state that does not permit it.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A required input was never supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}

/// Shorthand result type for all `aco-*` crates.
pub type AcoResult<T> = Result<T, AcoError>;

/// Return an [`AcoError::Index`] unless `index < node_count`.
#[inline]
pub fn check_index(index: usize, node_count: usize) -> AcoResult<()> {
    if index < node_count {
        Ok(())
    } else {
        Err(AcoError::Index { index, node_count })
    }
}
