//! Per-ant tour construction state machine.
//!
//! ```text
//! Uninitialised ──initialise(start)──▶ Constructing ──step() × (n − 1)──▶ Complete
//!       ▲                                                                    │
//!       └──────────────────────── initialise(start) ◀────────────────────────┘
//! ```
//!
//! `step()` adds only the edge it walks.  The edge back to the start node is
//! added by [`Ant::close_tour`], which the colony calls for every ant once
//! construction has finished and before tour lengths are compared or used
//! for deposits.

use std::cmp::Ordering;

use aco_core::error::check_index;
use aco_core::{AcoError, AcoResult, AntId, AntRng, ProblemModel};

use crate::{ConstructionContext, NodeSelector};

/// Lifecycle of one tour construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AntState {
    Uninitialised,
    Constructing,
    /// Every node visited; the tour may still be open (see [`Ant::is_closed`]).
    Complete,
}

// ── Candidates ────────────────────────────────────────────────────────────────

/// The unvisited nodes an ant may move to next.
///
/// Carries both a visited-flag slice for O(1) membership checks (used by the
/// nearest-neighbour scan) and the compact unvisited list (used by the
/// sampling strategies).
#[derive(Clone, Copy, Debug)]
pub struct Candidates<'a> {
    visited:   &'a [bool],
    unvisited: &'a [usize],
}

impl<'a> Candidates<'a> {
    /// `visited[k]` must be `false` exactly for the nodes in `unvisited`.
    pub fn new(visited: &'a [bool], unvisited: &'a [usize]) -> Self {
        Self { visited, unvisited }
    }

    #[inline]
    pub fn unvisited(&self) -> &'a [usize] {
        self.unvisited
    }

    /// Nodes outside the visited slice count as visited.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.get(node).copied().unwrap_or(true)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.unvisited.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.unvisited.is_empty()
    }
}

// ── Ant ───────────────────────────────────────────────────────────────────────

/// One agent building a closed tour over all nodes.
///
/// An `Ant` holds no references: the problem, pheromone store, selector and
/// RNG are passed to [`step`](Self::step), so the colony can lend every ant
/// the same shared snapshot while mutating each ant independently.
#[derive(Clone, Debug)]
pub struct Ant {
    id:          AntId,
    node_count:  usize,
    state:       AntState,
    current:     usize,
    visited:     Vec<bool>,
    unvisited:   Vec<usize>,
    tour:        Vec<usize>,
    tour_length: f64,
    closed:      bool,
}

impl Ant {
    /// An uninitialised ant for a problem with `node_count` nodes.
    pub fn new(id: AntId, node_count: usize) -> Self {
        Self {
            id,
            node_count,
            state:       AntState::Uninitialised,
            current:     0,
            visited:     vec![false; node_count],
            unvisited:   Vec::with_capacity(node_count),
            tour:        Vec::with_capacity(node_count),
            tour_length: 0.0,
            closed:      false,
        }
    }

    /// Start a fresh tour at `start`, discarding any previous one.
    pub fn initialise(&mut self, start: usize) -> AcoResult<()> {
        check_index(start, self.node_count)?;

        self.visited.fill(false);
        self.visited[start] = true;
        self.unvisited.clear();
        self.unvisited.extend((0..self.node_count).filter(|&k| k != start));
        self.tour.clear();
        self.tour.push(start);
        self.tour_length = 0.0;
        self.current = start;
        self.closed = false;
        self.state = if self.unvisited.is_empty() {
            AntState::Complete
        } else {
            AntState::Constructing
        };
        Ok(())
    }

    /// Move to the node chosen by `selector` and return it.
    ///
    /// Valid only while [`AntState::Constructing`]; after the
    /// `node_count − 1`-th call the ant is [`AntState::Complete`].
    pub fn step<S: NodeSelector + ?Sized>(
        &mut self,
        ctx:      &ConstructionContext<'_>,
        selector: &S,
        rng:      &mut AntRng,
    ) -> AcoResult<usize> {
        match self.state {
            AntState::Constructing => {}
            AntState::Uninitialised => {
                return Err(AcoError::InvalidState(format!(
                    "{} stepped before initialise",
                    self.id
                )));
            }
            AntState::Complete => {
                return Err(AcoError::InvalidState(format!(
                    "{} stepped after visiting all {} nodes",
                    self.id, self.node_count
                )));
            }
        }

        let next = selector.select_next(self.current, &self.candidates(), ctx, rng)?;
        let Some(pos) = self.unvisited.iter().position(|&k| k == next) else {
            return Err(AcoError::InvalidState(format!(
                "selector returned node {next}, which {} cannot move to",
                self.id
            )));
        };

        self.tour_length += ctx.problem.distance(self.current, next)?;
        self.unvisited.swap_remove(pos);
        self.visited[next] = true;
        self.tour.push(next);
        self.current = next;

        if self.unvisited.is_empty() {
            self.state = AntState::Complete;
        }
        Ok(next)
    }

    /// Add the edge from the current node back to the start node and return
    /// the closed tour length.
    ///
    /// Fails with an invalid-state error unless the ant is complete and not
    /// yet closed.
    pub fn close_tour(&mut self, problem: &ProblemModel) -> AcoResult<f64> {
        if self.state != AntState::Complete || self.closed {
            return Err(AcoError::InvalidState(format!(
                "{} cannot close its tour in state {:?} (closed: {})",
                self.id, self.state, self.closed
            )));
        }
        if self.tour.len() >= 2 {
            self.tour_length += problem.distance(self.current, self.tour[0])?;
        }
        self.closed = true;
        Ok(self.tour_length)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AntId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> AntState {
        self.state
    }

    #[inline]
    pub fn current_node(&self) -> usize {
        self.current
    }

    /// Nodes in visiting order, starting with the start node.  Implicitly
    /// closed back to `tour()[0]`.
    #[inline]
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Sum of walked edges; includes the closing edge once
    /// [`close_tour`](Self::close_tour) has run.
    #[inline]
    pub fn tour_length(&self) -> f64 {
        self.tour_length
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Same rule as [`Candidates::is_visited`]: nodes outside the problem
    /// count as visited, so they are never offered as a next move.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        self.candidates().is_visited(node)
    }

    /// How many more `step()` calls the current tour needs.
    #[inline]
    pub fn steps_remaining(&self) -> usize {
        match self.state {
            AntState::Constructing => self.unvisited.len(),
            AntState::Uninitialised | AntState::Complete => 0,
        }
    }

    #[inline]
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(&self.visited, &self.unvisited)
    }

    /// Ascending tour length.  Callers that need construction-order tie
    /// breaking use a stable minimum such as `Iterator::min_by`.
    #[inline]
    pub fn compare_length(&self, other: &Ant) -> Ordering {
        self.tour_length.total_cmp(&other.tour_length)
    }
}
