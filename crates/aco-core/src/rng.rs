//! Deterministic per-ant and colony-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each ant gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (ant_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ant IDs uniformly across the seed space.
//!
//! - Ants never share RNG state, so tour construction may run on any number
//!   of threads and still reproduce the same tours for the same seed.
//! - Start nodes and the parameter start node come from a single
//!   [`ColonyRng`] that is only touched on the orchestrating thread.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AntId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AntRng ────────────────────────────────────────────────────────────────────

/// Per-ant deterministic RNG.
///
/// Stored in [`AntRngs`] beside the ant collection rather than inside each
/// ant, so the colony can hand out `&mut AntRng` and `&mut Ant` at the same
/// time during construction.
pub struct AntRng(SmallRng);

impl AntRng {
    /// Seed deterministically from the run's global seed and an ant ID.
    pub fn new(global_seed: u64, ant: AntId) -> Self {
        let seed = global_seed ^ (ant.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AntRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── AntRngs ───────────────────────────────────────────────────────────────────

/// One [`AntRng`] per ant, indexed by [`AntId`].
///
/// `AntRngs` is `Send` but not `Sync`: during parallel construction each
/// worker receives exclusive `&mut` access to a disjoint element through
/// `par_iter_mut()` on [`as_mut_slice`](Self::as_mut_slice).
pub struct AntRngs {
    pub inner: Vec<AntRng>,
}

impl AntRngs {
    /// Allocate and seed `count` per-ant RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AntRng::new(global_seed, AntId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one ant's RNG.
    #[inline]
    pub fn get_mut(&mut self, ant: AntId) -> &mut AntRng {
        &mut self.inner[ant.index()]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [AntRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── ColonyRng ─────────────────────────────────────────────────────────────────

/// Colony-level RNG for start-node draws and the parameter start node.
///
/// Used only on the orchestrating thread.  Derive further independent
/// streams with [`child`](Self::child).
pub struct ColonyRng(SmallRng);

impl ColonyRng {
    pub fn new(seed: u64) -> Self {
        ColonyRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `ColonyRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> ColonyRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        ColonyRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
