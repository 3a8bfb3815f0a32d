//! Strongly typed ant identifier.
//!
//! Node indices are plain `usize` values in `[0, node_count)` because they
//! index matrix rows directly; ants get a wrapper so the per-ant RNG seeding
//! cannot be handed a node index by mistake.

use std::fmt;

/// Index of an ant in the colony.  Also the seed offset of its [`AntRng`].
///
/// [`AntRng`]: crate::AntRng
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntId(pub u32);

impl AntId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AntId({})", self.0)
    }
}

impl From<AntId> for usize {
    #[inline(always)]
    fn from(id: AntId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AntId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AntId, Self::Error> {
        u32::try_from(n).map(AntId)
    }
}
