//! Strongly typed agent identifier.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can be used as a map key without
//! ceremony.  The inner integer is `pub` to allow direct indexing into
//! per-agent `Vec`s, but callers should prefer `.index()` for clarity.

use std::fmt;

/// Index of an agent in a pursuit formation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The agent this one pursues in a formation of `n` agents:
    /// `(index + 1) mod n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    #[inline]
    pub fn successor(self, n: usize) -> AgentId {
        AgentId(((self.index() + 1) % n) as u32)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
