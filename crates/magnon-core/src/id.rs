//! Strongly-typed identifiers for sites, sublattices, and steps.

use std::fmt;

/// Identifies one site (lattice node) within a simulation instance.
///
/// Site ids are dense: `SiteId(n)` is numerically equal to index `n` in
/// every per-site component array. Ids are assigned append-only by the
/// registry and are never reused or removed.
///
/// The width is fixed at `u64` for both ids and adjacency offsets so that
/// large lattices are addressable with a single index type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub u64);

impl SiteId {
    /// The id as a dense array index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SiteId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Tags a group of sites that share the same local physics.
///
/// Sublattice membership is a per-site component in the registry; the
/// engine groups observables (e.g. magnetization) by this tag. The tag is
/// opaque — values need not be dense or start at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SublatticeId(pub u32);

impl fmt::Display for SublatticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SublatticeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter.
///
/// Incremented each time the engine advances the simulation by one global
/// update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
