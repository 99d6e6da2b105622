//! The model-kind selector.

use std::fmt;

/// Which physical state representation a simulation instance runs.
///
/// Exactly one representation is active per instance: the state store
/// allocates only the matching array, and access against the other kind is
/// rejected with [`ModelMismatchError`](crate::ModelMismatchError).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Discrete scalar spins restricted to {−1, +1} (Ising-like).
    Binary,
    /// Continuous 3-component orientations (Heisenberg-like).
    Vector3,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Vector3 => write!(f, "vector3"),
        }
    }
}
