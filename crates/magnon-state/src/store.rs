//! The per-site state store.

use crate::seed::{random_spin, random_unit_vector, SeedPolicy};
use magnon_core::{ModelKind, ModelMismatchError, Vector3};
use rand::Rng;

/// The spin-up value of the binary domain.
pub const SPIN_UP: i8 = 1;
/// The spin-down value of the binary domain.
pub const SPIN_DOWN: i8 = -1;

/// Per-site physical state for one simulation instance.
///
/// Both representations exist as declared component types, but exactly one
/// is allocated and active — the one matching the configured
/// [`ModelKind`]. Accessors for the other kind return
/// [`ModelMismatchError`] instead of an empty array, so a mismatch between
/// configuration and use surfaces at the first access rather than as
/// silently wrong physics.
///
/// Binary values are restricted to {−1, +1}; an update writing anything
/// else is a logic defect (checked by debug assertions in the engine), not
/// a runtime-recoverable condition. Vector states are not renormalized by
/// the store — unit magnitude is the update rule's documented
/// responsibility.
///
/// # Examples
///
/// ```
/// use magnon_core::ModelKind;
/// use magnon_state::{SeedPolicy, StateStore};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let store = StateStore::new(ModelKind::Binary, 16, SeedPolicy::Aligned, &mut rng);
///
/// assert_eq!(store.binary().unwrap(), &[1i8; 16][..]);
/// assert!(store.vector3().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateStore {
    kind: ModelKind,
    binary: Vec<i8>,
    vector3: Vec<Vector3>,
}

impl StateStore {
    /// Allocate and populate the state array for `kind`.
    ///
    /// Exactly one array is sized to `site_count`; the other stays empty.
    /// `rng` is only drawn from under [`SeedPolicy::Random`].
    pub fn new<R: Rng + ?Sized>(
        kind: ModelKind,
        site_count: usize,
        policy: SeedPolicy,
        rng: &mut R,
    ) -> Self {
        match kind {
            ModelKind::Binary => {
                let binary = match policy {
                    SeedPolicy::Aligned => vec![SPIN_UP; site_count],
                    SeedPolicy::Random => (0..site_count).map(|_| random_spin(rng)).collect(),
                };
                Self::from_binary(binary)
            }
            ModelKind::Vector3 => {
                let vector3 = match policy {
                    SeedPolicy::Aligned => vec![Vector3::new(0.0, 0.0, 1.0); site_count],
                    SeedPolicy::Random => {
                        (0..site_count).map(|_| random_unit_vector(rng)).collect()
                    }
                };
                Self::from_vector3(vector3)
            }
        }
    }

    /// Wrap caller-supplied binary states.
    ///
    /// Every value must be −1 or +1; violations are a logic defect caught
    /// by a debug assertion.
    pub fn from_binary(states: Vec<i8>) -> Self {
        debug_assert!(
            states.iter().all(|&s| s == SPIN_UP || s == SPIN_DOWN),
            "binary states outside {{-1, +1}}"
        );
        Self {
            kind: ModelKind::Binary,
            binary: states,
            vector3: Vec::new(),
        }
    }

    /// Wrap caller-supplied vector states.
    pub fn from_vector3(states: Vec<Vector3>) -> Self {
        Self {
            kind: ModelKind::Vector3,
            binary: Vec::new(),
            vector3: states,
        }
    }

    /// The active model kind.
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Number of sites the active array holds.
    pub fn site_count(&self) -> usize {
        match self.kind {
            ModelKind::Binary => self.binary.len(),
            ModelKind::Vector3 => self.vector3.len(),
        }
    }

    /// Read-only binary state array.
    ///
    /// # Errors
    ///
    /// [`ModelMismatchError`] if this instance runs the vector3 model.
    pub fn binary(&self) -> Result<&[i8], ModelMismatchError> {
        self.expect_kind(ModelKind::Binary)?;
        Ok(&self.binary)
    }

    /// Mutable binary state array.
    ///
    /// # Errors
    ///
    /// [`ModelMismatchError`] if this instance runs the vector3 model.
    pub fn binary_mut(&mut self) -> Result<&mut [i8], ModelMismatchError> {
        self.expect_kind(ModelKind::Binary)?;
        Ok(&mut self.binary)
    }

    /// Read-only vector3 state array.
    ///
    /// # Errors
    ///
    /// [`ModelMismatchError`] if this instance runs the binary model.
    pub fn vector3(&self) -> Result<&[Vector3], ModelMismatchError> {
        self.expect_kind(ModelKind::Vector3)?;
        Ok(&self.vector3)
    }

    /// Mutable vector3 state array.
    ///
    /// # Errors
    ///
    /// [`ModelMismatchError`] if this instance runs the binary model.
    pub fn vector3_mut(&mut self) -> Result<&mut [Vector3], ModelMismatchError> {
        self.expect_kind(ModelKind::Vector3)?;
        Ok(&mut self.vector3)
    }

    fn expect_kind(&self, expected: ModelKind) -> Result<(), ModelMismatchError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(ModelMismatchError {
                expected,
                found: self.kind,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn wrong_kind_access_fails_both_ways() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let binary = StateStore::new(ModelKind::Binary, 4, SeedPolicy::Aligned, &mut rng);
        let vector = StateStore::new(ModelKind::Vector3, 4, SeedPolicy::Aligned, &mut rng);

        assert_eq!(
            binary.vector3().unwrap_err(),
            ModelMismatchError {
                expected: ModelKind::Vector3,
                found: ModelKind::Binary,
            }
        );
        assert_eq!(
            vector.binary().unwrap_err(),
            ModelMismatchError {
                expected: ModelKind::Binary,
                found: ModelKind::Vector3,
            }
        );
    }

    #[test]
    fn aligned_policy_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let binary = StateStore::new(ModelKind::Binary, 8, SeedPolicy::Aligned, &mut rng);
        assert!(binary.binary().unwrap().iter().all(|&s| s == SPIN_UP));

        let vector = StateStore::new(ModelKind::Vector3, 8, SeedPolicy::Aligned, &mut rng);
        let up = Vector3::new(0.0, 0.0, 1.0);
        assert!(vector.vector3().unwrap().iter().all(|&v| v == up));
    }

    #[test]
    fn random_policy_stays_in_domain() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let binary = StateStore::new(ModelKind::Binary, 256, SeedPolicy::Random, &mut rng);
        assert!(binary
            .binary()
            .unwrap()
            .iter()
            .all(|&s| s == SPIN_UP || s == SPIN_DOWN));

        let vector = StateStore::new(ModelKind::Vector3, 256, SeedPolicy::Random, &mut rng);
        assert!(vector
            .vector3()
            .unwrap()
            .iter()
            .all(|v| (v.norm() - 1.0).abs() < 1e-12));
    }

    #[test]
    fn exact_initial_conditions_round_trip() {
        let store = StateStore::from_binary(vec![1, -1, 1]);
        assert_eq!(store.kind(), ModelKind::Binary);
        assert_eq!(store.site_count(), 3);
        assert_eq!(store.binary().unwrap(), &[1, -1, 1][..]);
    }
}
