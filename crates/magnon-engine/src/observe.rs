//! Single-shot observables over the current state.
//!
//! These read the state as it is now; accumulating estimators over a run
//! (traces, moments) is the caller's concern, built on top of these and
//! the raw state accessors.

use crate::engine::{binary_local_field, vector3_local_field, Engine};
use indexmap::IndexMap;
use magnon_core::{ModelKind, SublatticeId, Vector3};

/// Total magnetization for the active model kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Magnetization {
    /// Sum of ±1 spins.
    Binary(f64),
    /// Component-wise sum of orientations.
    Vector3(Vector3),
}

impl Engine {
    /// Total interaction energy of the current state.
    ///
    /// With the per-site convention `E_site(i) = −s_i · h_i`, the total is
    /// `−½ Σ_i s_i · h_i`; the factor ½ corrects for every bond being
    /// visited from both endpoints in symmetric graphs.
    pub fn total_energy(&self) -> f64 {
        match self.store.kind() {
            ModelKind::Binary => {
                let states = self.store.binary().expect("kind just matched");
                let site_energy_sum: f64 = (0..states.len())
                    .map(|site| {
                        f64::from(states[site]) * binary_local_field(&self.graph, states, site)
                    })
                    .sum();
                -0.5 * site_energy_sum
            }
            ModelKind::Vector3 => {
                let states = self.store.vector3().expect("kind just matched");
                let site_energy_sum: f64 = (0..states.len())
                    .map(|site| {
                        states[site].dot(vector3_local_field(&self.graph, states, site))
                    })
                    .sum();
                -0.5 * site_energy_sum
            }
        }
    }

    /// Total magnetization over all sites.
    pub fn magnetization(&self) -> Magnetization {
        match self.store.kind() {
            ModelKind::Binary => {
                let states = self.store.binary().expect("kind just matched");
                Magnetization::Binary(states.iter().copied().map(f64::from).sum())
            }
            ModelKind::Vector3 => {
                let states = self.store.vector3().expect("kind just matched");
                let mut total = Vector3::ZERO;
                for &spin in states {
                    total += spin;
                }
                Magnetization::Vector3(total)
            }
        }
    }

    /// Magnetization grouped by the registry's sublattice tags.
    ///
    /// Keys appear in order of first appearance over ascending site ids,
    /// so the grouping is deterministic for a fixed registry.
    pub fn sublattice_magnetization(&self) -> IndexMap<SublatticeId, Magnetization> {
        let tags = self.registry.sublattices();
        match self.store.kind() {
            ModelKind::Binary => {
                let states = self.store.binary().expect("kind just matched");
                let mut sums: IndexMap<SublatticeId, f64> = IndexMap::new();
                for (site, &spin) in states.iter().enumerate() {
                    *sums.entry(tags[site]).or_insert(0.0) += f64::from(spin);
                }
                sums.into_iter()
                    .map(|(tag, sum)| (tag, Magnetization::Binary(sum)))
                    .collect()
            }
            ModelKind::Vector3 => {
                let states = self.store.vector3().expect("kind just matched");
                let mut sums: IndexMap<SublatticeId, Vector3> = IndexMap::new();
                for (site, &spin) in states.iter().enumerate() {
                    *sums.entry(tags[site]).or_insert(Vector3::ZERO) += spin;
                }
                sums.into_iter()
                    .map(|(tag, sum)| (tag, Magnetization::Vector3(sum)))
                    .collect()
            }
        }
    }
}
