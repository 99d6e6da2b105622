//! Benchmark profiles for the Magnon spin-lattice simulator.
//!
//! Pre-built engines over ring lattices, sized by the caller:
//!
//! - [`metropolis_ring_profile`]: binary Metropolis sweeps at T = 1.0
//! - [`precession_ring_profile`]: synchronous damped precession

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use magnon_core::{ModelKind, SublatticeId};
use magnon_engine::{Engine, EngineConfig, UpdateRule, UpdateScheme};
use magnon_state::{SeedPolicy, StateStore};
use magnon_test_utils::{ring_graph, uniform_registry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Binary Metropolis profile: random-sequential sweeps on a ring at T = 1.0.
pub fn metropolis_ring_profile(site_count: u64, seed: u64) -> Engine {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let store = StateStore::new(
        ModelKind::Binary,
        site_count as usize,
        SeedPolicy::Random,
        &mut rng,
    );
    Engine::new(
        uniform_registry(site_count as usize, SublatticeId(0)),
        ring_graph(site_count, 1.0),
        store,
        EngineConfig {
            rule: UpdateRule::Metropolis { temperature: 1.0 },
            scheme: UpdateScheme::RandomSequential,
            seed,
        },
    )
    .expect("benchmark profile is well-formed")
}

/// Vector precession profile: synchronous damped precession on a ring.
pub fn precession_ring_profile(site_count: u64, seed: u64) -> Engine {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let store = StateStore::new(
        ModelKind::Vector3,
        site_count as usize,
        SeedPolicy::Random,
        &mut rng,
    );
    Engine::new(
        uniform_registry(site_count as usize, SublatticeId(0)),
        ring_graph(site_count, 1.0),
        store,
        EngineConfig {
            rule: UpdateRule::Precession {
                dt: 0.02,
                damping: 0.1,
            },
            scheme: UpdateScheme::Synchronous,
            seed,
        },
    )
    .expect("benchmark profile is well-formed")
}
