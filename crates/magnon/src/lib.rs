//! Magnon: a lattice spin-model simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Magnon sub-crates. For most users, adding `magnon` as a single
//! dependency is sufficient.
//!
//! A simulation instance is assembled once from three immutable-after-setup
//! pieces and then stepped:
//!
//! 1. a [`lattice::SiteRegistry`] assigning dense ids and sublattice tags;
//! 2. a [`lattice::NeighborGraph`] built from coupling-weighted edges;
//! 3. a [`state::StateStore`] holding the physical degrees of freedom for
//!    exactly one model kind.
//!
//! # Quick start
//!
//! ```rust
//! use magnon::prelude::*;
//!
//! // A 4-site ferromagnetic ring.
//! let mut registry = SiteRegistry::new();
//! registry.reserve(4);
//! for i in 0..4 {
//!     registry.add_site(format!("site-{i}"), SublatticeId(0)).unwrap();
//! }
//!
//! let mut builder = GraphBuilder::for_registry(&registry);
//! for i in 0..4u64 {
//!     builder.add_symmetric_edge(SiteId(i), SiteId((i + 1) % 4), 1.0).unwrap();
//! }
//!
//! // Mixed initial spins, quenched at zero temperature.
//! let store = StateStore::from_binary(vec![1, -1, 1, -1]);
//! let config = EngineConfig {
//!     rule: UpdateRule::Metropolis { temperature: 0.0 },
//!     scheme: UpdateScheme::Sequential,
//!     seed: 42,
//! };
//!
//! let mut engine = Engine::new(registry, builder.build(), store, config).unwrap();
//! engine.run(8);
//!
//! let states = engine.binary_states().unwrap();
//! assert!(states.iter().all(|&s| s == states[0]));
//! assert_eq!(engine.total_energy(), -4.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `magnon-core` | Ids, `Vector3`, model kinds, error taxonomy |
//! | [`lattice`] | `magnon-lattice` | Site registry, neighbor graph, builder |
//! | [`state`] | `magnon-state` | State store and seed policies |
//! | [`engine`] | `magnon-engine` | Update rules, schemes, engine, observables |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, vector math, model kinds, and errors (`magnon-core`).
pub use magnon_core as types;

/// Site registry and neighbor topology (`magnon-lattice`).
///
/// The [`lattice::GraphBuilder`] is the only way to construct a
/// [`lattice::NeighborGraph`]; edges are validated as they arrive.
pub use magnon_lattice as lattice;

/// Physical state storage and seeding (`magnon-state`).
pub use magnon_state as state;

/// Update rules, schemes, and the stepping engine (`magnon-engine`).
pub use magnon_engine as engine;

/// Common imports for typical Magnon usage.
///
/// ```rust
/// use magnon::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use magnon_core::{ModelKind, SiteId, StepId, SublatticeId, Vector3};

    // Errors
    pub use magnon_core::{CapacityError, GraphConstructionError, ModelMismatchError};

    // Topology
    pub use magnon_lattice::{GraphBuilder, NeighborGraph, SiteRegistry};

    // State
    pub use magnon_state::{SeedPolicy, StateStore};

    // Engine
    pub use magnon_engine::{
        ConfigError, Engine, EngineConfig, Magnetization, UpdateRule, UpdateScheme,
    };
}
