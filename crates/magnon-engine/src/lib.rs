//! The stepping engine for Magnon simulations.
//!
//! [`Engine`] owns a validated triple of site registry, neighbor graph,
//! and state store, and advances the state by one global step per
//! [`update()`](Engine::update) call. All validation happens at
//! construction; the stepping path never fails.
//!
//! Two update rules are provided:
//!
//! - [`UpdateRule::Metropolis`] — stochastic single-spin moves accepted by
//!   the Metropolis criterion, for both model kinds;
//! - [`UpdateRule::Precession`] — a deterministic damped-precession
//!   integrator for the vector3 model.
//!
//! The [`UpdateScheme`] fixes, per run, which states a site's local field
//! reads: already-updated neighbors (sequential variants) or the frozen
//! step-start state (synchronous).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod observe;

pub use config::{ConfigError, EngineConfig, UpdateRule, UpdateScheme};
pub use engine::Engine;
pub use observe::Magnetization;
