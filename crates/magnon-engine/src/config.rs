//! Engine configuration and validation.

use magnon_core::{ModelKind, ModelMismatchError};
use std::error::Error;
use std::fmt;

/// The model-specific rule applied to every site each step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateRule {
    /// Stochastic single-spin moves accepted by the Metropolis criterion.
    ///
    /// Valid for both model kinds: binary sites propose a sign flip,
    /// vector3 sites propose a uniform random reorientation. A move that
    /// lowers the energy is always accepted; one that raises it by `ΔE`
    /// is accepted with probability `exp(−ΔE / temperature)`.
    /// `temperature == 0` is the quench limit — only strictly
    /// energy-lowering moves are kept.
    Metropolis {
        /// Simulation temperature, `>= 0` and finite.
        temperature: f64,
    },
    /// Deterministic damped-precession integrator (vector3 model only).
    ///
    /// Each step advances every spin by
    /// `s′ = normalize(s + dt·(s × h) + damping·dt·(h − (s·h)·s))`,
    /// where `h` is the site's local field. The explicit renormalization
    /// keeps orientations on the unit sphere.
    Precession {
        /// Integration time step, `> 0` and finite.
        dt: f64,
        /// Transverse relaxation strength, `>= 0` and finite.
        damping: f64,
    },
}

/// Which states a site's local field reads during one step.
///
/// The scheme changes the simulation semantics and is fixed per run —
/// never silently mixed within or across steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateScheme {
    /// Visit sites in ascending id order, updating in place. Later sites
    /// observe earlier updates within the same step. Deterministic replay
    /// for a fixed seed.
    Sequential,
    /// Draw `site_count` random sites per step, updating in place — the
    /// classical Monte Carlo sweep. Deterministic for a fixed seed.
    RandomSequential,
    /// Every site reads the frozen step-start state; writes become visible
    /// only after the step completes.
    Synchronous,
}

/// Input for constructing an [`Engine`](crate::Engine).
///
/// Validated (together with the graph/store pair) by
/// [`Engine::new`](crate::Engine::new); the engine consumes the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// The update rule.
    pub rule: UpdateRule,
    /// The update scheme.
    pub scheme: UpdateScheme,
    /// Seed for the engine's deterministic RNG.
    pub seed: u64,
}

impl EngineConfig {
    /// Check rule parameters and rule/model compatibility.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidTemperature`] for a negative or non-finite
    ///   Metropolis temperature;
    /// - [`ConfigError::InvalidTimeStep`] / [`ConfigError::InvalidDamping`]
    ///   for out-of-range precession parameters;
    /// - [`ConfigError::Model`] if the rule requires a different model kind
    ///   than the store provides (precession on a binary store).
    pub fn validate(&self, kind: ModelKind) -> Result<(), ConfigError> {
        match self.rule {
            UpdateRule::Metropolis { temperature } => {
                if !temperature.is_finite() || temperature < 0.0 {
                    return Err(ConfigError::InvalidTemperature { value: temperature });
                }
            }
            UpdateRule::Precession { dt, damping } => {
                if kind != ModelKind::Vector3 {
                    return Err(ConfigError::Model(ModelMismatchError {
                        expected: ModelKind::Vector3,
                        found: kind,
                    }));
                }
                if !dt.is_finite() || dt <= 0.0 {
                    return Err(ConfigError::InvalidTimeStep { value: dt });
                }
                if !damping.is_finite() || damping < 0.0 {
                    return Err(ConfigError::InvalidDamping { value: damping });
                }
            }
        }
        Ok(())
    }
}

/// Errors detected while constructing an [`Engine`](crate::Engine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The update rule requires a different model kind than the store runs.
    Model(ModelMismatchError),
    /// Registry, graph, and store disagree about the number of sites.
    SiteCountMismatch {
        /// Sites in the registry.
        registry: usize,
        /// Sites the graph was built for.
        graph: usize,
        /// Sites the state store holds.
        store: usize,
    },
    /// Metropolis temperature is negative or non-finite.
    InvalidTemperature {
        /// The rejected value.
        value: f64,
    },
    /// Precession time step is non-positive or non-finite.
    InvalidTimeStep {
        /// The rejected value.
        value: f64,
    },
    /// Precession damping is negative or non-finite.
    InvalidDamping {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(err) => write!(f, "{err}"),
            Self::SiteCountMismatch {
                registry,
                graph,
                store,
            } => write!(
                f,
                "site counts disagree: registry {registry}, graph {graph}, store {store}"
            ),
            Self::InvalidTemperature { value } => {
                write!(f, "temperature must be finite and >= 0, got {value}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "time step must be finite and > 0, got {value}")
            }
            Self::InvalidDamping { value } => {
                write!(f, "damping must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}
