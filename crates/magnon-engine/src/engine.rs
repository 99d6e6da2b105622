//! The engine and its per-step update loops.

use crate::config::{ConfigError, EngineConfig, UpdateRule, UpdateScheme};
use magnon_core::{ModelKind, ModelMismatchError, SiteId, StepId, Vector3};
use magnon_lattice::{NeighborGraph, SiteRegistry};
use magnon_state::{random_unit_vector, StateStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Advances one simulation instance step by step.
///
/// Owns the registry, graph, and store for its lattice plus a seeded
/// deterministic RNG. Construction validates everything that can be
/// invalid — site-count agreement, rule/model compatibility, parameter
/// ranges — so [`update()`](Self::update) is infallible and the hot loop
/// carries no error paths.
///
/// # Examples
///
/// ```
/// use magnon_core::{ModelKind, SiteId, SublatticeId};
/// use magnon_engine::{Engine, EngineConfig, UpdateRule, UpdateScheme};
/// use magnon_lattice::{GraphBuilder, SiteRegistry};
/// use magnon_state::StateStore;
///
/// let mut registry = SiteRegistry::new();
/// for i in 0..3 {
///     registry.add_site(format!("site-{i}"), SublatticeId(0)).unwrap();
/// }
///
/// let mut builder = GraphBuilder::for_registry(&registry);
/// for i in 0..3u64 {
///     builder.add_symmetric_edge(SiteId(i), SiteId((i + 1) % 3), 1.0).unwrap();
/// }
///
/// let store = StateStore::from_binary(vec![1, -1, 1]);
/// let config = EngineConfig {
///     rule: UpdateRule::Metropolis { temperature: 0.0 },
///     scheme: UpdateScheme::Sequential,
///     seed: 42,
/// };
///
/// let mut engine = Engine::new(registry, builder.build(), store, config).unwrap();
/// engine.update();
/// assert_eq!(engine.step_id().0, 1);
/// assert_eq!(engine.binary_states().unwrap().len(), 3);
/// ```
#[derive(Debug)]
pub struct Engine {
    pub(crate) registry: SiteRegistry,
    pub(crate) graph: NeighborGraph,
    pub(crate) store: StateStore,
    rule: UpdateRule,
    scheme: UpdateScheme,
    rng: ChaCha8Rng,
    step: StepId,
    frozen_binary: Vec<i8>,
    frozen_vector3: Vec<Vector3>,
}

impl Engine {
    /// Construct an engine over a validated registry/graph/store triple.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::SiteCountMismatch`] if the three structures
    ///   disagree about the number of sites;
    /// - the rule/parameter errors of [`EngineConfig::validate`].
    pub fn new(
        registry: SiteRegistry,
        graph: NeighborGraph,
        store: StateStore,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        if registry.site_count() != graph.site_count()
            || graph.site_count() != store.site_count()
        {
            return Err(ConfigError::SiteCountMismatch {
                registry: registry.site_count(),
                graph: graph.site_count(),
                store: store.site_count(),
            });
        }
        config.validate(store.kind())?;

        // The frozen step-start copy only exists for the synchronous scheme.
        let site_count = store.site_count();
        let (frozen_binary, frozen_vector3) = match (config.scheme, store.kind()) {
            (UpdateScheme::Synchronous, ModelKind::Binary) => {
                (Vec::with_capacity(site_count), Vec::new())
            }
            (UpdateScheme::Synchronous, ModelKind::Vector3) => {
                (Vec::new(), Vec::with_capacity(site_count))
            }
            _ => (Vec::new(), Vec::new()),
        };

        Ok(Self {
            registry,
            graph,
            store,
            rule: config.rule,
            scheme: config.scheme,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            step: StepId(0),
            frozen_binary,
            frozen_vector3,
        })
    }

    /// Advance the simulation by exactly one global step.
    ///
    /// Never fails: all inputs were validated at construction, and numeric
    /// anomalies in a well-formed system are defects, not runtime
    /// conditions.
    pub fn update(&mut self) {
        match self.rule {
            UpdateRule::Metropolis { temperature } => match self.store.kind() {
                ModelKind::Binary => self.metropolis_binary_step(temperature),
                ModelKind::Vector3 => self.metropolis_vector3_step(temperature),
            },
            UpdateRule::Precession { dt, damping } => self.precession_step(dt, damping),
        }
        self.step = StepId(self.step.0 + 1);
    }

    /// Advance the simulation by `n_steps` global steps.
    ///
    /// Cancellation is step-granular: a step in progress always runs to
    /// completion, so callers wanting to stop a long run interleave their
    /// own checks between shorter `run` calls.
    pub fn run(&mut self, n_steps: u64) {
        for _ in 0..n_steps {
            self.update();
        }
    }

    /// Number of completed steps.
    pub fn step_id(&self) -> StepId {
        self.step
    }

    /// The configured update rule.
    pub fn rule(&self) -> UpdateRule {
        self.rule
    }

    /// The configured update scheme.
    pub fn scheme(&self) -> UpdateScheme {
        self.scheme
    }

    /// The site registry this engine was built over.
    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// The neighbor graph this engine traverses.
    pub fn graph(&self) -> &NeighborGraph {
        &self.graph
    }

    /// The state store, for callers that need the full surface.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Current binary states.
    ///
    /// # Errors
    ///
    /// [`ModelMismatchError`] if this instance runs the vector3 model.
    pub fn binary_states(&self) -> Result<&[i8], ModelMismatchError> {
        self.store.binary()
    }

    /// Current vector3 states.
    ///
    /// # Errors
    ///
    /// [`ModelMismatchError`] if this instance runs the binary model.
    pub fn vector3_states(&self) -> Result<&[Vector3], ModelMismatchError> {
        self.store.vector3()
    }

    fn metropolis_binary_step(&mut self, temperature: f64) {
        let graph = &self.graph;
        let rng = &mut self.rng;
        let states = self
            .store
            .binary_mut()
            .expect("model kind validated at construction");

        match self.scheme {
            UpdateScheme::Sequential => {
                for site in 0..states.len() {
                    try_binary_flip(graph, states, site, temperature, rng);
                }
            }
            UpdateScheme::RandomSequential => {
                let site_count = states.len();
                for _ in 0..site_count {
                    let site = rng.random_range(0..site_count);
                    try_binary_flip(graph, states, site, temperature, rng);
                }
            }
            UpdateScheme::Synchronous => {
                self.frozen_binary.clear();
                self.frozen_binary.extend_from_slice(states);
                for site in 0..states.len() {
                    let h = binary_local_field(graph, &self.frozen_binary, site);
                    let delta_e = 2.0 * f64::from(self.frozen_binary[site]) * h;
                    if metropolis_accepts(delta_e, temperature, rng) {
                        states[site] = -self.frozen_binary[site];
                    }
                }
            }
        }
    }

    fn metropolis_vector3_step(&mut self, temperature: f64) {
        let graph = &self.graph;
        let rng = &mut self.rng;
        let states = self
            .store
            .vector3_mut()
            .expect("model kind validated at construction");

        match self.scheme {
            UpdateScheme::Sequential => {
                for site in 0..states.len() {
                    try_vector3_reorientation(graph, states, site, temperature, rng);
                }
            }
            UpdateScheme::RandomSequential => {
                let site_count = states.len();
                for _ in 0..site_count {
                    let site = rng.random_range(0..site_count);
                    try_vector3_reorientation(graph, states, site, temperature, rng);
                }
            }
            UpdateScheme::Synchronous => {
                self.frozen_vector3.clear();
                self.frozen_vector3.extend_from_slice(states);
                for site in 0..states.len() {
                    let current = self.frozen_vector3[site];
                    let h = vector3_local_field(graph, &self.frozen_vector3, site);
                    let trial = random_unit_vector(rng);
                    let delta_e = (current - trial).dot(h);
                    if metropolis_accepts(delta_e, temperature, rng) {
                        states[site] = trial;
                    }
                }
            }
        }
    }

    fn precession_step(&mut self, dt: f64, damping: f64) {
        let graph = &self.graph;
        let rng = &mut self.rng;
        let states = self
            .store
            .vector3_mut()
            .expect("model kind validated at construction");

        match self.scheme {
            UpdateScheme::Sequential => {
                for site in 0..states.len() {
                    let h = vector3_local_field(graph, states, site);
                    states[site] = precess(states[site], h, dt, damping);
                }
            }
            UpdateScheme::RandomSequential => {
                let site_count = states.len();
                for _ in 0..site_count {
                    let site = rng.random_range(0..site_count);
                    let h = vector3_local_field(graph, states, site);
                    states[site] = precess(states[site], h, dt, damping);
                }
            }
            UpdateScheme::Synchronous => {
                self.frozen_vector3.clear();
                self.frozen_vector3.extend_from_slice(states);
                for site in 0..states.len() {
                    let h = vector3_local_field(graph, &self.frozen_vector3, site);
                    states[site] = precess(self.frozen_vector3[site], h, dt, damping);
                }
            }
        }
    }
}

/// Coupling-weighted sum of a site's binary neighbor states.
pub(crate) fn binary_local_field(graph: &NeighborGraph, states: &[i8], site: usize) -> f64 {
    graph
        .neighbors_of(SiteId(site as u64))
        .map(|(neighbor, coupling)| coupling * f64::from(states[neighbor.index()]))
        .sum()
}

/// Coupling-weighted sum of a site's vector3 neighbor states.
pub(crate) fn vector3_local_field(
    graph: &NeighborGraph,
    states: &[Vector3],
    site: usize,
) -> Vector3 {
    let mut field = Vector3::ZERO;
    for (neighbor, coupling) in graph.neighbors_of(SiteId(site as u64)) {
        field += coupling * states[neighbor.index()];
    }
    field
}

/// Metropolis acceptance for a proposed move with energy change `delta_e`.
///
/// Energy-lowering moves are always kept. At zero temperature nothing else
/// is; otherwise the uphill acceptance probability is `exp(−ΔE/T)`. The RNG
/// is only drawn from on the uphill path, so downhill-only trajectories
/// consume no randomness.
fn metropolis_accepts<R: Rng + ?Sized>(delta_e: f64, temperature: f64, rng: &mut R) -> bool {
    if delta_e < 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    rng.random::<f64>() <= (-delta_e / temperature).exp()
}

/// Propose and maybe keep a sign flip at `site`.
///
/// With the energy convention `E_site = −s·h`, flipping `s` changes the
/// energy by `ΔE = 2·s·h`.
fn try_binary_flip<R: Rng + ?Sized>(
    graph: &NeighborGraph,
    states: &mut [i8],
    site: usize,
    temperature: f64,
    rng: &mut R,
) {
    let h = binary_local_field(graph, states, site);
    let delta_e = 2.0 * f64::from(states[site]) * h;
    if metropolis_accepts(delta_e, temperature, rng) {
        states[site] = -states[site];
    }
}

/// Propose and maybe keep a uniform random reorientation at `site`.
///
/// `ΔE = E(trial) − E(current) = (current − trial)·h` under the same
/// energy convention.
fn try_vector3_reorientation<R: Rng + ?Sized>(
    graph: &NeighborGraph,
    states: &mut [Vector3],
    site: usize,
    temperature: f64,
    rng: &mut R,
) {
    let current = states[site];
    let h = vector3_local_field(graph, states, site);
    let trial = random_unit_vector(rng);
    let delta_e = (current - trial).dot(h);
    if metropolis_accepts(delta_e, temperature, rng) {
        states[site] = trial;
    }
}

/// One damped-precession increment: `s + dt·(s × h) + damping·dt·(h − (s·h)·s)`,
/// renormalized to the unit sphere.
///
/// A degenerate increment that cancels the spin exactly (possible only for
/// pathologically large `dt`) leaves the spin unchanged rather than
/// producing a zero vector.
fn precess(spin: Vector3, field: Vector3, dt: f64, damping: f64) -> Vector3 {
    let torque = spin.cross(field);
    let relax = (field - spin * spin.dot(field)) * damping;
    let advanced = spin + (torque + relax) * dt;
    if advanced == Vector3::ZERO {
        spin
    } else {
        advanced.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magnon_core::SublatticeId;
    use magnon_lattice::GraphBuilder;
    use magnon_state::{SeedPolicy, StateStore};
    use magnon_test_utils::{ring_graph, uniform_registry};

    fn metropolis_config(temperature: f64) -> EngineConfig {
        EngineConfig {
            rule: UpdateRule::Metropolis { temperature },
            scheme: UpdateScheme::Sequential,
            seed: 7,
        }
    }

    #[test]
    fn rejects_site_count_disagreement() {
        let registry = uniform_registry(4, SublatticeId(0));
        let graph = ring_graph(4, 1.0);
        let store = StateStore::from_binary(vec![1, 1, 1]);
        let err = Engine::new(registry, graph, store, metropolis_config(0.0)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SiteCountMismatch {
                registry: 4,
                graph: 4,
                store: 3,
            }
        );
    }

    #[test]
    fn rejects_precession_on_binary_store() {
        let registry = uniform_registry(3, SublatticeId(0));
        let graph = ring_graph(3, 1.0);
        let store = StateStore::from_binary(vec![1, 1, 1]);
        let config = EngineConfig {
            rule: UpdateRule::Precession {
                dt: 0.01,
                damping: 0.0,
            },
            scheme: UpdateScheme::Synchronous,
            seed: 0,
        };
        assert!(matches!(
            Engine::new(registry, graph, store, config),
            Err(ConfigError::Model(_))
        ));
    }

    #[test]
    fn update_increments_the_step_counter() {
        let registry = uniform_registry(3, SublatticeId(0));
        let graph = ring_graph(3, 1.0);
        let store = StateStore::from_binary(vec![1, 1, 1]);
        let mut engine = Engine::new(registry, graph, store, metropolis_config(0.0)).unwrap();

        assert_eq!(engine.step_id(), StepId(0));
        engine.update();
        assert_eq!(engine.step_id(), StepId(1));
        engine.run(5);
        assert_eq!(engine.step_id(), StepId(6));
    }

    #[test]
    fn state_accessors_respect_model_kind() {
        let registry = uniform_registry(3, SublatticeId(0));
        let graph = ring_graph(3, 1.0);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
        let store = StateStore::new(ModelKind::Vector3, 3, SeedPolicy::Aligned, &mut rng);
        let config = EngineConfig {
            rule: UpdateRule::Precession {
                dt: 0.01,
                damping: 0.1,
            },
            scheme: UpdateScheme::Synchronous,
            seed: 1,
        };
        let engine = Engine::new(registry, graph, store, config).unwrap();

        assert!(engine.vector3_states().is_ok());
        assert!(engine.binary_states().is_err());
    }

    #[test]
    fn local_field_sums_coupling_weighted_neighbors() {
        let mut builder = GraphBuilder::new(3).unwrap();
        builder.add_edge(SiteId(0), SiteId(1), 2.0).unwrap();
        builder.add_edge(SiteId(0), SiteId(2), -1.0).unwrap();
        let graph = builder.build();

        let states = [1i8, 1, -1];
        // 2.0 * (+1) + (-1.0) * (-1) = 3.0
        assert_eq!(binary_local_field(&graph, &states, 0), 3.0);
        // Site 1 has no outgoing edges.
        assert_eq!(binary_local_field(&graph, &states, 1), 0.0);
    }

    #[test]
    fn precess_keeps_unit_norm() {
        let spin = Vector3::new(1.0, 0.0, 0.0);
        let field = Vector3::new(0.0, 0.0, 2.0);
        let next = precess(spin, field, 0.05, 0.1);
        assert!((next.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn precess_with_zero_field_is_identity() {
        let spin = Vector3::new(0.0, 1.0, 0.0);
        let next = precess(spin, Vector3::ZERO, 0.05, 0.1);
        assert_eq!(next, spin);
    }
}
