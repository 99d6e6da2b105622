//! Reusable lattice fixtures.

use magnon_core::{SiteId, SublatticeId};
use magnon_lattice::{GraphBuilder, NeighborGraph, SiteRegistry};

/// A registry of `site_count` sites named `site-<i>`, all on one sublattice.
pub fn uniform_registry(site_count: usize, sublattice: SublatticeId) -> SiteRegistry {
    let mut registry = SiteRegistry::new();
    registry.reserve(site_count);
    for i in 0..site_count {
        registry
            .add_site(format!("site-{i}"), sublattice)
            .expect("fixture registry growth");
    }
    registry
}

/// A registry whose sites alternate between sublattices 0 and 1.
pub fn two_sublattice_registry(site_count: usize) -> SiteRegistry {
    let mut registry = SiteRegistry::new();
    registry.reserve(site_count);
    for i in 0..site_count {
        registry
            .add_site(format!("site-{i}"), SublatticeId((i % 2) as u32))
            .expect("fixture registry growth");
    }
    registry
}

/// A periodic ring of `site_count` sites, both edge directions per bond.
///
/// Every site ends up with degree 2. Rings below 3 sites would degenerate
/// into duplicate bonds, so they are rejected.
pub fn ring_graph(site_count: u64, coupling: f64) -> NeighborGraph {
    assert!(site_count >= 3, "a ring needs at least 3 sites");
    let mut builder = GraphBuilder::new(site_count).expect("fixture site count");
    for i in 0..site_count {
        builder
            .add_symmetric_edge(SiteId(i), SiteId((i + 1) % site_count), coupling)
            .expect("fixture edge");
    }
    builder.build()
}

/// An open chain of `site_count` sites, both edge directions per bond.
pub fn chain_graph(site_count: u64, coupling: f64) -> NeighborGraph {
    let mut builder = GraphBuilder::new(site_count).expect("fixture site count");
    for i in 1..site_count {
        builder
            .add_symmetric_edge(SiteId(i - 1), SiteId(i), coupling)
            .expect("fixture edge");
    }
    builder.build()
}
