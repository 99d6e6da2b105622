//! Validating builder for [`NeighborGraph`].

use crate::graph::NeighborGraph;
use crate::registry::SiteRegistry;
use magnon_core::{GraphConstructionError, SiteId};
use smallvec::SmallVec;

/// One site's accumulating edge list.
///
/// Inline capacity 8 covers the common lattice coordinations (chain, ring,
/// square, cubic) without heap allocation; denser topologies spill
/// transparently.
type EdgeList = SmallVec<[(SiteId, f64); 8]>;

/// Accumulates directed, coupling-weighted edges and flattens them into a
/// [`NeighborGraph`].
///
/// Endpoints are validated as edges arrive, so [`build`](Self::build)
/// itself cannot fail: the compressed invariants hold by construction.
/// Per-site neighbor order is the order edges were added, making
/// construction deterministic and repeatable.
///
/// # Examples
///
/// ```
/// use magnon_core::{GraphConstructionError, SiteId};
/// use magnon_lattice::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(2).unwrap();
/// builder.add_symmetric_edge(SiteId(0), SiteId(1), 1.0).unwrap();
///
/// // Dangling endpoints are rejected with the offending id.
/// let err = builder.add_edge(SiteId(0), SiteId(2), 1.0).unwrap_err();
/// assert_eq!(
///     err,
///     GraphConstructionError::DanglingSite { site: SiteId(2), site_count: 2 }
/// );
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    adjacency: Vec<EdgeList>,
    edge_count: usize,
}

impl GraphBuilder {
    /// Create a builder for a graph over `site_count` sites.
    ///
    /// # Errors
    ///
    /// Returns [`GraphConstructionError::SiteCountOverflow`] if `site_count`
    /// does not fit the platform's address width.
    pub fn new(site_count: u64) -> Result<Self, GraphConstructionError> {
        let len = usize::try_from(site_count)
            .map_err(|_| GraphConstructionError::SiteCountOverflow { site_count })?;
        Ok(Self {
            adjacency: vec![EdgeList::new(); len],
            edge_count: 0,
        })
    }

    /// Create a builder sized to the sites of a registry.
    pub fn for_registry(registry: &SiteRegistry) -> Self {
        Self {
            adjacency: vec![EdgeList::new(); registry.site_count()],
            edge_count: 0,
        }
    }

    /// Number of sites the builder was created for.
    pub fn site_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges accumulated so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Append the directed edge `from → to` with the given coupling.
    ///
    /// The edge lands at the end of `from`'s neighbor list. Adding `(i, j)`
    /// does not add `(j, i)`; symmetric couplings go through
    /// [`add_symmetric_edge`](Self::add_symmetric_edge).
    ///
    /// # Errors
    ///
    /// Returns [`GraphConstructionError::DanglingSite`] naming the first
    /// endpoint outside `0..site_count`. The builder is unchanged on error.
    pub fn add_edge(
        &mut self,
        from: SiteId,
        to: SiteId,
        coupling: f64,
    ) -> Result<&mut Self, GraphConstructionError> {
        self.check_site(from)?;
        self.check_site(to)?;
        self.adjacency[from.index()].push((to, coupling));
        self.edge_count += 1;
        Ok(self)
    }

    /// Append both `a → b` and `b → a` with the same coupling.
    ///
    /// Symmetric models must store both directions explicitly; this is the
    /// convenience that keeps the two in lockstep.
    ///
    /// # Errors
    ///
    /// As for [`add_edge`](Self::add_edge); on error, neither direction is
    /// added.
    pub fn add_symmetric_edge(
        &mut self,
        a: SiteId,
        b: SiteId,
        coupling: f64,
    ) -> Result<&mut Self, GraphConstructionError> {
        self.check_site(a)?;
        self.check_site(b)?;
        self.adjacency[a.index()].push((b, coupling));
        self.adjacency[b.index()].push((a, coupling));
        self.edge_count += 2;
        Ok(self)
    }

    /// Flatten the accumulated edge lists into the compressed tables.
    pub fn build(self) -> NeighborGraph {
        let site_count = self.adjacency.len();
        let mut offsets = Vec::with_capacity(site_count + 1);
        let mut counts = Vec::with_capacity(site_count);
        let mut neighbor_ids = Vec::with_capacity(self.edge_count);
        let mut couplings = Vec::with_capacity(self.edge_count);

        let mut running = 0u64;
        offsets.push(running);
        for edges in &self.adjacency {
            running += edges.len() as u64;
            offsets.push(running);
            counts.push(edges.len() as u64);
            for &(id, coupling) in edges {
                neighbor_ids.push(id);
                couplings.push(coupling);
            }
        }

        NeighborGraph {
            offsets,
            neighbor_ids,
            couplings,
            counts,
        }
    }

    fn check_site(&self, site: SiteId) -> Result<(), GraphConstructionError> {
        if site.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphConstructionError::DanglingSite {
                site,
                site_count: self.adjacency.len() as u64,
            })
        }
    }
}

/// Build a graph directly from an edge list.
///
/// Equivalent to feeding every `(from, to, coupling)` triple through
/// [`GraphBuilder::add_edge`] in order.
///
/// # Errors
///
/// Returns the first [`GraphConstructionError`] encountered; nothing is
/// built on failure.
pub fn from_edges(
    site_count: u64,
    edges: impl IntoIterator<Item = (SiteId, SiteId, f64)>,
) -> Result<NeighborGraph, GraphConstructionError> {
    let mut builder = GraphBuilder::new(site_count)?;
    for (from, to, coupling) in edges {
        builder.add_edge(from, to, coupling)?;
    }
    Ok(builder.build())
}
