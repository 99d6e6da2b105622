//! The compressed neighbor graph.

use magnon_core::{GraphConstructionError, SiteId};

/// Compressed (CSR-style) adjacency over dense site ids.
///
/// Four parallel tables describe the topology:
///
/// - `offsets`: `site_count + 1` entries; site `i`'s neighbor slice is
///   `[offsets[i], offsets[i + 1])` into the flattened arrays.
/// - `neighbor_ids`: flattened neighbor lists, in the order edges were
///   added at construction time.
/// - `couplings`: one bilinear interaction strength per edge, parallel to
///   `neighbor_ids` and sharing the same offset table.
/// - `counts`: cached per-site degree, equal to the offset difference.
///
/// Storage is directed: edge `(i, j)` does not imply `(j, i)`. Symmetric
/// models add both directions explicitly (see
/// [`GraphBuilder::add_symmetric_edge`](crate::GraphBuilder::add_symmetric_edge)).
///
/// The graph is immutable after construction. Rebuilding topology means
/// building a new graph with a fresh [`GraphBuilder`](crate::GraphBuilder)
/// and swapping it in.
///
/// # Examples
///
/// ```
/// use magnon_core::SiteId;
/// use magnon_lattice::GraphBuilder;
///
/// // A 3-site ring with unit couplings, both directions per bond.
/// let mut builder = GraphBuilder::new(3).unwrap();
/// for i in 0..3u64 {
///     builder
///         .add_symmetric_edge(SiteId(i), SiteId((i + 1) % 3), 1.0)
///         .unwrap();
/// }
/// let graph = builder.build();
///
/// assert_eq!(graph.site_count(), 3);
/// assert_eq!(graph.edge_count(), 6);
/// assert_eq!(graph.degree(SiteId(0)), 2);
///
/// let neighbors: Vec<_> = graph.neighbors_of(SiteId(0)).collect();
/// assert_eq!(neighbors, vec![(SiteId(1), 1.0), (SiteId(2), 1.0)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborGraph {
    pub(crate) offsets: Vec<u64>,
    pub(crate) neighbor_ids: Vec<SiteId>,
    pub(crate) couplings: Vec<f64>,
    pub(crate) counts: Vec<u64>,
}

impl NeighborGraph {
    /// Number of sites the graph was built for.
    pub fn site_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.neighbor_ids.len()
    }

    /// Cached neighbor count of a site.
    ///
    /// # Panics
    ///
    /// Panics if `site` is outside `0..site_count`.
    pub fn degree(&self, site: SiteId) -> u64 {
        self.counts[site.index()]
    }

    /// A lazy view of a site's neighbors with their coupling strengths.
    ///
    /// O(1) to obtain, O(degree) to traverse, restartable via `Clone`, and
    /// copy-free: the iterator walks the flattened arrays in place.
    ///
    /// # Panics
    ///
    /// Panics if `site` is outside `0..site_count`.
    pub fn neighbors_of(&self, site: SiteId) -> Neighbors<'_> {
        let start = self.offsets[site.index()] as usize;
        let end = self.offsets[site.index() + 1] as usize;
        Neighbors {
            ids: self.neighbor_ids[start..end].iter(),
            couplings: self.couplings[start..end].iter(),
        }
    }

    /// The offset table (`site_count + 1` entries).
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// The flattened neighbor-id table.
    pub fn neighbor_ids(&self) -> &[SiteId] {
        &self.neighbor_ids
    }

    /// The per-edge coupling table, parallel to
    /// [`neighbor_ids`](Self::neighbor_ids).
    pub fn couplings(&self) -> &[f64] {
        &self.couplings
    }

    /// Re-check the structural invariants of the compressed tables.
    ///
    /// The builder establishes these by construction; this exists so tests
    /// and debugging tools can verify a graph independently. Checks, for
    /// every site `i`:
    ///
    /// 1. offsets are non-decreasing, start at 0, and end at the table
    ///    lengths (which must agree between ids and couplings);
    /// 2. `counts[i]` equals the offset difference;
    /// 3. every stored neighbor id is a valid site.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, carrying the offending site id.
    pub fn validate(&self) -> Result<(), GraphConstructionError> {
        let site_count = self.counts.len() as u64;
        if self.offsets.first() != Some(&0)
            || self.offsets.len() != self.counts.len() + 1
            || self.offsets.last().copied() != Some(self.neighbor_ids.len() as u64)
            || self.neighbor_ids.len() != self.couplings.len()
        {
            return Err(GraphConstructionError::InconsistentOffsets { site: SiteId(0) });
        }
        for i in 0..self.counts.len() {
            let (start, end) = (self.offsets[i], self.offsets[i + 1]);
            if end < start {
                return Err(GraphConstructionError::InconsistentOffsets {
                    site: SiteId(i as u64),
                });
            }
            if self.counts[i] != end - start {
                return Err(GraphConstructionError::CountMismatch {
                    site: SiteId(i as u64),
                });
            }
        }
        for &id in &self.neighbor_ids {
            if id.0 >= site_count {
                return Err(GraphConstructionError::DanglingSite {
                    site: id,
                    site_count,
                });
            }
        }
        Ok(())
    }
}

/// Iterator over one site's `(neighbor, coupling)` pairs.
///
/// Returned by [`NeighborGraph::neighbors_of`]. Cloning restarts the
/// traversal from the site's first neighbor.
#[derive(Clone, Debug)]
pub struct Neighbors<'g> {
    ids: std::slice::Iter<'g, SiteId>,
    couplings: std::slice::Iter<'g, f64>,
}

impl Iterator for Neighbors<'_> {
    type Item = (SiteId, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next()?;
        let coupling = *self.couplings.next()?;
        Some((id, coupling))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use proptest::prelude::*;

    fn ring(site_count: u64, coupling: f64) -> NeighborGraph {
        let mut builder = GraphBuilder::new(site_count).unwrap();
        for i in 0..site_count {
            builder
                .add_symmetric_edge(SiteId(i), SiteId((i + 1) % site_count), coupling)
                .unwrap();
        }
        builder.build()
    }

    #[test]
    fn counts_match_table_lengths() {
        let graph = ring(5, 0.5);
        let total: u64 = (0..5).map(|i| graph.degree(SiteId(i))).sum();
        assert_eq!(total as usize, graph.neighbor_ids().len());
        assert_eq!(graph.neighbor_ids().len(), graph.couplings().len());
    }

    #[test]
    fn neighbors_preserve_insertion_order() {
        let mut builder = GraphBuilder::new(4).unwrap();
        builder.add_edge(SiteId(0), SiteId(3), 1.0).unwrap();
        builder.add_edge(SiteId(0), SiteId(1), 2.0).unwrap();
        builder.add_edge(SiteId(0), SiteId(2), 3.0).unwrap();
        let graph = builder.build();

        let order: Vec<_> = graph.neighbors_of(SiteId(0)).collect();
        assert_eq!(
            order,
            vec![(SiteId(3), 1.0), (SiteId(1), 2.0), (SiteId(2), 3.0)]
        );
    }

    #[test]
    fn neighbors_view_is_restartable() {
        let graph = ring(6, 1.0);
        let view = graph.neighbors_of(SiteId(2));
        let first: Vec<_> = view.clone().collect();
        let second: Vec<_> = view.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn isolated_sites_have_empty_slices() {
        let mut builder = GraphBuilder::new(3).unwrap();
        builder.add_edge(SiteId(0), SiteId(1), 1.0).unwrap();
        let graph = builder.build();

        assert_eq!(graph.degree(SiteId(2)), 0);
        assert_eq!(graph.neighbors_of(SiteId(2)).count(), 0);
    }

    #[test]
    fn construction_is_idempotent() {
        let first = ring(8, 1.5);
        let second = ring(8, 1.5);
        assert_eq!(first.offsets(), second.offsets());
        assert_eq!(first.neighbor_ids(), second.neighbor_ids());
        assert_eq!(first.couplings(), second.couplings());
    }

    #[test]
    fn validate_accepts_built_graphs() {
        assert_eq!(ring(7, -2.0).validate(), Ok(()));
    }

    #[test]
    fn validate_catches_corrupted_counts() {
        let mut graph = ring(4, 1.0);
        graph.counts[2] += 1;
        assert_eq!(
            graph.validate(),
            Err(GraphConstructionError::CountMismatch { site: SiteId(2) })
        );
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edges() -> impl Strategy<Value = (u64, Vec<(u64, u64, f64)>)> {
        (1u64..40).prop_flat_map(|site_count| {
            let edge = (0..site_count, 0..site_count, -2.0f64..2.0);
            (
                Just(site_count),
                proptest::collection::vec(edge, 0..120),
            )
        })
    }

    proptest! {
        #[test]
        fn built_graphs_satisfy_invariants((site_count, edges) in arb_edges()) {
            let mut builder = GraphBuilder::new(site_count).unwrap();
            for &(from, to, coupling) in &edges {
                builder.add_edge(SiteId(from), SiteId(to), coupling).unwrap();
            }
            let graph = builder.build();

            prop_assert_eq!(graph.validate(), Ok(()));
            prop_assert_eq!(graph.edge_count(), edges.len());

            let total: u64 = (0..site_count).map(|i| graph.degree(SiteId(i))).sum();
            prop_assert_eq!(total as usize, graph.neighbor_ids().len());
            prop_assert_eq!(graph.neighbor_ids().len(), graph.couplings().len());

            for i in 0..site_count {
                let view = graph.neighbors_of(SiteId(i));
                prop_assert_eq!(view.len() as u64, graph.degree(SiteId(i)));
                for (id, _) in view {
                    prop_assert!(id.0 < site_count);
                }
            }
        }

        #[test]
        fn rebuilding_identical_input_is_bitwise_equal((site_count, edges) in arb_edges()) {
            let build = || {
                let mut builder = GraphBuilder::new(site_count).unwrap();
                for &(from, to, coupling) in &edges {
                    builder.add_edge(SiteId(from), SiteId(to), coupling).unwrap();
                }
                builder.build()
            };
            prop_assert_eq!(build(), build());
        }
    }
}
