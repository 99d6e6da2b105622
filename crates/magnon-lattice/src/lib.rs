//! Site registry and neighbor topology for Magnon simulations.
//!
//! This crate owns the two structures that are built once during setup and
//! stay immutable for the rest of a run:
//!
//! - [`SiteRegistry`]: a structure-of-arrays store of per-site components
//!   (name, sublattice tag) keyed by dense [`SiteId`](magnon_core::SiteId)
//!   indices. Append-only; sites are never removed.
//! - [`NeighborGraph`]: compressed (CSR-style) adjacency with one coupling
//!   value per directed edge, produced by the validating [`GraphBuilder`].
//!
//! Rebuilding topology means constructing a new [`NeighborGraph`] and
//! swapping it in; there is no API to mutate edges in place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod graph;
pub mod registry;

pub use builder::{from_edges, GraphBuilder};
pub use graph::{NeighborGraph, Neighbors};
pub use registry::SiteRegistry;
