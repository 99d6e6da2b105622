//! Test fixtures for Magnon development.
//!
//! Small, deterministic lattices used across unit tests, integration
//! tests, and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{chain_graph, ring_graph, two_sublattice_registry, uniform_registry};
