//! Physical degrees of freedom for Magnon simulations.
//!
//! [`StateStore`] holds the per-site state arrays — discrete ±1 spins or
//! continuous 3-vector orientations — with exactly one representation
//! active per simulation instance. [`SeedPolicy`] covers the standard
//! initial conditions; exact initial states come in through the
//! `from_binary` / `from_vector3` constructors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod seed;
pub mod store;

pub use seed::{random_spin, random_unit_vector, SeedPolicy};
pub use store::{StateStore, SPIN_DOWN, SPIN_UP};
