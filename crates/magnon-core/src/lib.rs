//! Core types for the Magnon spin-lattice simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary used throughout the workspace: strongly-typed
//! identifiers, the 3-component spin vector, the model-kind selector, and
//! the setup-time error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod model;
pub mod vector;

pub use error::{CapacityError, GraphConstructionError, ModelMismatchError};
pub use id::{SiteId, StepId, SublatticeId};
pub use model::ModelKind;
pub use vector::Vector3;
