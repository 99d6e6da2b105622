//! Setup-time error taxonomy.
//!
//! All three error types surface during construction or initialization.
//! The stepping path is designed to never fail on validated input; numeric
//! degeneracies there are defects caught by tests, not runtime conditions.

use crate::id::SiteId;
use crate::model::ModelKind;
use std::error::Error;
use std::fmt;

/// Site storage could not grow.
///
/// Returned by the registry when appending a site fails because the
/// underlying allocation cannot be extended. Fatal: the caller cannot
/// recover by retrying with the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Number of sites stored when growth failed.
    pub sites: u64,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site storage could not grow beyond {} sites", self.sites)
    }
}

impl Error for CapacityError {}

/// Errors detected while building or validating a neighbor graph.
///
/// Any construction error aborts the build of that graph entirely; the
/// caller must discard the builder and retry with corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphConstructionError {
    /// An edge references a site id outside `0..site_count`.
    DanglingSite {
        /// The offending site id.
        site: SiteId,
        /// Number of sites the graph was built for.
        site_count: u64,
    },
    /// The requested site count is not addressable on this platform.
    SiteCountOverflow {
        /// The requested site count.
        site_count: u64,
    },
    /// The offset table is not non-decreasing at a site boundary.
    InconsistentOffsets {
        /// First site whose offset pair is out of order.
        site: SiteId,
    },
    /// A cached neighbor count disagrees with the offset table.
    CountMismatch {
        /// First site whose cached count is wrong.
        site: SiteId,
    },
}

impl fmt::Display for GraphConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingSite { site, site_count } => {
                write!(
                    f,
                    "edge references site {site}, but only {site_count} sites exist"
                )
            }
            Self::SiteCountOverflow { site_count } => {
                write!(f, "site count {site_count} is not addressable")
            }
            Self::InconsistentOffsets { site } => {
                write!(f, "neighbor offsets are inconsistent at site {site}")
            }
            Self::CountMismatch { site } => {
                write!(f, "cached neighbor count is wrong at site {site}")
            }
        }
    }
}

impl Error for GraphConstructionError {}

/// State access against the wrong model kind.
///
/// A simulation instance runs exactly one state representation; asking the
/// store (or engine) for the other one is a programmer error, reported with
/// both kinds for diagnosis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelMismatchError {
    /// The kind the caller asked for.
    pub expected: ModelKind,
    /// The kind this instance actually runs.
    pub found: ModelKind,
}

impl fmt::Display for ModelMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state access expected the {} model, but this instance runs {}",
            self.expected, self.found
        )
    }
}

impl Error for ModelMismatchError {}
