//! The structure-of-arrays site registry.

use magnon_core::{CapacityError, SiteId, SublatticeId};

/// Append-only store of per-site components, keyed by dense site ids.
///
/// Components live in parallel growable arrays (an arena-with-index layout,
/// not object-per-site allocation), so id `n` indexes position `n` in every
/// array. Sites are never removed; excluding a site from a simulation is
/// modeled upstream by leaving it out of the neighbor graph.
///
/// # Examples
///
/// ```
/// use magnon_core::SublatticeId;
/// use magnon_lattice::SiteRegistry;
///
/// let mut registry = SiteRegistry::new();
/// registry.reserve(2);
/// let a = registry.add_site("Fe1", SublatticeId(0)).unwrap();
/// let b = registry.add_site("Fe2", SublatticeId(1)).unwrap();
/// assert_eq!(a.index(), 0);
/// assert_eq!(b.index(), 1);
/// assert_eq!(registry.name(a), Some("Fe1"));
/// assert_eq!(registry.sublattice(b), Some(SublatticeId(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SiteRegistry {
    names: Vec<String>,
    sublattices: Vec<SublatticeId>,
}

impl SiteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint that `additional` more sites are expected.
    ///
    /// Avoids repeated reallocation during bulk setup; no observable effect
    /// besides performance.
    pub fn reserve(&mut self, additional: usize) {
        self.names.reserve(additional);
        self.sublattices.reserve(additional);
    }

    /// Append one site and return its dense id.
    ///
    /// Ids are assigned in creation order: the first site is `SiteId(0)`,
    /// the next `SiteId(1)`, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the underlying component storage cannot
    /// grow. This is fatal, not recoverable: the registry is unchanged, but
    /// retrying with the same memory pressure will fail again.
    pub fn add_site(
        &mut self,
        name: impl Into<String>,
        sublattice: SublatticeId,
    ) -> Result<SiteId, CapacityError> {
        let capacity_error = CapacityError {
            sites: self.names.len() as u64,
        };
        self.names.try_reserve(1).map_err(|_| capacity_error)?;
        self.sublattices.try_reserve(1).map_err(|_| capacity_error)?;

        let id = SiteId(self.names.len() as u64);
        self.names.push(name.into());
        self.sublattices.push(sublattice);
        Ok(id)
    }

    /// Number of sites created so far.
    pub fn site_count(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry holds no sites.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The name component of a site, or `None` for an unknown id.
    pub fn name(&self, site: SiteId) -> Option<&str> {
        self.names.get(site.index()).map(String::as_str)
    }

    /// The sublattice tag of a site, or `None` for an unknown id.
    pub fn sublattice(&self, site: SiteId) -> Option<SublatticeId> {
        self.sublattices.get(site.index()).copied()
    }

    /// The full sublattice component array, indexed by site id.
    pub fn sublattices(&self) -> &[SublatticeId] {
        &self.sublattices
    }

    /// Iterate over all sites in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SiteId, &str, SublatticeId)> + '_ {
        self.names
            .iter()
            .zip(&self.sublattices)
            .enumerate()
            .map(|(i, (name, &sublattice))| (SiteId(i as u64), name.as_str(), sublattice))
    }
}
