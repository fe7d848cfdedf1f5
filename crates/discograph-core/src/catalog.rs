//! In-memory catalog store and filtering.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{Origin, Release, ReleaseType};

/// The active catalog filter.
///
/// Filters only subset the already-sorted catalog; they never reorder it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogFilter {
    #[default]
    All,
    /// Primary-source releases plus anything typed as an album.
    Albums,
    /// Exact release-type match.
    Kind(ReleaseType),
}

impl CatalogFilter {
    /// Parse a UI filter key: `all`, `album`, or a release-type key.
    ///
    /// # Errors
    /// Returns [`Error::UnknownFilter`] for unrecognized keys.
    pub fn from_key(key: &str) -> Result<Self, Error> {
        match key {
            "all" => Ok(CatalogFilter::All),
            "album" => Ok(CatalogFilter::Albums),
            other => ReleaseType::from_key(other)
                .map(CatalogFilter::Kind)
                .ok_or_else(|| Error::UnknownFilter(other.to_string())),
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CatalogFilter::All => "all",
            CatalogFilter::Albums => "album",
            CatalogFilter::Kind(kind) => kind.key(),
        }
    }

    fn matches(self, release: &Release) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Albums => {
                release.origin == Origin::Primary || release.release_type == ReleaseType::Album
            }
            CatalogFilter::Kind(kind) => release.release_type == kind,
        }
    }
}

/// The ordered list of normalized releases plus the active filter.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    releases: Vec<Release>,
    filter: CatalogFilter,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly fetched, already-sorted list.
    pub fn replace(&mut self, releases: Vec<Release>) {
        self.releases = releases;
    }

    pub fn set_filter(&mut self, filter: CatalogFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn filter(&self) -> CatalogFilter {
        self.filter
    }

    /// The releases passing the active filter, in stored order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Release> {
        self.releases
            .iter()
            .filter(|release| self.filter.matches(release))
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Release> {
        self.releases.iter().find(|release| release.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
