//! Session-lifetime cache of resolved link sets.

use std::collections::HashMap;

use discograph_core::LinkSet;

/// Caches one resolved [`LinkSet`] per release for the life of the
/// process.
///
/// Keys combine the release id with its name so a changed upstream id
/// does not serve stale links for a renamed release. There is no expiry
/// and no size bound; the catalog is small and the cache dies with the
/// session.
#[derive(Debug, Clone, Default)]
pub struct LinkCache {
    entries: HashMap<(String, String), LinkSet>,
}

impl LinkCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, release_id: &str, release_name: &str) -> Option<&LinkSet> {
        self.entries
            .get(&(release_id.to_string(), release_name.to_string()))
    }

    pub fn put(&mut self, release_id: &str, release_name: &str, links: LinkSet) {
        self.entries
            .insert((release_id.to_string(), release_name.to_string()), links);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
