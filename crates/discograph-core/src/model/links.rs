use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Platform;

/// Marker URL meaning "no link available"; treated the same as a missing
/// entry.
pub const PLACEHOLDER_URL: &str = "#";

/// An ordered mapping from platform to listening URL.
///
/// Keys are always drawn from the fixed [`Platform`] set. Entries holding
/// the [`PLACEHOLDER_URL`] marker (or an empty string) exist in the map but
/// are never surfaced by [`url`](Self::url) or [`available`](Self::available).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSet {
    entries: BTreeMap<Platform, String>,
}

impl LinkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, platform: Platform, url: impl Into<String>) {
        self.entries.insert(platform, url.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, platform: Platform, url: impl Into<String>) -> Self {
        self.insert(platform, url);
        self
    }

    /// The raw entry for a platform, placeholder included.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.entries.get(&platform).map(String::as_str)
    }

    /// The usable URL for a platform, or `None` when absent or placeholder.
    #[must_use]
    pub fn url(&self, platform: Platform) -> Option<&str> {
        self.get(platform)
            .filter(|url| !url.is_empty() && *url != PLACEHOLDER_URL)
    }

    /// Platforms with a usable link, in [`Platform::ALL`] order.
    pub fn available(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::ALL
            .into_iter()
            .filter_map(|platform| self.url(platform).map(|url| (platform, url)))
    }

    /// Overlay `resolved` on top of `self`: resolved values win per key,
    /// keys missing from `resolved` keep their current value.
    #[must_use]
    pub fn overlay(mut self, resolved: LinkSet) -> Self {
        for (platform, url) in resolved.entries {
            self.entries.insert(platform, url);
        }
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.entries.iter().map(|(p, url)| (*p, url.as_str()))
    }
}

impl FromIterator<(Platform, String)> for LinkSet {
    fn from_iter<I: IntoIterator<Item = (Platform, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
