use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::LinkSet;

/// Artwork shown when a release carries no image of its own.
pub const PLACEHOLDER_ARTWORK: &str =
    "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&h=400&fit=crop";

/// The kind of release, as classified at fetch time.
///
/// Albums and singles come from the primary catalog; mixes and remixes are
/// derived from secondary-source track durations (over 15 minutes means a
/// mix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Album,
    Single,
    Mix,
    Remix,
}

impl ReleaseType {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ReleaseType::Album => "album",
            ReleaseType::Single => "single",
            ReleaseType::Mix => "mix",
            ReleaseType::Remix => "remix",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "album" => Some(ReleaseType::Album),
            "single" => Some(ReleaseType::Single),
            "mix" => Some(ReleaseType::Mix),
            "remix" => Some(ReleaseType::Remix),
            _ => None,
        }
    }

    /// Display label; a single with more than one track reads as an EP.
    #[must_use]
    pub fn display_label(self, track_count: u32) -> &'static str {
        match self {
            ReleaseType::Album => "Album",
            ReleaseType::Single => {
                if track_count > 1 {
                    "EP"
                } else {
                    "Single"
                }
            }
            ReleaseType::Mix => "Mix",
            ReleaseType::Remix => "Remix",
        }
    }
}

/// Which source produced a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The main distribution platform with authoritative metadata.
    Primary,
    /// The supplementary user-generated-content platform.
    Secondary,
}

/// A normalized catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Unique within a session. Secondary-source ids carry a prefix so
    /// they cannot collide with primary ids.
    pub id: String,
    pub name: String,
    pub release_type: ReleaseType,
    /// Sort key; the catalog orders newest first.
    pub release_date: NaiveDate,
    pub track_count: u32,
    pub artwork_url: Option<String>,
    /// Canonical URL on the originating platform.
    pub source_platform_url: String,
    pub links: LinkSet,
    pub origin: Origin,
}

impl Release {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        release_type: ReleaseType,
        release_date: NaiveDate,
        origin: Origin,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            release_type,
            release_date,
            track_count: 1,
            artwork_url: None,
            source_platform_url: String::new(),
            links: LinkSet::new(),
            origin,
        }
    }

    #[must_use]
    pub fn with_track_count(mut self, count: u32) -> Self {
        self.track_count = count;
        self
    }

    #[must_use]
    pub fn with_artwork(mut self, url: impl Into<String>) -> Self {
        self.artwork_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_platform_url = url.into();
        self
    }

    #[must_use]
    pub fn with_links(mut self, links: LinkSet) -> Self {
        self.links = links;
        self
    }

    /// Artwork URL for rendering; never empty.
    #[must_use]
    pub fn artwork(&self) -> &str {
        match self.artwork_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_ARTWORK,
        }
    }

    /// Display label, e.g. "EP" for a multi-track single.
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        self.release_type.display_label(self.track_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_with_multiple_tracks_displays_as_ep() {
        let single = Release::new(
            "r1",
            "Night Drive",
            ReleaseType::Single,
            date(2024, 3, 1),
            Origin::Primary,
        );
        assert_eq!(single.type_label(), "Single");
        assert_eq!(single.with_track_count(3).type_label(), "EP");
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(ReleaseType::Album.display_label(12), "Album");
        assert_eq!(ReleaseType::Mix.display_label(1), "Mix");
        assert_eq!(ReleaseType::Remix.display_label(1), "Remix");
    }

    #[test]
    fn test_artwork_falls_back_to_placeholder() {
        let mut release = Release::new(
            "r1",
            "Night Drive",
            ReleaseType::Album,
            date(2024, 3, 1),
            Origin::Primary,
        );
        assert_eq!(release.artwork(), PLACEHOLDER_ARTWORK);

        release.artwork_url = Some(String::new());
        assert_eq!(release.artwork(), PLACEHOLDER_ARTWORK);

        release.artwork_url = Some("https://img.example/a.jpg".to_string());
        assert_eq!(release.artwork(), "https://img.example/a.jpg");
    }

    #[test]
    fn test_builder() {
        let release = Release::new(
            "sc_9",
            "Side B",
            ReleaseType::Mix,
            date(2024, 11, 2),
            Origin::Secondary,
        )
        .with_source_url("https://soundcloud.com/nts/side-b")
        .with_links(LinkSet::new().with(Platform::SoundCloud, "https://soundcloud.com/nts/side-b"));

        assert_eq!(release.track_count, 1);
        assert_eq!(
            release.links.url(Platform::SoundCloud),
            Some("https://soundcloud.com/nts/side-b")
        );
    }

    #[test]
    fn test_release_type_key_round_trip() {
        for kind in [
            ReleaseType::Album,
            ReleaseType::Single,
            ReleaseType::Mix,
            ReleaseType::Remix,
        ] {
            assert_eq!(ReleaseType::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ReleaseType::from_key("compilation"), None);
    }
}
