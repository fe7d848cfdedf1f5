use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A streaming platform a release can be listened on.
///
/// This is a closed set: every key in a release's link mapping is drawn
/// from it, and the link resolver produces an entry (resolved or search
/// fallback) for each member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Spotify,
    Apple,
    Beatport,
    Bandcamp,
    SoundCloud,
    Youtube,
    Deezer,
    Tidal,
}

impl Platform {
    /// All platforms, in canonical display order.
    pub const ALL: [Platform; 8] = [
        Platform::Spotify,
        Platform::Apple,
        Platform::Beatport,
        Platform::Bandcamp,
        Platform::SoundCloud,
        Platform::Youtube,
        Platform::Deezer,
        Platform::Tidal,
    ];

    /// The wire key used in link mappings and filter arguments.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::Apple => "apple",
            Platform::Beatport => "beatport",
            Platform::Bandcamp => "bandcamp",
            Platform::SoundCloud => "soundcloud",
            Platform::Youtube => "youtube",
            Platform::Deezer => "deezer",
            Platform::Tidal => "tidal",
        }
    }

    /// Human-readable name for rendering.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Apple => "Apple Music",
            Platform::Beatport => "Beatport",
            Platform::Bandcamp => "Bandcamp",
            Platform::SoundCloud => "SoundCloud",
            Platform::Youtube => "YouTube",
            Platform::Deezer => "Deezer",
            Platform::Tidal => "Tidal",
        }
    }

    /// Parse a wire key back into a platform.
    ///
    /// # Errors
    /// Returns [`Error::UnknownPlatform`] for keys outside the set.
    pub fn from_key(key: &str) -> Result<Self, Error> {
        Platform::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| Error::UnknownPlatform(key.to_string()))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_key(platform.key()).unwrap(), platform);
        }
    }

    #[test]
    fn test_from_key_unknown() {
        let err = Platform::from_key("myspace").unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform(_)));
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let mut keys: Vec<_> = Platform::ALL.iter().map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Platform::ALL.len());
    }

    #[test]
    fn test_serde_uses_wire_key() {
        let json = serde_json::to_string(&Platform::SoundCloud).unwrap();
        assert_eq!(json, "\"soundcloud\"");
        let back: Platform = serde_json::from_str("\"apple\"").unwrap();
        assert_eq!(back, Platform::Apple);
    }
}
