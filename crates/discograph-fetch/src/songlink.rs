//! Link-resolution service client.
//!
//! Given a release's URL on one platform, the service answers with the
//! equivalent URLs on the others, keyed by provider-specific names
//! ("appleMusic", "youtubeMusic", ...). [`LinkResponse::to_link_set`] maps
//! those provider keys onto the internal [`Platform`] enumeration; unknown
//! providers are ignored.

use std::collections::HashMap;
use std::time::Duration;

use discograph_core::{LinkSet, Platform};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

const SOURCE_NAME: &str = "links";

/// Provider keys that map one-to-one onto a platform. YouTube is handled
/// separately because the service distinguishes youtubeMusic from youtube.
const DIRECT_PROVIDERS: [(&str, Platform); 7] = [
    ("spotify", Platform::Spotify),
    ("appleMusic", Platform::Apple),
    ("beatport", Platform::Beatport),
    ("bandcamp", Platform::Bandcamp),
    ("soundcloud", Platform::SoundCloud),
    ("deezer", Platform::Deezer),
    ("tidal", Platform::Tidal),
];

/// Response from the link-resolution endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    #[serde(default)]
    pub links_by_platform: HashMap<String, PlatformLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformLink {
    pub url: String,
}

impl LinkResponse {
    /// Map the provider-keyed response onto the platform enumeration.
    ///
    /// The music-specific YouTube URL is preferred over the generic one
    /// when both are present.
    #[must_use]
    pub fn to_link_set(&self) -> LinkSet {
        let mut links = LinkSet::new();

        for (provider, platform) in DIRECT_PROVIDERS {
            if let Some(link) = self.links_by_platform.get(provider) {
                links.insert(platform, link.url.clone());
            }
        }

        let youtube = self
            .links_by_platform
            .get("youtubeMusic")
            .or_else(|| self.links_by_platform.get("youtube"));
        if let Some(link) = youtube {
            links.insert(Platform::Youtube, link.url.clone());
        }

        links
    }
}

/// Client for the link-resolution endpoint.
#[derive(Debug, Clone)]
pub struct SonglinkClient {
    http: Client,
    base_url: String,
}

impl SonglinkClient {
    /// Create a new link-resolution client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("discograph/0.1.0")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Resolve per-platform links for the release behind `source_url`.
    ///
    /// # Errors
    /// Returns an error on network failure, non-success status, or a
    /// malformed payload. Callers degrade to the fallback link set.
    pub async fn resolve(&self, source_url: &str) -> FetchResult<LinkResponse> {
        let url = format!("{}/links", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("url", source_url)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FetchError::Http {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        response
            .json::<LinkResponse>()
            .await
            .map_err(|e| FetchError::Parse {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_maps_provider_keys() {
        let json = r#"{
            "linksByPlatform": {
                "spotify": {"url": "https://open.spotify.com/album/x"},
                "appleMusic": {"url": "https://music.apple.com/album/x"},
                "deezer": {"url": "https://www.deezer.com/album/x"}
            }
        }"#;
        let response: LinkResponse = serde_json::from_str(json).unwrap();
        let links = response.to_link_set();

        assert_eq!(
            links.url(Platform::Spotify),
            Some("https://open.spotify.com/album/x")
        );
        assert_eq!(
            links.url(Platform::Apple),
            Some("https://music.apple.com/album/x")
        );
        assert!(links.url(Platform::Youtube).is_none());
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_youtube_music_preferred_over_generic() {
        let json = r#"{
            "linksByPlatform": {
                "youtube": {"url": "https://www.youtube.com/watch?v=generic"},
                "youtubeMusic": {"url": "https://music.youtube.com/watch?v=music"}
            }
        }"#;
        let response: LinkResponse = serde_json::from_str(json).unwrap();
        let links = response.to_link_set();

        assert_eq!(
            links.url(Platform::Youtube),
            Some("https://music.youtube.com/watch?v=music")
        );
    }

    #[test]
    fn test_generic_youtube_used_when_alone() {
        let json = r#"{
            "linksByPlatform": {
                "youtube": {"url": "https://www.youtube.com/watch?v=generic"}
            }
        }"#;
        let response: LinkResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.to_link_set().url(Platform::Youtube),
            Some("https://www.youtube.com/watch?v=generic")
        );
    }

    #[test]
    fn test_unknown_providers_ignored() {
        let json = r#"{
            "linksByPlatform": {
                "amazonMusic": {"url": "https://music.amazon.com/albums/x"},
                "napster": {"url": "https://napster.example/x"},
                "bandcamp": {"url": "https://nts.bandcamp.com/album/x"}
            }
        }"#;
        let response: LinkResponse = serde_json::from_str(json).unwrap();
        let links = response.to_link_set();

        assert_eq!(links.len(), 1);
        assert_eq!(
            links.url(Platform::Bandcamp),
            Some("https://nts.bandcamp.com/album/x")
        );
    }

    #[test]
    fn test_empty_response() {
        let response: LinkResponse = serde_json::from_str("{}").unwrap();
        assert!(response.to_link_set().is_empty());
    }

    #[test]
    fn test_client_creation() {
        assert!(SonglinkClient::new("https://example.test").is_ok());
    }
}
