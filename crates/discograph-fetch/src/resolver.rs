//! Cross-platform link resolution with deterministic fallback.
//!
//! Every resolution starts from a complete fallback set: one search URL
//! per platform, built from the URL-encoded "{artist} {release}" query
//! (Tidal gets the artist page instead; its search is behind a login
//! wall). When a source-platform URL is available the resolution service
//! is asked for real links, which are overlaid on the fallback set. Any
//! service failure degrades to the fallback set, so resolution never
//! returns an error and every platform always has an entry.

use discograph_core::{LinkSet, Platform};

use crate::config::Config;
use crate::error::FetchResult;
use crate::songlink::SonglinkClient;

/// Resolves listening links for a release on every platform.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    songlink: SonglinkClient,
    artist_name: String,
    tidal_artist_url: String,
}

impl LinkResolver {
    /// Create a new resolver from the application config.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: &Config) -> FetchResult<Self> {
        Ok(Self {
            songlink: SonglinkClient::new(&config.api_base_url)?,
            artist_name: config.artist_name.clone(),
            tidal_artist_url: config.tidal_artist_url.clone(),
        })
    }

    /// Resolve links for a release.
    ///
    /// With a source URL the resolution service is consulted and its
    /// links win per platform; without one, or on any service failure,
    /// the deterministic fallback set is returned unchanged. This call
    /// never fails.
    pub async fn resolve(&self, release_name: &str, source_url: Option<&str>) -> LinkSet {
        let fallback = self.fallback_links(release_name);

        let Some(url) = source_url else {
            log::debug!("no source URL for {release_name}, using search fallbacks");
            return fallback;
        };

        match self.songlink.resolve(url).await {
            Ok(response) => fallback.overlay(response.to_link_set()),
            Err(err) => {
                log::warn!("link resolution failed for {release_name}: {err}");
                fallback
            }
        }
    }

    /// The deterministic search-URL set for a release. Contains an entry
    /// for every platform.
    #[must_use]
    pub fn fallback_links(&self, release_name: &str) -> LinkSet {
        let query = urlencoding::encode(&format!("{} {}", self.artist_name, release_name))
            .into_owned();

        Platform::ALL
            .into_iter()
            .map(|platform| (platform, self.search_url(platform, &query)))
            .collect()
    }

    fn search_url(&self, platform: Platform, query: &str) -> String {
        match platform {
            Platform::Spotify => format!("https://open.spotify.com/search/{query}"),
            Platform::Apple => format!("https://music.apple.com/search?term={query}"),
            Platform::Beatport => format!("https://www.beatport.com/search?q={query}"),
            Platform::Bandcamp => format!("https://bandcamp.com/search?q={query}"),
            Platform::SoundCloud => format!("https://soundcloud.com/search?q={query}"),
            Platform::Youtube => format!("https://www.youtube.com/results?search_query={query}"),
            Platform::Deezer => format!("https://www.deezer.com/en/search/{query}"),
            Platform::Tidal => self.tidal_artist_url.clone(),
        }
    }
}
