//! Catalog fetch orchestration: both sources, dedup, links, merge, sort.
//!
//! The two source fetches are issued concurrently and fail independently;
//! whichever arrives contributes to the merged catalog (a failed primary
//! fetch keeps the secondary results, and vice versa). The
//! normalize/dedup/merge steps are pure functions so the whole workflow
//! is testable without a network.

use discograph_core::{LinkSet, Origin, Platform, Release, ReleaseType};

use crate::cache::LinkCache;
use crate::catalog_api::{CatalogAlbum, CatalogClient};
use crate::config::Config;
use crate::error::FetchResult;
use crate::resolver::LinkResolver;
use crate::usergen::{UserGenClient, UserGenTrack};

/// Fetches, normalizes, and merges the full release catalog.
#[derive(Debug)]
pub struct CatalogFetcher {
    catalog: CatalogClient,
    usergen: UserGenClient,
    resolver: LinkResolver,
    cache: LinkCache,
}

impl CatalogFetcher {
    /// Create a fetcher from the application config.
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be created.
    pub fn new(config: &Config) -> FetchResult<Self> {
        Ok(Self {
            catalog: CatalogClient::new(&config.api_base_url)?,
            usergen: UserGenClient::new(&config.api_base_url)?,
            resolver: LinkResolver::new(config)?,
            cache: LinkCache::new(),
        })
    }

    /// Fetch the merged catalog, newest release first.
    ///
    /// Never fails: each source independently degrades to an empty list,
    /// and link resolution degrades per release to search fallbacks. The
    /// worst case is an empty catalog.
    pub async fn fetch_catalog(&mut self) -> Vec<Release> {
        let (primary, secondary) = tokio::join!(
            self.catalog.fetch_releases(),
            self.usergen.fetch_tracks(),
        );

        let primary = primary.unwrap_or_else(|err| {
            log::warn!("primary catalog fetch failed: {err}");
            Vec::new()
        });
        let secondary = secondary.unwrap_or_else(|err| {
            log::warn!("secondary source fetch failed: {err}");
            Vec::new()
        });

        let primary_names: Vec<&str> = primary.iter().map(|album| album.name.as_str()).collect();
        let secondary_releases = secondary_releases(&secondary, &primary_names);

        let mut primary_releases = Vec::with_capacity(primary.len());
        for album in &primary {
            let Some(release) = normalize_album(album) else {
                log::warn!(
                    "skipping release {} with unparseable date {:?}",
                    album.name,
                    album.release_date
                );
                continue;
            };
            let links = self.links_for(album).await;
            primary_releases.push(release.with_links(links));
        }

        let merged = merge_catalog(primary_releases, secondary_releases);
        log::info!("merged catalog holds {} releases", merged.len());
        merged
    }

    /// Links for a primary release, cached for the session so the same
    /// release is resolved at most once.
    async fn links_for(&mut self, album: &CatalogAlbum) -> LinkSet {
        if let Some(cached) = self.cache.get(&album.id, &album.name) {
            log::debug!("link cache hit for {}", album.name);
            return cached.clone();
        }

        let links = self.resolver.resolve(&album.name, album.source_url()).await;
        self.cache.put(&album.id, &album.name, links.clone());
        links
    }
}

/// Normalize a primary-source album, without links. Returns `None` when
/// the release date cannot be parsed.
#[must_use]
pub fn normalize_album(album: &CatalogAlbum) -> Option<Release> {
    let date = album.parsed_release_date()?;
    let release_type =
        ReleaseType::from_key(&album.album_type).unwrap_or(ReleaseType::Album);

    let mut release = Release::new(&album.id, &album.name, release_type, date, Origin::Primary)
        .with_track_count(album.total_tracks.max(1));

    if let Some(image) = album.images.first() {
        release = release.with_artwork(&image.url);
    }
    if let Some(url) = album.source_url() {
        release = release.with_source_url(url);
    }

    Some(release)
}

/// Normalize the secondary feed: drop non-public tracks, drop titles that
/// duplicate a primary release name (case-insensitive; the primary source
/// wins), classify the rest, and attach the track's own permalink as its
/// only link.
#[must_use]
pub fn secondary_releases(tracks: &[UserGenTrack], primary_names: &[&str]) -> Vec<Release> {
    tracks
        .iter()
        .filter(|track| track.is_public())
        .filter(|track| {
            let duplicate = primary_names
                .iter()
                .any(|name| name.to_lowercase() == track.title.to_lowercase());
            if duplicate {
                log::debug!("dropping duplicate secondary track {}", track.title);
            }
            !duplicate
        })
        .filter_map(|track| {
            let date = track.created_date()?;
            let mut release = Release::new(
                format!("sc_{}", track.id),
                &track.title,
                track.classify(),
                date,
                Origin::Secondary,
            )
            .with_source_url(&track.permalink_url)
            .with_links(LinkSet::new().with(Platform::SoundCloud, &track.permalink_url));

            if let Some(artwork) = track.high_quality_artwork() {
                release = release.with_artwork(artwork);
            }
            Some(release)
        })
        .collect()
}

/// Concatenate both normalized lists and stable-sort newest first. Equal
/// dates keep fetch order: the primary block precedes the secondary one.
#[must_use]
pub fn merge_catalog(primary: Vec<Release>, secondary: Vec<Release>) -> Vec<Release> {
    let mut merged = primary;
    merged.extend(secondary);
    merged.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    merged
}
