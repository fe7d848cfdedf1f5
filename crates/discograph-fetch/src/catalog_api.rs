//! Primary catalog client.
//!
//! Fetches the authoritative release list from the proxy's `/catalog`
//! endpoint. When the first request comes back 401 or 500 the upstream
//! token has usually expired; the client posts to `/catalog/refresh` once
//! and retries the original request exactly once.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

const SOURCE_NAME: &str = "catalog";

/// A release as returned by the primary catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAlbum {
    pub id: String,
    pub name: String,
    /// "album" or "single" as classified upstream.
    pub album_type: String,
    /// Date string whose granularity is given by `release_date_precision`.
    pub release_date: String,
    #[serde(default = "default_precision")]
    pub release_date_precision: String,
    pub total_tracks: u32,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
    /// Canonical URLs on the originating platform, keyed by platform.
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogImage {
    pub url: String,
}

fn default_precision() -> String {
    "day".to_string()
}

impl CatalogAlbum {
    /// Parse the release date, padding month/day with 1 for partial
    /// precisions ("year", "month").
    #[must_use]
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        let mut parts = self.release_date.split('-');
        let year: i32 = parts.next()?.parse().ok()?;

        let month: u32 = if self.release_date_precision == "year" {
            1
        } else {
            parts.next()?.parse().ok()?
        };
        let day: u32 = if self.release_date_precision == "day" {
            parts.next()?.parse().ok()?
        } else {
            1
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The release's own URL on the primary platform, if the catalog
    /// carries one.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.external_urls.get("spotify").map(String::as_str)
    }
}

/// Client for the primary catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
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

    /// Fetch all releases from the primary catalog.
    ///
    /// A 401 or 500 on the first attempt triggers one token refresh and
    /// one retry; any failure after that propagates.
    ///
    /// # Errors
    /// Returns an error on network failure, non-success status, or a
    /// malformed payload.
    pub async fn fetch_releases(&self) -> FetchResult<Vec<CatalogAlbum>> {
        let url = format!("{}/catalog", self.base_url);

        let mut response = self.http.get(&url).send().await?;

        if matches!(response.status().as_u16(), 401 | 500) {
            log::info!(
                "catalog returned {}, refreshing upstream token",
                response.status()
            );
            self.refresh().await?;
            response = self.http.get(&url).send().await?;
        }

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Http {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        response
            .json::<Vec<CatalogAlbum>>()
            .await
            .map_err(|e| FetchError::Parse {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })
    }

    async fn refresh(&self) -> FetchResult<()> {
        let url = format!("{}/catalog/refresh", self.base_url);

        self.http
            .post(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FetchError::Http {
                source_name: SOURCE_NAME,
                message: format!("token refresh failed: {e}"),
            })?;

        Ok(())
    }
}
