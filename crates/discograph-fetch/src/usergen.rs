//! Secondary-source client for the user-generated-content feed.
//!
//! Tracks from this feed supplement the primary catalog with mixes and
//! remixes. Classification is a duration heuristic (anything over 15
//! minutes is a mix), and artwork is upgraded from the feed's small
//! `-large.jpg` rendition to the 500px one.

use std::time::Duration;

use chrono::NaiveDate;
use discograph_core::ReleaseType;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

const SOURCE_NAME: &str = "usergen";

/// Tracks at least this long are mixes rather than remixes.
const MIX_THRESHOLD_MS: u64 = 15 * 60 * 1000;

/// A track from the user-generated-content feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGenTrack {
    pub id: u64,
    pub title: String,
    /// Duration in milliseconds.
    pub duration: u64,
    /// ISO timestamp of the upload.
    pub created_at: String,
    pub permalink_url: String,
    #[serde(default)]
    pub sharing: Option<String>,
    #[serde(default)]
    pub artwork_url: Option<String>,
    #[serde(default)]
    pub user: Option<UserGenUploader>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGenUploader {
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserGenTrack {
    /// Whether the track may be shown. Tracks explicitly marked with a
    /// non-public sharing state are dropped; unmarked tracks are kept.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.sharing.as_deref().map_or(true, |s| s == "public")
    }

    /// Mix/remix classification from the duration heuristic.
    #[must_use]
    pub fn classify(&self) -> ReleaseType {
        if self.duration > MIX_THRESHOLD_MS {
            ReleaseType::Mix
        } else {
            ReleaseType::Remix
        }
    }

    /// The calendar date of the upload (the portion before `T`).
    #[must_use]
    pub fn created_date(&self) -> Option<NaiveDate> {
        let date_part = self.created_at.split('T').next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Best available artwork, upgraded to the 500px rendition. Falls
    /// back from track artwork to the uploader's avatar.
    #[must_use]
    pub fn high_quality_artwork(&self) -> Option<String> {
        let base = self.artwork_url.as_deref().or_else(|| {
            self.user
                .as_ref()
                .and_then(|user| user.avatar_url.as_deref())
        })?;
        Some(base.replace("-large.jpg", "-t500x500.jpg"))
    }
}

/// Client for the user-generated-content endpoint.
#[derive(Debug, Clone)]
pub struct UserGenClient {
    http: Client,
    base_url: String,
}

impl UserGenClient {
    /// Create a new user-generated-content client.
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

    /// Fetch all tracks from the feed.
    ///
    /// # Errors
    /// Returns an error on network failure, non-success status, or a
    /// malformed payload.
    pub async fn fetch_tracks(&self) -> FetchResult<Vec<UserGenTrack>> {
        let url = format!("{}/usergen", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FetchError::Http {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        response
            .json::<Vec<UserGenTrack>>()
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

    fn track(duration: u64) -> UserGenTrack {
        UserGenTrack {
            id: 42,
            title: "Side B".to_string(),
            duration,
            created_at: "2024-11-02T10:30:00Z".to_string(),
            permalink_url: "https://soundcloud.com/nts/side-b".to_string(),
            sharing: Some("public".to_string()),
            artwork_url: None,
            user: None,
        }
    }

    #[test]
    fn test_classification_threshold() {
        // 22 minutes: a mix.
        assert_eq!(track(22 * 60 * 1000).classify(), ReleaseType::Mix);
        // 6 minutes: a remix.
        assert_eq!(track(6 * 60 * 1000).classify(), ReleaseType::Remix);
        // Exactly 15 minutes stays a remix.
        assert_eq!(track(MIX_THRESHOLD_MS).classify(), ReleaseType::Remix);
    }

    #[test]
    fn test_sharing_rules() {
        let mut t = track(1000);
        assert!(t.is_public());

        t.sharing = None;
        assert!(t.is_public(), "unmarked tracks are kept");

        t.sharing = Some("private".to_string());
        assert!(!t.is_public());
    }

    #[test]
    fn test_created_date() {
        assert_eq!(
            track(1000).created_date(),
            NaiveDate::from_ymd_opt(2024, 11, 2)
        );

        let mut bad = track(1000);
        bad.created_at = "last tuesday".to_string();
        assert!(bad.created_date().is_none());
    }

    #[test]
    fn test_artwork_upgrade_and_avatar_fallback() {
        let mut t = track(1000);
        t.artwork_url = Some("https://i1.sndcdn.com/artworks-xyz-large.jpg".to_string());
        assert_eq!(
            t.high_quality_artwork().as_deref(),
            Some("https://i1.sndcdn.com/artworks-xyz-t500x500.jpg")
        );

        t.artwork_url = None;
        t.user = Some(UserGenUploader {
            avatar_url: Some("https://i1.sndcdn.com/avatars-abc-large.jpg".to_string()),
        });
        assert_eq!(
            t.high_quality_artwork().as_deref(),
            Some("https://i1.sndcdn.com/avatars-abc-t500x500.jpg")
        );

        t.user = None;
        assert!(t.high_quality_artwork().is_none());
    }

    #[test]
    fn test_track_deserialize() {
        let json = r#"{
            "id": 9001,
            "title": "Side B",
            "duration": 1320000,
            "createdAt": "2024-11-02T10:30:00Z",
            "permalinkUrl": "https://soundcloud.com/nts/side-b",
            "sharing": "public",
            "artworkUrl": "https://i1.sndcdn.com/artworks-xyz-large.jpg",
            "user": {"avatarUrl": "https://i1.sndcdn.com/avatars-abc-large.jpg"}
        }"#;
        let track: UserGenTrack = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, 9001);
        assert_eq!(track.duration, 1_320_000);
        assert_eq!(track.classify(), ReleaseType::Mix);
        assert!(track.is_public());
    }

    #[test]
    fn test_track_deserialize_minimal() {
        let json = r#"{
            "id": 1,
            "title": "Untitled",
            "duration": 180000,
            "createdAt": "2023-05-01T00:00:00Z",
            "permalinkUrl": "https://soundcloud.com/nts/untitled"
        }"#;
        let track: UserGenTrack = serde_json::from_str(json).unwrap();
        assert!(track.sharing.is_none());
        assert!(track.artwork_url.is_none());
        assert!(track.user.is_none());
        assert!(track.is_public());
    }
}
