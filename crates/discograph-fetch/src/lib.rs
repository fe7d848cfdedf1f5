//! Catalog fetching and link resolution for discograph.
//!
//! Talks to three external interfaces through the artist-site proxy API:
//! the primary catalog (`/catalog`), the secondary user-generated-content
//! feed (`/usergen`), and the link-resolution service (`/links`). Results
//! are normalized into the `discograph-core` release model, deduplicated,
//! merged, and sorted newest-first. Every network failure degrades to a
//! safe default (empty list, fallback search links); nothing here is fatal.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cache;
pub mod catalog_api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod resolver;
pub mod songlink;
pub mod usergen;

pub use cache::LinkCache;
pub use catalog_api::{CatalogAlbum, CatalogClient};
pub use config::Config;
pub use error::{FetchError, FetchResult};
pub use fetcher::CatalogFetcher;
pub use resolver::LinkResolver;
pub use songlink::SonglinkClient;
pub use usergen::{UserGenClient, UserGenTrack};
