//! Core domain model for discograph.
//!
//! This crate defines the normalized release model (releases, platforms,
//! listening-link sets), the in-memory catalog store with filtering, and
//! the view-state machine that governs the home / catalog / detail
//! interaction flow.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod view;

pub use catalog::{Catalog, CatalogFilter};
pub use error::{Error, Result};
pub use model::{LinkSet, Origin, Platform, Release, ReleaseType};
pub use view::{Effect, Intent, View, ViewState};
