//! Error types for the fetch layer.

use thiserror::Error;

/// Errors from the external catalog, user-generated-content, and
/// link-resolution interfaces.
///
/// All three variants are handled the same way at every call site: logged,
/// then degraded to a safe default (an empty list for catalog fetches,
/// fallback search links for resolution). Nothing in this crate surfaces a
/// fetch error as fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote answered with a non-success status.
    #[error("HTTP error from {source_name}: {message}")]
    Http {
        source_name: &'static str,
        message: String,
    },

    /// The response body was not shaped as expected.
    #[error("parse error from {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    /// The request itself failed (connection, timeout, TLS).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl FetchError {
    /// Returns `true` when the error is transient and a later attempt may
    /// succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Request(_))
    }
}

/// Convenience alias for fetch results.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
