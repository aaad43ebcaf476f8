//! Error types for upstream Spotify calls.
//!
//! Every handler collapses these to a uniform HTTP 500 with a static
//! message; the variants exist so logs distinguish transport failures
//! from vendor rejections and schema drift.

use thiserror::Error;

/// Failure modes of a single outbound Spotify request.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Spotify answered with a non-success status code.
    #[error("upstream responded with status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// Spotify answered 2xx but the body did not match the expected schema.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience Result type for the spotify client module.
pub type Result<T> = std::result::Result<T, Error>;
