//! Crate-level error types.
//!
//! [`HarshadError`] unifies every error source (configuration, HTTP
//! transport, JSON, provider rejections) behind a single enum so callers
//! can match on the variant they care about while still using the `?`
//! operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HarshadError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum HarshadError {
    /// Configuration or credential storage failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP round trip to the provider failed (connect, TLS, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider rejected the request and reported a reason
    /// (authentication, quota, blocked prompt).
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider answered without any usable snapshot text.
    #[error("market data retrieval failed: {0}")]
    EmptyResponse(String),
}
