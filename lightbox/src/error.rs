//! Error types for the LightBox library.

use thiserror::Error;

/// Errors that can occur when configuring or building the combined client.
///
/// Lookups themselves never fail with this type: upstream problems are
/// reduced to a [`LookupResult`](crate::LookupResult) instead.
#[derive(Error, Debug)]
pub enum LightboxError {
    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required environment variable was not set.
    #[error("{var} environment variable not set")]
    MissingConfig { var: &'static str },

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    ClientInit { reason: String },
}

/// Result type alias using [`LightboxError`].
pub type Result<T> = std::result::Result<T, LightboxError>;
