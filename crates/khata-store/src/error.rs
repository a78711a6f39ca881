//! Store error types.

use thiserror::Error;

/// Errors that can occur against the remote document store.
///
/// A missing document is not an error: reads return `Ok(None)` and the
/// orchestrator treats it as "nothing to hydrate yet".
#[derive(Debug, Error)]
pub enum StoreError {
    /// Missing or malformed credential/repository configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub returned an error response (auth, rate limit, conflict, ...).
    #[error("GitHub error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API body.
        message: String,
    },

    /// A document could not be decoded or parsed.
    #[error("invalid document: {0}")]
    Parse(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
