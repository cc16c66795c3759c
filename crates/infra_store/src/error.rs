//! Store error types.

use thiserror::Error;

/// Errors from key-value store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend could not be reached or the operation failed in transit.
    ///
    /// Callers are expected to treat this as a soft failure: the cached
    /// value is an optimisation and the computation can always proceed
    /// without it.
    #[error("store backend unavailable: {message}")]
    Unavailable {
        /// Backend-provided failure description
        message: String,
    },
}

impl StoreError {
    /// Wraps a backend failure description.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }
}
