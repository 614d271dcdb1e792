//! Error types exposed by the backend access layer.

use thiserror::Error;

/// Errors surfaced while loading configuration or communicating with the
/// review backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The backend base URL could not be parsed.
    #[error("backend URL is invalid: {0}")]
    InvalidUrl(String),

    /// The backend returned a non-success HTTP status.
    #[error("API error: {status} {status_text}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("backend response decoding failed: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The backend rejected a trigger-review request.
    #[error("failed to trigger review: {message}")]
    Review {
        /// Backend-provided error detail, or the HTTP status when the body
        /// carried none.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl DashboardError {
    /// Returns the backend-provided detail for trigger-review failures, or
    /// the full error message for every other variant.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Review { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
