//! Error types for the student REST client.

use thiserror::Error;

/// Errors returned by a [`StudentService`](super::StudentService).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (connect failure, timeout, ...).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        /// Human-readable messages from the `errors` array of the body.
        errors: Vec<String>,
    },

    /// Response body could not be read as a student record.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-reported validation messages. Empty for non-status errors.
    pub fn messages(&self) -> &[String] {
        match self {
            ApiError::Status { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
