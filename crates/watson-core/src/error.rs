//! Service client error types.

use thiserror::Error;
use watson_auth::AuthError;

/// Errors that can occur when calling a Watson service.
#[derive(Debug, Error)]
pub enum WatsonError {
    /// A required option was empty. Raised before any network I/O.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// An option could not be turned into a valid request (bad header, bad mime type).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter or header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// Failed to decode a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Credentials could not be attached.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl WatsonError {
    /// HTTP status for [`WatsonError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
