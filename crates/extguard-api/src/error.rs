//! Gateway error classification

use extguard_core::messages::{is_duplicate_message, DUPLICATE_CODE};
use extguard_core::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using the gateway's error type
pub type Result<T> = std::result::Result<T, ApiError>;

/// A failed backend call
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL cannot carry API paths
    #[error("Invalid base URL: {url}")]
    InvalidUrl { url: String },

    /// No response was received
    #[error("{method} {path} failed: {source}")]
    Transport {
        method: String,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status
    #[error("{method} {path} returned {status}")]
    Status {
        method: String,
        path: String,
        status: StatusCode,
        body: Option<ErrorBody>,
    },

    /// A 2xx response carried an unexpected payload
    #[error("Failed to decode response from {method} {path}: {source}")]
    Decode {
        method: String,
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// HTTP status, when the backend responded at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error envelope, if the backend sent one
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// The backend's human-readable error message
    pub fn server_message(&self) -> Option<&str> {
        self.body().and_then(ErrorBody::message)
    }

    /// Whether the backend rejected the request as a duplicate key
    pub fn is_duplicate(&self) -> bool {
        let Some(body) = self.body() else {
            return false;
        };
        body.code.as_deref() == Some(DUPLICATE_CODE)
            || body.message().is_some_and(is_duplicate_message)
    }
}
