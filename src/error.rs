//! Error types for the Buda client library.

use thiserror::Error;

/// The main error type for all Buda client operations.
#[derive(Error, Debug)]
pub enum BudaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The requested resource does not exist (HTTP 404)
    #[error("Buda error 404: Not found ({path})")]
    NotFound {
        /// The request path that was not found
        path: String,
    },

    /// The API returned a non-success status code
    #[error("Buda error {status}: {body}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body for caller diagnosis
        body: String,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}

impl BudaError {
    /// Check if this error is a not-found classification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BudaError::NotFound { .. })
    }

    /// The upstream HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BudaError::NotFound { .. } => Some(404),
            BudaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
