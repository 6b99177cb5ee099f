//! Bandsintown API error types

use serde_json::Value;
use thiserror::Error;

/// Message the API returns when the `app_id` parameter is missing or rejected
pub(crate) const MISSING_APP_ID_MESSAGE: &str = "Missing required request parameters: [app_id]";

/// First entry of `errors` for a malformed `date` parameter
pub(crate) const INVALID_DATE_FORMAT: &str = "Invalid date format";

/// First entry of `errors` for an artist the API does not know
pub(crate) const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Bandsintown API client errors
#[derive(Error, Debug)]
pub enum BandsintownError {
    /// The server rejected the request because the app id was missing or invalid
    #[error("Bandsintown rejected the request: missing or invalid app_id")]
    InvalidAppId,

    /// The server rejected the `date` parameter
    #[error("Bandsintown rejected the date parameter: invalid date format")]
    InvalidDateFormat,

    /// Any other error payload returned by the API
    #[error("Bandsintown API error: {message}")]
    Api {
        /// First error message found in the payload
        message: String,
        /// Raw response body, kept for diagnostics
        payload: Value,
    },

    /// Invalid input provided to an API method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] bandsintown_shared_config::ConfigError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Failed to decode Bandsintown response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Response was valid JSON but did not have the expected shape
    #[error("Unexpected Bandsintown response: {0}")]
    UnexpectedResponse(#[source] serde_json::Error),
}

impl BandsintownError {
    /// Raw payload of a generic API error, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            BandsintownError::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Result type for Bandsintown operations
pub type BandsintownResult<T> = Result<T, BandsintownError>;
