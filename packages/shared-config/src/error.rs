//! Errors raised while reading `BANDSINTOWN_*` settings

use thiserror::Error;

/// Why a Bandsintown configuration could not be built
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `BANDSINTOWN_APP_ID` is unset
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable such as `BANDSINTOWN_TIMEOUT` did not parse (name, reason)
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    /// `BANDSINTOWN_API_URL` is not an http(s) URL (name, reason)
    #[error("invalid URL format for {0}: {1}")]
    InvalidUrl(String, String),
}

/// Result type for loading Bandsintown configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
