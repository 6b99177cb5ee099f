//! Shared configuration types for the Bandsintown client
//!
//! This crate provides the configuration consumed by the API client and the
//! command-line tool, loaded from environment variables (and an optional
//! `.env` file).

mod bandsintown;
mod error;

pub use bandsintown::{BandsintownConfig, DEFAULT_API_URL};
pub use error::{ConfigError, ConfigResult};

use std::env;

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable that has no default
///
/// Unset and empty variables both yield `None`.
pub fn parse_optional_env<T>(name: &str) -> ConfigResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(None),
    }
}
