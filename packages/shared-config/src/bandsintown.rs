//! Bandsintown API configuration types

use std::fmt;

use url::Url;

use crate::{get_env_or_default, get_required_env, parse_optional_env, ConfigError, ConfigResult};

/// Public Bandsintown REST API host
pub const DEFAULT_API_URL: &str = "https://rest.bandsintown.com";

/// Bandsintown API client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct BandsintownConfig {
    /// Application identifier sent as the `app_id` query parameter
    pub app_id: String,

    /// API base URL, without a trailing path
    pub base_url: String,

    /// Request timeout in seconds (`None` leaves the HTTP client default)
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl fmt::Debug for BandsintownConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandsintownConfig")
            .field("app_id", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl BandsintownConfig {
    /// Create a configuration for the public API with the given app id
    ///
    /// The app id is not validated here; the server rejects a missing one.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }

    /// Load Bandsintown configuration from environment variables
    ///
    /// - `BANDSINTOWN_APP_ID` (required)
    /// - `BANDSINTOWN_API_URL` (default: `https://rest.bandsintown.com`)
    /// - `BANDSINTOWN_TIMEOUT` in seconds (optional)
    /// - `BANDSINTOWN_USER_AGENT` (optional)
    pub fn from_env() -> ConfigResult<Self> {
        let app_id = get_required_env("BANDSINTOWN_APP_ID")?;
        let base_url = get_env_or_default("BANDSINTOWN_API_URL", DEFAULT_API_URL);
        validate_base_url("BANDSINTOWN_API_URL", &base_url)?;

        Ok(Self {
            app_id,
            base_url,
            timeout_secs: parse_optional_env("BANDSINTOWN_TIMEOUT")?,
            user_agent: get_env_or_default("BANDSINTOWN_USER_AGENT", &default_user_agent()),
        })
    }

    /// Load a `.env` file if present, then read the environment
    pub fn load() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Point the configuration at another host (useful for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Join a request path onto the base URL with exactly one `/`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_user_agent() -> String {
    format!("bandsintown-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn validate_base_url(name: &str, value: &str) -> ConfigResult<()> {
    let parsed =
        Url::parse(value).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }
    Ok(())
}
