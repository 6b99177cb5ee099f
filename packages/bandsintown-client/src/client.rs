//! Bandsintown API client implementation

use std::fmt;
use std::time::Duration;

use bandsintown_shared_config::BandsintownConfig;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{
    BandsintownError, BandsintownResult, INVALID_DATE_FORMAT, MISSING_APP_ID_MESSAGE,
    UNKNOWN_ARTIST,
};
use crate::models::{Artist, Event};
use crate::params::{ArtistIdentifier, EventDate, QueryParams};

/// Bandsintown API client
///
/// Holds only configuration; every call builds its own parameters, so a
/// clone can be shared freely across tasks.
#[derive(Clone)]
pub struct BandsintownClient {
    http_client: Client,
    config: BandsintownConfig,
}

impl fmt::Debug for BandsintownClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandsintownClient")
            .field("app_id", &"[REDACTED]")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

/// What an `errors` payload means to a caller
enum ErrorPayload {
    UnknownArtist,
    Failure(BandsintownError),
}

impl BandsintownClient {
    /// Create a client for the public API with the given app id
    ///
    /// The app id is not checked locally; the server rejects a missing one
    /// with [`BandsintownError::InvalidAppId`].
    pub fn new(app_id: impl Into<String>) -> BandsintownResult<Self> {
        Self::with_config(&BandsintownConfig::new(app_id))
    }

    /// Create a client from configuration
    pub fn with_config(config: &BandsintownConfig) -> BandsintownResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(config: &BandsintownConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config: config.clone(),
        }
    }

    /// Create a client from `BANDSINTOWN_*` environment variables
    ///
    /// # Errors
    /// - `BandsintownError::Config` if the configuration is missing or invalid
    pub fn from_env() -> BandsintownResult<Self> {
        Self::with_config(&BandsintownConfig::from_env()?)
    }

    /// The application identifier sent with every request
    pub fn app_id(&self) -> &str {
        &self.config.app_id
    }

    /// The API base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configuration
    pub fn config(&self) -> &BandsintownConfig {
        &self.config
    }

    /// Parameters sent with every request
    pub fn default_params(&self) -> QueryParams {
        QueryParams::new().with("app_id", self.config.app_id.as_str())
    }

    /// Issue a GET for `path` and decode the JSON body
    ///
    /// Caller `params` are merged over the defaults, so a caller value wins on
    /// a key collision. The body is decoded whatever the HTTP status, since
    /// the API reports its errors in the body.
    ///
    /// # Errors
    /// - `BandsintownError::InvalidAppId` - If the server reports a missing app id
    /// - `BandsintownError::Decode` - If the body is not valid JSON
    /// - `BandsintownError::Http` - If the HTTP request fails
    #[instrument(skip(self, params), fields(param_count = params.len()))]
    pub async fn request(&self, path: &str, params: &QueryParams) -> BandsintownResult<Value> {
        let url = self.config.endpoint_url(path);
        let query = self.default_params().merged_with(params);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(%status, body_len = text.len(), "Received Bandsintown response");

        let data: Value = serde_json::from_str(&text).map_err(BandsintownError::Decode)?;

        if data.get("message").and_then(Value::as_str) == Some(MISSING_APP_ID_MESSAGE) {
            warn!("Bandsintown rejected the app id");
            return Err(BandsintownError::InvalidAppId);
        }

        Ok(data)
    }

    /// Look up a single artist
    ///
    /// Returns `Ok(None)` when the artist is unknown, including when the API
    /// answers with an empty or otherwise undecodable body.
    ///
    /// # Errors
    /// - `BandsintownError::InvalidInput` - If the identifier is empty
    /// - `BandsintownError::InvalidAppId` - If the app id is rejected
    /// - `BandsintownError::Api` - If the API returns another error payload
    /// - `BandsintownError::UnexpectedResponse` - If the body is not an artist
    /// - `BandsintownError::Http` - If the HTTP request fails
    #[instrument(skip(self, artist))]
    pub async fn artists(
        &self,
        artist: impl Into<ArtistIdentifier>,
    ) -> BandsintownResult<Option<Artist>> {
        let artist = artist.into();
        let path = format!("artists/{}", artist.to_path_segment()?);

        debug!(?artist, "Fetching artist from Bandsintown");

        let data = match self.request(&path, &QueryParams::new()).await {
            Ok(data) => data,
            Err(BandsintownError::Decode(e)) => {
                debug!(?artist, error = %e, "Undecodable artist response, treating as not found");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if data.is_null() {
            return Ok(None);
        }

        match Self::inspect_errors(&data) {
            Some(ErrorPayload::UnknownArtist) => return Ok(None),
            Some(ErrorPayload::Failure(e)) => return Err(e),
            None => {}
        }

        let artist: Artist =
            serde_json::from_value(data).map_err(BandsintownError::UnexpectedResponse)?;
        Ok(Some(artist))
    }

    /// List an artist's events
    ///
    /// Without a `date` the `date` parameter is omitted and the server
    /// default (upcoming events) applies. An artist with no events yields
    /// `Ok(Some(vec![]))`; an unknown artist yields `Ok(None)`.
    ///
    /// # Errors
    /// - `BandsintownError::InvalidInput` - If the identifier is empty
    /// - `BandsintownError::InvalidDateFormat` - If the server rejects `date`
    /// - `BandsintownError::InvalidAppId` - If the app id is rejected
    /// - `BandsintownError::Api` - If the API returns another error payload
    /// - `BandsintownError::Decode` - If the body is not valid JSON
    /// - `BandsintownError::UnexpectedResponse` - If the body is not a list of events
    /// - `BandsintownError::Http` - If the HTTP request fails
    #[instrument(skip(self, artist, date))]
    pub async fn artists_events(
        &self,
        artist: impl Into<ArtistIdentifier>,
        date: Option<EventDate>,
    ) -> BandsintownResult<Option<Vec<Event>>> {
        let artist = artist.into();
        let path = format!("artists/{}/events", artist.to_path_segment()?);

        let mut params = QueryParams::new();
        if let Some(date) = &date {
            params.insert("date", date.to_string());
        }

        debug!(
            ?artist,
            date = ?date.as_ref().map(ToString::to_string),
            "Fetching artist events from Bandsintown"
        );

        let data = self.request(&path, &params).await?;

        if data.is_null() {
            return Ok(None);
        }

        match Self::inspect_errors(&data) {
            Some(ErrorPayload::UnknownArtist) => return Ok(None),
            Some(ErrorPayload::Failure(e)) => return Err(e),
            None => {}
        }

        let events: Vec<Event> =
            serde_json::from_value(data).map_err(BandsintownError::UnexpectedResponse)?;

        debug!(?artist, event_count = events.len(), "Found artist events");

        Ok(Some(events))
    }

    /// Classify an error payload, if `data` is one
    ///
    /// Only objects are inspected; arrays and scalars are data.
    fn inspect_errors(data: &Value) -> Option<ErrorPayload> {
        let object = data.as_object()?;

        if let Some(errors) = object.get("errors") {
            let first = errors
                .as_array()
                .and_then(|list| list.first())
                .and_then(Value::as_str);

            return Some(match first {
                Some(INVALID_DATE_FORMAT) => {
                    ErrorPayload::Failure(BandsintownError::InvalidDateFormat)
                }
                Some(UNKNOWN_ARTIST) => ErrorPayload::UnknownArtist,
                Some(message) => ErrorPayload::Failure(BandsintownError::Api {
                    message: message.to_string(),
                    payload: data.clone(),
                }),
                None => ErrorPayload::Failure(BandsintownError::Api {
                    message: errors.to_string(),
                    payload: data.clone(),
                }),
            });
        }

        let message = object.get("message").and_then(Value::as_str)?;
        Some(ErrorPayload::Failure(BandsintownError::Api {
            message: message.to_string(),
            payload: data.clone(),
        }))
    }
}
