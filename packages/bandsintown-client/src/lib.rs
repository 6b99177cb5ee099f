//! Bandsintown API client
//!
//! This crate provides a thin client for the Bandsintown REST API:
//! - Artist lookup by name, Facebook ID or MusicBrainz ID
//! - Artist event listings, optionally filtered by date
//!
//! Unknown artists are reported as `Ok(None)`; API error payloads become
//! [`BandsintownError`] variants.
//!
//! # Example
//!
//! ```rust,no_run
//! use bandsintown_client::{BandsintownClient, EventDate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BandsintownClient::new("your_app_id")?;
//!
//! // Look up an artist
//! if let Some(artist) = client.artists("Bad Religion").await? {
//!     println!("{} has {:?} upcoming events", artist.name, artist.upcoming_event_count);
//! }
//!
//! // List all of an artist's events
//! let events = client.artists_events("Bad Religion", Some(EventDate::All)).await?;
//! for event in events.unwrap_or_default() {
//!     println!("{}: {:?}", event.id, event.datetime);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `BANDSINTOWN_APP_ID`: application identifier (required by [`BandsintownClient::from_env`])
//! - `BANDSINTOWN_API_URL`: API base URL (default: `https://rest.bandsintown.com`)
//! - `BANDSINTOWN_TIMEOUT`: request timeout in seconds (optional)

mod client;
mod error;
mod models;
mod params;

pub use bandsintown_shared_config::BandsintownConfig;
pub use client::BandsintownClient;
pub use error::{BandsintownError, BandsintownResult};
pub use models::{Artist, Event, Offer, Venue};
pub use params::{ArtistIdentifier, EventDate, ParamValue, QueryParams};
