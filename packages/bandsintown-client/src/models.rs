//! Bandsintown API response models
//!
//! Fields the API does not always send are optional, and anything not
//! modelled here is kept in `extra` so no data is dropped.

use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept an identifier sent either as a JSON string or a number; `null` is empty
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string_or_number(deserializer)?.unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// An artist as returned by `GET /artists/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist name (empty if the API sent none)
    #[serde(default)]
    pub name: String,
    /// Bandsintown artist ID
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub id: Option<String>,
    /// MusicBrainz ID (if available)
    #[serde(default)]
    pub mbid: Option<String>,
    /// URL to the Bandsintown artist page
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub facebook_page_url: Option<String>,
    /// Number of Bandsintown users tracking the artist
    #[serde(default)]
    pub tracker_count: Option<u64>,
    #[serde(default)]
    pub upcoming_event_count: Option<u64>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An event as returned by `GET /artists/{name}/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Bandsintown event ID (empty if the API sent none)
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Local start time, e.g. `2018-05-04T13:00:00`
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub on_sale_datetime: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub lineup: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Parsed local start time, if the API sent one in the usual format
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.datetime
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
    }
}

/// Event venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub longitude: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ticket offer for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer type, e.g. "Tickets"
    #[serde(rename = "type", default)]
    pub offer_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Availability, e.g. "available"
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artist_keeps_unknown_fields() {
        let artist: Artist = serde_json::from_value(json!({
            "id": "658",
            "name": "Bad Religion",
            "tracker_count": 476952,
            "support_url": "https://example.com"
        }))
        .unwrap();

        assert_eq!(artist.name, "Bad Religion");
        assert_eq!(artist.id.as_deref(), Some("658"));
        assert_eq!(artist.tracker_count, Some(476952));
        assert_eq!(
            artist.extra.get("support_url"),
            Some(&json!("https://example.com"))
        );
    }

    #[test]
    fn test_minimal_event() {
        let event: Event = serde_json::from_value(json!({
            "id": "20590797",
            "datetime": "2018-05-04T13:00:00"
        }))
        .unwrap();

        assert_eq!(event.id, "20590797");
        assert!(event.venue.is_none());
        assert!(event.offers.is_empty());
        assert!(event.lineup.is_empty());
        let starts_at = event.starts_at().unwrap();
        assert_eq!(starts_at.to_string(), "2018-05-04 13:00:00");
    }

    #[test]
    fn test_full_event() {
        let event: Event = serde_json::from_value(json!({
            "id": "13722599",
            "artist_id": "438314",
            "url": "https://www.bandsintown.com/e/13722599",
            "on_sale_datetime": "2017-03-01T18:00:00",
            "datetime": "2017-03-19T11:00:00",
            "description": "This is a description",
            "venue": {
                "name": "Encore Beach Club",
                "latitude": "36.12714",
                "longitude": "-115.1629562",
                "city": "Las Vegas",
                "region": "NV",
                "country": "United States"
            },
            "offers": [
                {
                    "type": "Tickets",
                    "url": "https://www.bandsintown.com/t/13722599",
                    "status": "available"
                }
            ],
            "lineup": ["Kaskade"]
        }))
        .unwrap();

        let venue = event.venue.as_ref().unwrap();
        assert_eq!(venue.city.as_deref(), Some("Las Vegas"));
        assert_eq!(event.offers[0].offer_type.as_deref(), Some("Tickets"));
        assert_eq!(event.lineup, vec!["Kaskade".to_string()]);
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let event: Event = serde_json::from_value(json!({
            "id": 20590797,
            "artist_id": 658,
            "venue": {"latitude": 36.12714, "longitude": -115.1629562}
        }))
        .unwrap();

        assert_eq!(event.id, "20590797");
        assert_eq!(event.artist_id.as_deref(), Some("658"));
        let venue = event.venue.unwrap();
        assert_eq!(venue.latitude.as_deref(), Some("36.12714"));
        assert_eq!(venue.longitude.as_deref(), Some("-115.1629562"));
    }

    #[test]
    fn test_artist_without_name() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 658,
            "error": "Not Found"
        }))
        .unwrap();

        assert_eq!(artist.name, "");
        assert_eq!(artist.id.as_deref(), Some("658"));
        assert_eq!(artist.extra.get("error"), Some(&json!("Not Found")));
    }

    #[test]
    fn test_event_without_id_defaults_to_empty() {
        let event: Event = serde_json::from_value(json!({"title": "Matinee"})).unwrap();
        assert_eq!(event.id, "");
        let event: Event = serde_json::from_value(json!({"id": null})).unwrap();
        assert_eq!(event.id, "");
        assert_eq!(event.title.as_deref(), Some("Matinee"));
    }

    #[test]
    fn test_object_id_is_rejected() {
        let result = serde_json::from_value::<Event>(json!({"id": {"nested": true}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unparseable_datetime_is_none() {
        let event: Event = serde_json::from_value(json!({
            "id": "1",
            "datetime": "next tuesday"
        }))
        .unwrap();
        assert!(event.starts_at().is_none());
    }
}
