//! Mock Bandsintown server for client tests
//!
//! Provides a [`MockBandsintownServer`] that answers the artist and event
//! endpoints with canned payloads, including the API's error shapes.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Message the API returns when `app_id` is missing
const MISSING_APP_ID_MESSAGE: &str = "Missing required request parameters: [app_id]";

/// Mock Bandsintown server
///
/// Wraps a [`wiremock::MockServer`] with helpers for the endpoints the client
/// calls. Artist names are percent-encoded the same way the client does it.
///
/// # Example
///
/// ```rust,ignore
/// use bandsintown_test_utils::MockBandsintownServer;
///
/// #[tokio::test]
/// async fn test_events() {
///     let server = MockBandsintownServer::start().await;
///     server.mock_events("Bad Religion", vec![]).await;
///     // Configure the client with server.url()
/// }
/// ```
pub struct MockBandsintownServer {
    server: MockServer,
}

impl MockBandsintownServer {
    /// Start a new mock Bandsintown server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn artist_path(name: &str) -> String {
        format!("/artists/{}", urlencoding::encode(name))
    }

    fn events_path(name: &str) -> String {
        format!("/artists/{}/events", urlencoding::encode(name))
    }

    /// Mount an artist lookup returning `artist`
    pub async fn mock_artist(&self, name: &str, artist: Value) {
        Mock::given(method("GET"))
            .and(path(Self::artist_path(name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist))
            .mount(&self.server)
            .await;
    }

    /// Mount an artist lookup answered with an empty body (unknown artist)
    pub async fn mock_artist_not_found(&self, name: &str) {
        Mock::given(method("GET"))
            .and(path(Self::artist_path(name)))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&self.server)
            .await;
    }

    /// Mount an event listing returning `events`, whatever the date filter
    pub async fn mock_events(&self, name: &str, events: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(Self::events_path(name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(events)))
            .mount(&self.server)
            .await;
    }

    /// Mount an event listing that only answers for one `date` value
    pub async fn mock_events_for_date(&self, name: &str, date: &str, events: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(Self::events_path(name)))
            .and(query_param("date", date))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(events)))
            .mount(&self.server)
            .await;
    }

    /// Mount an event listing answered with an `errors` payload
    pub async fn mock_events_error(&self, name: &str, status_code: u16, error_message: &str) {
        Mock::given(method("GET"))
            .and(path(Self::events_path(name)))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "errors": [error_message]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount the server's answer to a missing app id on every GET
    pub async fn mock_invalid_app_id(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": MISSING_APP_ID_MESSAGE
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Query pairs of every received request, in arrival order
    pub async fn received_queries(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .collect()
    }
}

/// A realistic artist payload
pub fn artist_fixture(name: &str) -> Value {
    json!({
        "id": "658",
        "name": name,
        "url": "https://www.bandsintown.com/a/658",
        "mbid": "149e6720-4e4a-41a4-afca-6d29083fc091",
        "image_url": "https://s3.amazonaws.com/bit-photos/large/6277078.jpeg",
        "thumb_url": "https://s3.amazonaws.com/bit-photos/thumb/6277078.jpeg",
        "facebook_page_url": "https://www.facebook.com/badreligion",
        "tracker_count": 476952,
        "upcoming_event_count": 8
    })
}

/// A realistic event payload
pub fn event_fixture(id: &str, datetime: &str) -> Value {
    json!({
        "id": id,
        "artist_id": "658",
        "url": format!("https://www.bandsintown.com/e/{}", id),
        "on_sale_datetime": "",
        "datetime": datetime,
        "description": "",
        "venue": {
            "name": "The Fillmore",
            "latitude": "37.7840",
            "longitude": "-122.4330",
            "city": "San Francisco",
            "region": "CA",
            "country": "United States"
        },
        "offers": [
            {
                "type": "Tickets",
                "url": format!("https://www.bandsintown.com/t/{}", id),
                "status": "available"
            }
        ],
        "lineup": ["Bad Religion"]
    })
}
