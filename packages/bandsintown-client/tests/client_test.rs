//! End-to-end tests for the Bandsintown client against a mock API

use bandsintown_client::{
    ArtistIdentifier, BandsintownClient, BandsintownConfig, BandsintownError, EventDate,
    QueryParams,
};
use bandsintown_test_utils::{artist_fixture, event_fixture, MockBandsintownServer};
use chrono::NaiveDate;

fn client_for(server: &MockBandsintownServer, app_id: &str) -> BandsintownClient {
    let config = BandsintownConfig::new(app_id)
        .with_base_url(server.url())
        .with_timeout_secs(5);
    BandsintownClient::with_config(&config).unwrap()
}

#[tokio::test]
async fn test_artist_lookup_round_trip() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_artist("Bad Religion", artist_fixture("Bad Religion"))
        .await;

    let client = client_for(&server, "test-app");
    let artist = client.artists("Bad Religion").await.unwrap().unwrap();

    assert_eq!(artist.name, "Bad Religion");
    assert_eq!(artist.id.as_deref(), Some("658"));
    assert_eq!(artist.tracker_count, Some(476952));
    assert_eq!(server.request_count().await, 1);
    assert_eq!(
        server.received_queries().await,
        vec![vec![("app_id".to_string(), "test-app".to_string())]]
    );
}

#[tokio::test]
async fn test_unknown_artist_is_none() {
    let server = MockBandsintownServer::start().await;
    server.mock_artist_not_found("Nobody").await;

    let client = client_for(&server, "test-app");
    assert!(client.artists("Nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_events_with_typed_date_range() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_events_for_date(
            "Every Time I Die",
            "2018-01-15,2018-02-15",
            vec![event_fixture("1234", "2018-02-01T20:00:00")],
        )
        .await;

    let client = client_for(&server, "test-app");
    let range = EventDate::Between(
        NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2018, 2, 15).unwrap(),
    );
    let events = client
        .artists_events("Every Time I Die", Some(range))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.id, "1234");
    assert_eq!(
        event.venue.as_ref().and_then(|v| v.city.as_deref()),
        Some("San Francisco")
    );
    assert_eq!(event.lineup, vec!["Bad Religion".to_string()]);
    assert!(event.starts_at().is_some());
}

#[tokio::test]
async fn test_events_date_sent_verbatim() {
    let server = MockBandsintownServer::start().await;
    server.mock_events("bar", vec![]).await;

    let client = client_for(&server, "test-app");
    client
        .artists_events("bar", Some("2018-01-01".into()))
        .await
        .unwrap();

    let queries = server.received_queries().await;
    assert_eq!(queries.len(), 1);
    assert!(queries[0].contains(&("date".to_string(), "2018-01-01".to_string())));
    assert!(queries[0].contains(&("app_id".to_string(), "test-app".to_string())));
}

#[tokio::test]
async fn test_events_without_date_omit_the_key() {
    let server = MockBandsintownServer::start().await;
    server.mock_events("bar", vec![]).await;

    let client = client_for(&server, "test-app");
    let events = client.artists_events("bar", None).await.unwrap();
    assert_eq!(events, Some(vec![]));

    let queries = server.received_queries().await;
    assert!(queries[0].iter().all(|(key, _)| key != "date"));
}

#[tokio::test]
async fn test_unknown_artist_events_is_none() {
    let server = MockBandsintownServer::start().await;
    server.mock_events_error("foo", 404, "Unknown Artist").await;

    let client = client_for(&server, "test-app");
    assert!(client.artists_events("foo", None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_date_format() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_events_error("bar", 400, "Invalid date format")
        .await;

    let client = client_for(&server, "test-app");
    let result = client.artists_events("bar", Some("florp".into())).await;
    assert!(matches!(result, Err(BandsintownError::InvalidDateFormat)));
}

#[tokio::test]
async fn test_invalid_app_id_everywhere() {
    let server = MockBandsintownServer::start().await;
    server.mock_invalid_app_id().await;

    let client = client_for(&server, "");

    assert!(matches!(
        client.request("stuff", &QueryParams::new()).await,
        Err(BandsintownError::InvalidAppId)
    ));
    assert!(matches!(
        client.artists("Bad Religion").await,
        Err(BandsintownError::InvalidAppId)
    ));
    assert!(matches!(
        client
            .artists_events(ArtistIdentifier::FacebookId("1234".to_string()), None)
            .await,
        Err(BandsintownError::InvalidAppId)
    ));
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_artist("Bad Religion", artist_fixture("Bad Religion"))
        .await;

    let client = client_for(&server, "test-app");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.artists("Bad Religion").await })
        })
        .collect();

    for handle in handles {
        let artist = handle.await.unwrap().unwrap();
        assert!(artist.is_some());
    }
    assert_eq!(server.request_count().await, 4);
}
