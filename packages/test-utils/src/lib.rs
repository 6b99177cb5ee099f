//! Shared test utilities for the Bandsintown workspace
//!
//! This crate provides a mock Bandsintown API so client and CLI tests run
//! without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use bandsintown_test_utils::{artist_fixture, MockBandsintownServer};
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let server = MockBandsintownServer::start().await;
//!     server.mock_artist("Bad Religion", artist_fixture("Bad Religion")).await;
//!
//!     // Point the client's base URL at server.url()
//! }
//! ```

mod bandsintown;

pub use bandsintown::{artist_fixture, event_fixture, MockBandsintownServer};
