//! Mock Gutendex API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Gutendex
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server filters and paginates a real catalog,
//! so page links can be followed across requests.
//!
//! # Example
//!
//! ```ignore
//! use gutendex::mock_server::MockServer;
//! use gutendex::{GutendexClient, Book, Get};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = GutendexClient::new(server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let book = Book::get(&client, 11).await.unwrap();
//!     assert_eq!(book.title, "Alice's Adventures in Wonderland");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{BookFilter, MockState};
