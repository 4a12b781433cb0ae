//! Background HTTP server over a [`MockState`] catalog.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::MockState;
use crate::Book;

/// A catalog served on `127.0.0.1` at a random port.
///
/// Page links in collection responses are absolute and point back at this
/// server, so a client can follow them exactly as it would against
/// gutendex.com.
pub struct MockServer {
    url: String,
    handle: JoinHandle<()>,
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Serve [`Fixtures::default_catalog`] with the standard page size.
    pub async fn start() -> Self {
        Self::with_catalog(Fixtures::default_catalog(), crate::PAGE_SIZE).await
    }

    /// Serve an empty catalog.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Serve `books`, `page_size` to a page.
    pub async fn with_catalog(books: impl IntoIterator<Item = Book>, page_size: usize) -> Self {
        let state = books
            .into_iter()
            .fold(MockState::new().with_page_size(page_size), MockState::with_book);
        Self::with_state(state).await
    }

    /// Serve a prepared state. Its `base_url` is overwritten with the bound address.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn with_state(mut state: MockState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");
        let url = format!("http://{addr}");

        state.base_url = url.clone();
        let state = state.shared();
        let app = routes(state.clone());

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock server stopped");
            }
        });
        tracing::debug!(%url, "mock catalog listening");

        Self { url, handle, state }
    }

    /// Base URL to hand to `GutendexClient::new`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The live catalog. Writes are visible to the next request.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Stop serving and wait for the task to end.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}

fn routes(state: Arc<RwLock<MockState>>) -> Router {
    Router::new()
        .route("/books", get(handlers::list_books))
        .route("/books/", get(handlers::list_books))
        .route("/books/:id", get(handlers::get_book))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}
