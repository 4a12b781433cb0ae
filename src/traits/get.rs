//! Fetch-by-id for single-resource endpoints.

use async_trait::async_trait;

use crate::client::GutendexClient;
use crate::error::Result;

/// An entity served at `{base}/<collection>/{id}`.
///
/// ```ignore
/// use gutendex::{Book, Get, GutendexClient};
///
/// let client = GutendexClient::new("https://gutendex.com")?;
/// let pride = Book::get(&client, 1342).await?;
/// assert_eq!(pride.id, 1342);
/// ```
#[async_trait]
pub trait Get: Sized + Send {
    /// Identifier placed in the request path.
    type Id: Send + 'static;

    /// Fetch the entity with `id`.
    ///
    /// # Errors
    ///
    /// An unknown id is [`crate::GutendexError::Api`] with status 404. Transport
    /// and decoding failures surface as their own variants.
    async fn get(client: &GutendexClient, id: Self::Id) -> Result<Self>;
}
