//! List trait for fetching pages of entities.

use async_trait::async_trait;

use crate::client::GutendexClient;
use crate::error::Result;
use crate::pagination::{next_page, Page};

/// Default page limit for [`List::list_all`].
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// List/filter entities with link-based pagination.
///
/// # Example
///
/// ```ignore
/// use gutendex::{GutendexClient, Book, List, QueryBuilder};
///
/// let client = GutendexClient::new("https://gutendex.com")?;
///
/// // Fetch the first page
/// let page = Book::list(&client, &QueryBuilder::new().topic("children")).await?;
///
/// // Follow its next link
/// if let Some(next) = &page.next_link {
///     let page2 = Book::list_from_url(&client, next.as_str()).await?;
/// }
/// ```
#[async_trait]
pub trait List: Sized + Send + Sync {
    /// Query parameters for filtering.
    type Query: Default + Send + Sync;

    /// Fetch the first page of entities matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &GutendexClient, query: &Self::Query) -> Result<Page<Self>>;

    /// Fetch a page from a fully built URL, typically a page link.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the request fails.
    async fn list_from_url(client: &GutendexClient, url: &str) -> Result<Page<Self>>;

    /// Fetch every page matching the query, following `next` links in turn.
    ///
    /// Stops after `max_pages` pages even if more remain. A limit of zero
    /// fetches nothing.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; items gathered so far are dropped.
    async fn list_all(
        client: &GutendexClient,
        query: &Self::Query,
        max_pages: u32,
    ) -> Result<Vec<Self>> {
        if max_pages == 0 {
            return Ok(Vec::new());
        }

        let mut page = Self::list(client, query).await?;
        let mut fetched = 1;
        let mut all_items = Vec::with_capacity(page.len());

        loop {
            let has_next = page.has_next();
            if has_next && fetched >= max_pages {
                tracing::warn!(
                    "Reached pagination limit of {} pages, stopping",
                    max_pages
                );
            }
            if !has_next || fetched >= max_pages {
                all_items.extend(page.items);
                break;
            }

            let next = next_page(client, &page).await?;
            all_items.extend(page.items);
            page = next;
            fetched += 1;
        }

        Ok(all_items)
    }
}
