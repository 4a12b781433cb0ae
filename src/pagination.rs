//! Pagination utilities for Gutendex API responses.
//!
//! Pages link to their neighbours by absolute URL. [`next_page`] and
//! [`previous_page`] follow those links; they keep no state of their own, so
//! the caller drives traversal with whichever page it received last.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::GutendexClient;
use crate::error::{GutendexError, Result};
use crate::traits::List;

/// Maximum number of items the API puts on one page.
pub const PAGE_SIZE: usize = 32;

/// A page of results from the Gutendex API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(rename = "count")]
    pub total_count: u64,
    /// Link to the following page, if any.
    #[serde(rename = "next", default)]
    pub next_link: Option<Url>,
    /// Link to the preceding page, if any.
    #[serde(rename = "previous", default)]
    pub previous_link: Option<Url>,
    /// The items on this page.
    #[serde(rename = "results")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Whether a following page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_link.is_some()
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous_link.is_some()
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            total_count: self.total_count,
            next_link: self.next_link,
            previous_link: self.previous_link,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Fetch the page after `page`.
///
/// # Errors
///
/// Fails with [`GutendexError::NoNextPage`], without touching the network,
/// when `page` has no `next` link.
#[tracing::instrument(skip_all, fields(next = ?page.next_link.as_ref().map(Url::as_str)))]
pub async fn next_page<T: List>(client: &GutendexClient, page: &Page<T>) -> Result<Page<T>> {
    let link = page.next_link.as_ref().ok_or(GutendexError::NoNextPage)?;
    T::list_from_url(client, link.as_str()).await
}

/// Fetch the page before `page`.
///
/// # Errors
///
/// Fails with [`GutendexError::NoPreviousPage`], without touching the
/// network, when `page` has no `previous` link.
#[tracing::instrument(skip_all, fields(previous = ?page.previous_link.as_ref().map(Url::as_str)))]
pub async fn previous_page<T: List>(client: &GutendexClient, page: &Page<T>) -> Result<Page<T>> {
    let link = page
        .previous_link
        .as_ref()
        .ok_or(GutendexError::NoPreviousPage)?;
    T::list_from_url(client, link.as_str()).await
}
