//! Query construction for the book collection endpoint.
//!
//! [`QueryBuilder`] accumulates filter parameters and renders them as a
//! form-encoded query string. Each setter replaces any earlier value for the
//! same parameter; parameters keep the position at which they were first set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::Copyright;

/// Sort order accepted by the collection endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Ascending by Project Gutenberg ID.
    Ascending,
    /// Descending by Project Gutenberg ID.
    Descending,
    /// Most downloaded first (the API default).
    #[default]
    Popular,
}

impl Sort {
    /// The wire token for this sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Ascending => "ascending",
            Sort::Descending => "descending",
            Sort::Popular => "popular",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Sort::Ascending),
            "descending" => Ok(Sort::Descending),
            "popular" => Ok(Sort::Popular),
            other => Err(format!(
                "invalid sort '{other}': expected ascending, descending or popular"
            )),
        }
    }
}

/// Builder for collection query parameters.
///
/// Setters consume and return the builder so calls chain left to right.
///
/// # Example
///
/// ```
/// use gutendex::{Copyright, QueryBuilder};
///
/// let url = QueryBuilder::new()
///     .search("alice in wonderland")
///     .copyright(Copyright::False)
///     .build_url("https://gutendex.com/books");
///
/// assert_eq!(
///     url,
///     "https://gutendex.com/books?search=alice+in+wonderland&copyright=false"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    params: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, name: &'static str, value: String) -> Self {
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Only include books with at least one author alive on or after `year`.
    #[must_use]
    pub fn author_year_start(self, year: i32) -> Self {
        self.set("author_year_start", year.to_string())
    }

    /// Only include books with at least one author alive on or before `year`.
    #[must_use]
    pub fn author_year_end(self, year: i32) -> Self {
        self.set("author_year_end", year.to_string())
    }

    /// Filter by copyright status. [`Copyright::Unknown`] is sent as `null`.
    #[must_use]
    pub fn copyright(self, status: Copyright) -> Self {
        self.set("copyright", status.as_token().to_string())
    }

    /// Filter by any of several copyright statuses.
    #[must_use]
    pub fn copyright_multiple(self, statuses: &[Copyright]) -> Self {
        let joined = statuses
            .iter()
            .map(Copyright::as_token)
            .collect::<Vec<_>>()
            .join(",");
        self.set("copyright", joined)
    }

    /// Only include books with the given Project Gutenberg IDs.
    #[must_use]
    pub fn ids(self, ids: &[u64]) -> Self {
        let joined = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.set("ids", joined)
    }

    /// Only include books in any of the given two-letter language codes.
    #[must_use]
    pub fn languages<I, S>(self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = languages
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.set("languages", joined)
    }

    /// Only include books offering a format whose MIME type starts with `mime_type`.
    #[must_use]
    pub fn mime_type(self, mime_type: impl Into<String>) -> Self {
        self.set("mime_type", mime_type.into())
    }

    /// Search author names and titles.
    #[must_use]
    pub fn search(self, text: impl Into<String>) -> Self {
        self.set("search", text.into())
    }

    /// Case-insensitive match against subjects and bookshelves.
    #[must_use]
    pub fn topic(self, topic: impl Into<String>) -> Self {
        self.set("topic", topic.into())
    }

    /// Set the sort order.
    #[must_use]
    pub fn sort(self, sort: Sort) -> Self {
        self.set("sort", sort.as_str().to_string())
    }

    /// Drop every parameter.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.params.clear();
        self
    }

    /// Whether no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The parameters in the order they were first set, unencoded.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Render the parameters as a form-encoded query string (without `?`).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params())
            .finish()
    }

    /// Append the query string to `base_url`.
    ///
    /// Returns `base_url` unchanged when no parameter is set.
    pub fn build_url(&self, base_url: &str) -> String {
        if self.is_empty() {
            return base_url.to_string();
        }
        format!("{base_url}?{}", self.to_query_string())
    }
}
