//! Mock server state management.
//!
//! Provides the in-memory catalog for the mock Gutendex API server and the
//! filtering the collection endpoint applies.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Book, Copyright, Sort, PAGE_SIZE};

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access from handlers.
#[derive(Debug)]
pub struct MockState {
    /// Books indexed by ID.
    pub books: BTreeMap<u64, Book>,

    /// Maximum books per page.
    pub page_size: usize,

    /// Absolute base URL used to build page links. Set by the server on bind.
    pub base_url: String,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            books: BTreeMap::new(),
            page_size: PAGE_SIZE,
            base_url: String::new(),
        }
    }
}

/// Filters parsed from a collection request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookFilter {
    pub search: Vec<String>,
    pub languages: Vec<String>,
    pub ids: Vec<u64>,
    pub topic: Option<String>,
    pub copyright: Vec<Copyright>,
    pub author_year_start: Option<i32>,
    pub author_year_end: Option<i32>,
    pub mime_type: Option<String>,
    pub sort: Sort,
}

impl BookFilter {
    /// Build a filter from raw query pairs.
    ///
    /// Unknown parameters are ignored. Returns a message for the first value
    /// that does not parse.
    pub fn from_params(params: &[(String, String)]) -> Result<Self, String> {
        let mut filter = Self::default();
        for (name, value) in params {
            match name.as_str() {
                "search" => {
                    filter.search = value.split_whitespace().map(str::to_lowercase).collect();
                }
                "languages" => {
                    filter.languages = split_list(value).map(str::to_lowercase).collect();
                }
                "ids" => {
                    filter.ids = split_list(value)
                        .map(|id| id.parse().map_err(|_| format!("Invalid id '{id}'.")))
                        .collect::<Result<Vec<u64>, String>>()?;
                }
                "topic" => filter.topic = Some(value.to_lowercase()),
                "copyright" => {
                    filter.copyright = split_list(value)
                        .map(str::parse::<Copyright>)
                        .collect::<Result<Vec<_>, String>>()?;
                }
                "author_year_start" => {
                    filter.author_year_start = Some(parse_year(value)?);
                }
                "author_year_end" => filter.author_year_end = Some(parse_year(value)?),
                "mime_type" => filter.mime_type = Some(value.clone()),
                "sort" => filter.sort = value.parse()?,
                _ => {}
            }
        }
        Ok(filter)
    }

    /// Whether `book` passes every filter.
    pub fn matches(&self, book: &Book) -> bool {
        let search_ok = self.search.iter().all(|word| {
            book.title.to_lowercase().contains(word)
                || book
                    .authors
                    .iter()
                    .any(|a| a.name.to_lowercase().contains(word))
        });

        let languages_ok = self.languages.is_empty()
            || book
                .languages
                .iter()
                .any(|l| self.languages.contains(&l.to_lowercase()));

        let ids_ok = self.ids.is_empty() || self.ids.contains(&book.id);

        let topic_ok = self.topic.as_ref().map_or(true, |topic| {
            book.subjects
                .iter()
                .chain(book.shelves.iter())
                .any(|s| s.to_lowercase().contains(topic))
        });

        let copyright_ok = self.copyright.is_empty() || self.copyright.contains(&book.copyright);

        let start_ok = self.author_year_start.map_or(true, |start| {
            book.authors
                .iter()
                .any(|a| a.death_year.is_some_and(|d| d >= start))
        });

        let end_ok = self.author_year_end.map_or(true, |end| {
            book.authors
                .iter()
                .any(|a| a.birth_year.is_some_and(|b| b <= end))
        });

        let mime_ok = self.mime_type.as_ref().map_or(true, |prefix| {
            book.formats.keys().any(|mime| mime.starts_with(prefix.as_str()))
        });

        search_ok
            && languages_ok
            && ids_ok
            && topic_ok
            && copyright_ok
            && start_ok
            && end_ok
            && mime_ok
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_year(value: &str) -> Result<i32, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid year '{value}'."))
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a book to the state.
    pub fn with_book(mut self, book: Book) -> Self {
        self.books.insert(book.id, book);
        self
    }

    /// Set the number of books per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Get a book by ID.
    pub fn get_book(&self, id: u64) -> Option<&Book> {
        self.books.get(&id)
    }

    /// All books passing `filter`, in the filter's sort order.
    pub fn list_books(&self, filter: &BookFilter) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.values().filter(|b| filter.matches(b)).collect();
        match filter.sort {
            Sort::Ascending => books.sort_by_key(|b| b.id),
            Sort::Descending => books.sort_by(|a, b| b.id.cmp(&a.id)),
            Sort::Popular => books.sort_by(|a, b| b.download_count.cmp(&a.download_count)),
        }
        books
    }
}
