//! Book model and trait implementations.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::client::GutendexClient;
use crate::error::Result;
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::traits::{Get, List};

/// A book in the Project Gutenberg catalog.
///
/// Books are decoded fresh from every response; two fetches of the same ID
/// yield two independent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Project Gutenberg ID.
    pub id: u64,

    /// Book title.
    pub title: String,

    /// Subject headings (e.g., "Fantasy fiction").
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<String>,

    /// Authors, in catalog order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Person>,

    /// Short summaries of the book.
    #[serde(default, deserialize_with = "null_as_default")]
    pub summaries: Vec<String>,

    /// Translators, in catalog order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub translators: Vec<Person>,

    /// Project Gutenberg bookshelves the book sits on.
    #[serde(rename = "bookshelves", default, deserialize_with = "null_as_default")]
    pub shelves: Vec<String>,

    /// Two-letter language codes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,

    /// Copyright status in the United States.
    #[serde(default)]
    pub copyright: Copyright,

    /// Media type (usually "Text").
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: String,

    /// Download URLs keyed by MIME type.
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: BTreeMap<String, String>,

    /// Downloads in the last 30 days.
    #[serde(default, deserialize_with = "null_as_default")]
    pub download_count: u64,
}

impl Book {
    /// Whether the book is free of copyright in the United States.
    pub fn is_public_domain(&self) -> bool {
        self.copyright == Copyright::False
    }

    /// Download URL of the first format whose MIME type starts with `prefix`.
    ///
    /// Formats are checked in MIME type order, so `"text/plain"` matches
    /// `"text/plain; charset=us-ascii"` before `"text/plain; charset=utf-8"`.
    pub fn format_url(&self, prefix: &str) -> Option<&str> {
        self.formats
            .iter()
            .find(|(mime, _)| mime.starts_with(prefix))
            .map(|(_, url)| url.as_str())
    }

    /// Author names, in catalog order.
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }
}

/// An author or translator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Name, usually "Last, First".
    pub name: String,

    /// Year of birth (negative for BCE).
    #[serde(default)]
    pub birth_year: Option<i32>,

    /// Year of death (negative for BCE).
    #[serde(default)]
    pub death_year: Option<i32>,
}

impl Person {
    /// Render the known years as `"1832-1898"`, using `?` for a missing bound.
    ///
    /// Returns `None` when neither year is known.
    pub fn lifespan(&self) -> Option<String> {
        match (self.birth_year, self.death_year) {
            (None, None) => None,
            (birth, death) => {
                let fmt = |y: Option<i32>| y.map_or_else(|| "?".to_string(), |y| y.to_string());
                Some(format!("{}-{}", fmt(birth), fmt(death)))
            }
        }
    }
}

/// Copyright status: known true, known false, or unknown.
///
/// On the wire this is `true`, `false` or `null`. `Unknown` is a value in its
/// own right; it is not the same as leaving a filter unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Copyright {
    /// Under copyright in the United States.
    True,
    /// Public domain in the United States.
    False,
    /// Status not known.
    #[default]
    Unknown,
}

impl Copyright {
    /// Query-string token: `"true"`, `"false"` or `"null"`.
    pub fn as_token(&self) -> &'static str {
        match self {
            Copyright::True => "true",
            Copyright::False => "false",
            Copyright::Unknown => "null",
        }
    }
}

impl From<Option<bool>> for Copyright {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Copyright::True,
            Some(false) => Copyright::False,
            None => Copyright::Unknown,
        }
    }
}

impl From<Copyright> for Option<bool> {
    fn from(value: Copyright) -> Self {
        match value {
            Copyright::True => Some(true),
            Copyright::False => Some(false),
            Copyright::Unknown => None,
        }
    }
}

impl fmt::Display for Copyright {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Copyright::True => "copyrighted",
            Copyright::False => "public domain",
            Copyright::Unknown => "unknown",
        })
    }
}

impl FromStr for Copyright {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "true" => Ok(Copyright::True),
            "false" => Ok(Copyright::False),
            "null" => Ok(Copyright::Unknown),
            other => Err(format!(
                "invalid copyright '{other}': expected true, false or null"
            )),
        }
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[async_trait]
impl Get for Book {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GutendexClient, id: u64) -> Result<Self> {
        client.get(&format!("books/{id}")).await
    }
}

#[async_trait]
impl List for Book {
    type Query = QueryBuilder;

    #[tracing::instrument(skip(client))]
    async fn list(client: &GutendexClient, query: &Self::Query) -> Result<Page<Self>> {
        let endpoint = client.endpoint("books")?;
        let url = Url::parse(&query.build_url(endpoint.as_str()))?;
        client.get_url(url).await
    }

    #[tracing::instrument(skip(client))]
    async fn list_from_url(client: &GutendexClient, url: &str) -> Result<Page<Self>> {
        let url = Url::parse(url)?;
        client.get_url(url).await
    }
}

// Convenience functions for working with books

/// Get a single book by Project Gutenberg ID.
///
/// A missing ID fails with [`crate::GutendexError::Api`] carrying status 404
/// and the API's `detail` message.
///
/// # Example
///
/// ```ignore
/// use gutendex::{GutendexClient, get_book};
///
/// let client = GutendexClient::new("https://gutendex.com")?;
/// let book = get_book(&client, 84).await?;
/// println!("{}", book.title);
/// ```
pub async fn get_book(client: &GutendexClient, id: u64) -> Result<Book> {
    Book::get(client, id).await
}

/// Fetch the first page of books matching `query`.
pub async fn get_books(client: &GutendexClient, query: &QueryBuilder) -> Result<Page<Book>> {
    Book::list(client, query).await
}

/// Fetch a page of books from a full URL, such as a page's `next` link.
pub async fn get_books_from_url(client: &GutendexClient, url: &str) -> Result<Page<Book>> {
    Book::list_from_url(client, url).await
}

/// Search author names and titles.
///
/// # Example
///
/// ```ignore
/// use gutendex::{GutendexClient, search_books};
///
/// let client = GutendexClient::new("https://gutendex.com")?;
/// let page = search_books(&client, "dickens great").await?;
/// for book in &page {
///     println!("{} by {:?}", book.title, book.author_names());
/// }
/// ```
pub async fn search_books(client: &GutendexClient, text: &str) -> Result<Page<Book>> {
    get_books(client, &QueryBuilder::new().search(text)).await
}

/// Books in any of the given languages.
pub async fn books_by_languages<S: AsRef<str>>(
    client: &GutendexClient,
    languages: &[S],
) -> Result<Page<Book>> {
    get_books(client, &QueryBuilder::new().languages(languages)).await
}

/// Books with the given IDs.
pub async fn books_by_ids(client: &GutendexClient, ids: &[u64]) -> Result<Page<Book>> {
    get_books(client, &QueryBuilder::new().ids(ids)).await
}

/// Books whose subjects or bookshelves mention `topic`.
pub async fn books_by_topic(client: &GutendexClient, topic: &str) -> Result<Page<Book>> {
    get_books(client, &QueryBuilder::new().topic(topic)).await
}

/// Books with the given copyright status.
pub async fn books_by_copyright(
    client: &GutendexClient,
    copyright: Copyright,
) -> Result<Page<Book>> {
    get_books(client, &QueryBuilder::new().copyright(copyright)).await
}

/// Books with an author alive within the given years.
///
/// Either bound may be omitted; with neither, this is an unfiltered fetch.
pub async fn books_by_author_year_range(
    client: &GutendexClient,
    start: Option<i32>,
    end: Option<i32>,
) -> Result<Page<Book>> {
    let mut query = QueryBuilder::new();
    if let Some(start) = start {
        query = query.author_year_start(start);
    }
    if let Some(end) = end {
        query = query.author_year_end(end);
    }
    get_books(client, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_json() -> serde_json::Value {
        serde_json::json!({
            "id": 11,
            "title": "Alice's Adventures in Wonderland",
            "subjects": ["Fantasy fiction", "Alice (Fictitious character from Carroll) -- Juvenile fiction"],
            "authors": [{"name": "Carroll, Lewis", "birth_year": 1832, "death_year": 1898}],
            "summaries": ["A young girl falls down a rabbit hole."],
            "translators": [],
            "bookshelves": ["Children's Literature"],
            "languages": ["en"],
            "copyright": false,
            "media_type": "Text",
            "formats": {
                "text/html": "https://www.gutenberg.org/ebooks/11.html.images",
                "application/epub+zip": "https://www.gutenberg.org/ebooks/11.epub3.images",
                "text/plain; charset=us-ascii": "https://www.gutenberg.org/ebooks/11.txt.utf-8"
            },
            "download_count": 33151
        })
    }

    #[test]
    fn test_book_deserialize() {
        let book: Book = serde_json::from_value(alice_json()).expect("Failed to deserialize");

        assert_eq!(book.id, 11);
        assert_eq!(book.title, "Alice's Adventures in Wonderland");
        assert_eq!(book.authors[0].name, "Carroll, Lewis");
        assert_eq!(book.authors[0].birth_year, Some(1832));
        assert_eq!(book.shelves, vec!["Children's Literature"]);
        assert_eq!(book.copyright, Copyright::False);
        assert_eq!(book.formats.len(), 3);
        assert_eq!(book.download_count, 33151);
    }

    #[test]
    fn test_book_ignores_unknown_fields() {
        let mut json = alice_json();
        json["editors"] = serde_json::json!([{"name": "Someone"}]);
        json["new_field"] = serde_json::json!({"nested": true});
        let book: Book = serde_json::from_value(json).expect("Failed to deserialize");
        assert_eq!(book.id, 11);
    }

    #[test]
    fn test_book_minimal_and_null_collections() {
        let json = r#"{"id": 1, "title": "T", "subjects": null, "formats": null}"#;
        let book: Book = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(book.subjects.is_empty());
        assert!(book.formats.is_empty());
        assert_eq!(book.copyright, Copyright::Unknown);
        assert_eq!(book.download_count, 0);
    }

    #[test]
    fn test_book_null_scalars_use_defaults() {
        let json = r#"{"id": 1, "title": "T", "media_type": null, "download_count": null}"#;
        let book: Book = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(book.media_type, "");
        assert_eq!(book.download_count, 0);
    }

    #[test]
    fn test_book_round_trip_with_unknown_copyright() {
        let mut book: Book = serde_json::from_value(alice_json()).unwrap();
        book.copyright = Copyright::Unknown;
        book.authors[0].death_year = None;

        let json = serde_json::to_value(&book).unwrap();
        assert!(json["copyright"].is_null());
        assert!(json.get("bookshelves").is_some());

        let decoded: Book = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, book);
    }

    #[test]
    fn test_copyright_wire_values() {
        let decode = |s: &str| serde_json::from_str::<Copyright>(s).unwrap();
        assert_eq!(decode("true"), Copyright::True);
        assert_eq!(decode("false"), Copyright::False);
        assert_eq!(decode("null"), Copyright::Unknown);
        assert_eq!(serde_json::to_string(&Copyright::Unknown).unwrap(), "null");
        assert_ne!(Copyright::Unknown, Copyright::False);
    }

    #[test]
    fn test_copyright_from_str() {
        assert_eq!("null".parse::<Copyright>(), Ok(Copyright::Unknown));
        assert!("maybe".parse::<Copyright>().is_err());
    }

    #[test]
    fn test_format_url_prefix_match() {
        let book: Book = serde_json::from_value(alice_json()).unwrap();
        assert_eq!(
            book.format_url("text/plain"),
            Some("https://www.gutenberg.org/ebooks/11.txt.utf-8")
        );
        assert_eq!(
            book.format_url("application/epub"),
            Some("https://www.gutenberg.org/ebooks/11.epub3.images")
        );
        assert!(book.format_url("application/pdf").is_none());
    }

    #[test]
    fn test_book_helpers() {
        let book: Book = serde_json::from_value(alice_json()).unwrap();
        assert!(book.is_public_domain());
        assert_eq!(book.author_names(), vec!["Carroll, Lewis"]);
    }

    #[test]
    fn test_person_lifespan() {
        let person = |b, d| Person {
            name: "X".to_string(),
            birth_year: b,
            death_year: d,
        };
        assert_eq!(person(Some(1832), Some(1898)).lifespan().as_deref(), Some("1832-1898"));
        assert_eq!(person(None, Some(1898)).lifespan().as_deref(), Some("?-1898"));
        assert_eq!(person(Some(-427), None).lifespan().as_deref(), Some("-427-?"));
        assert!(person(None, None).lifespan().is_none());
    }
}
