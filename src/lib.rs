//! Gutendex API client library.
//!
//! A Rust library for the [Gutendex](https://gutendex.com) catalog of
//! Project Gutenberg books. Single books are fetched with [`Get`], filtered
//! pages with [`List`], and neighbouring pages by following the links each
//! [`Page`] carries.
//!
//! # Quick Start
//!
//! ```no_run
//! use gutendex::{GutendexClient, Book, Get, List, QueryBuilder, next_page};
//!
//! #[tokio::main]
//! async fn main() -> gutendex::Result<()> {
//!     let client = GutendexClient::new("https://gutendex.com")?;
//!
//!     // Get a book by ID
//!     let book = Book::get(&client, 84).await?;
//!     println!("Book: {}", book.title);
//!
//!     // Search, then walk one page forward
//!     let page = Book::list(&client, &QueryBuilder::new().search("dickens")).await?;
//!     println!("Found {} books", page.total_count);
//!     if page.has_next() {
//!         let page2 = next_page(&client, &page).await?;
//!         println!("Page 2 has {} books", page2.len());
//!     }
//!
//!     client.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`Result`]. [`GutendexError`] separates network
//! failures, empty bodies, undecodable bodies, and API rejections (which
//! carry the HTTP status), so callers can tell a missing book from an
//! unreachable server.
//!
//! # Configuration
//!
//! [`ClientConfig`] sets the base URL (default `https://gutendex.com`),
//! per-phase timeouts (default 30 seconds), and verbose request logging.

pub mod cli;
mod client;
mod error;
mod models;
pub mod output;
mod pagination;
mod query;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{classify_response, ClientConfig, GutendexClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use error::{GutendexError, Result};
pub use pagination::{next_page, previous_page, Page, PAGE_SIZE};
pub use query::{QueryBuilder, Sort};

// Re-export traits
pub use traits::{Get, List, DEFAULT_MAX_PAGES};

// Re-export models
pub use models::{ApiError, Book, Copyright, Person};

// Re-export convenience functions
pub use models::{get_book, get_books, get_books_from_url};
pub use models::{
    books_by_author_year_range, books_by_copyright, books_by_ids, books_by_languages,
    books_by_topic, search_books,
};
