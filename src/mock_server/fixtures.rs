//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic catalog entries.

use std::collections::BTreeMap;

use crate::{Book, Copyright, Person};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a minimal book with required fields only.
    pub fn minimal_book(id: u64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            subjects: vec![],
            authors: vec![],
            summaries: vec![],
            translators: vec![],
            shelves: vec![],
            languages: vec!["en".to_string()],
            copyright: Copyright::False,
            media_type: "Text".to_string(),
            formats: BTreeMap::new(),
            download_count: 0,
        }
    }

    /// Create a person with known life years.
    pub fn person(name: &str, birth_year: Option<i32>, death_year: Option<i32>) -> Person {
        Person {
            name: name.to_string(),
            birth_year,
            death_year,
        }
    }

    /// Create a book with one author, the usual formats, and a download count.
    pub fn book(id: u64, title: &str, author: Person, download_count: u64) -> Book {
        let mut book = Self::minimal_book(id, title);
        book.authors = vec![author];
        book.download_count = download_count;
        book.formats = Self::standard_formats(id);
        book
    }

    /// The format links Project Gutenberg publishes for most texts.
    pub fn standard_formats(id: u64) -> BTreeMap<String, String> {
        let base = format!("https://www.gutenberg.org/ebooks/{id}");
        BTreeMap::from([
            ("text/html".to_string(), format!("{base}.html.images")),
            (
                "application/epub+zip".to_string(),
                format!("{base}.epub3.images"),
            ),
            (
                "text/plain; charset=us-ascii".to_string(),
                format!("{base}.txt.utf-8"),
            ),
            (
                "image/jpeg".to_string(),
                format!("https://www.gutenberg.org/cache/epub/{id}/pg{id}.cover.medium.jpg"),
            ),
        ])
    }

    /// `count` filler books with IDs starting at `first_id`, for pagination tests.
    pub fn numbered_books(first_id: u64, count: usize) -> Vec<Book> {
        (0..count as u64)
            .map(|i| {
                let id = first_id + i;
                let mut book = Self::minimal_book(id, &format!("Volume {}", i + 1));
                book.download_count = 1_000 - i.min(999);
                book
            })
            .collect()
    }

    /// A small catalog covering every filter the collection endpoint supports.
    pub fn default_catalog() -> Vec<Book> {
        let mut alice = Self::book(
            11,
            "Alice's Adventures in Wonderland",
            Self::person("Carroll, Lewis", Some(1832), Some(1898)),
            33_151,
        );
        alice.subjects = vec!["Fantasy fiction".to_string()];
        alice.shelves = vec!["Children's Literature".to_string()];

        let mut frankenstein = Self::book(
            84,
            "Frankenstein; Or, The Modern Prometheus",
            Self::person("Shelley, Mary Wollstonecraft", Some(1797), Some(1851)),
            92_105,
        );
        frankenstein.subjects = vec![
            "Frankenstein's monster (Fictitious character) -- Fiction".to_string(),
            "Horror tales".to_string(),
        ];
        frankenstein.shelves = vec!["Gothic Fiction".to_string()];

        let mut pride = Self::book(
            1342,
            "Pride and Prejudice",
            Self::person("Austen, Jane", Some(1775), Some(1817)),
            60_840,
        );
        pride.subjects = vec!["Courtship -- Fiction".to_string()];
        pride.shelves = vec!["Best Books Ever Listings".to_string()];

        let mut quijote = Self::book(
            2000,
            "Don Quijote",
            Self::person("Cervantes Saavedra, Miguel de", Some(1547), Some(1616)),
            4_211,
        );
        quijote.languages = vec!["es".to_string()];
        quijote.shelves = vec!["Movie Books".to_string()];

        let mut miserables = Self::book(
            17489,
            "Les misérables Tome I: Fantine",
            Self::person("Hugo, Victor", Some(1802), Some(1885)),
            2_018,
        );
        miserables.languages = vec!["fr".to_string()];

        let mut metamorphosis = Self::book(
            5200,
            "Metamorphosis",
            Self::person("Kafka, Franz", Some(1883), Some(1924)),
            21_530,
        );
        metamorphosis.copyright = Copyright::Unknown;
        metamorphosis.translators = vec![Self::person("Wyllie, David", None, None)];

        let mut modern = Self::book(
            70001,
            "Notes on a Modern Catalog",
            Self::person("Doe, Jane", Some(1950), None),
            12,
        );
        modern.copyright = Copyright::True;
        modern.formats.remove("application/epub+zip");

        vec![
            alice,
            frankenstein,
            pride,
            quijote,
            miserables,
            metamorphosis,
            modern,
        ]
    }
}
