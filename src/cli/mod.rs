//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the gutendex binary.

use clap::{Args, Parser, Subcommand};

use crate::{Copyright, QueryBuilder, Sort};

/// Gutendex command-line interface.
#[derive(Parser, Debug)]
#[command(name = "gutendex", about = "Gutendex book catalog CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// API base URL.
    #[arg(long, global = true, env = "GUTENDEX_API_URL", default_value = crate::DEFAULT_API_URL)]
    pub base_url: String,

    /// Log every request and response.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single book by Project Gutenberg ID.
    Get {
        /// The book ID.
        id: u64,
    },

    /// List books with optional filtering.
    List(ListArgs),
}

/// Filters for the `list` command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Search author names and titles.
    #[arg(long)]
    pub search: Option<String>,

    /// Two-letter language code (repeatable).
    #[arg(long = "language")]
    pub languages: Vec<String>,

    /// Match against subjects and bookshelves.
    #[arg(long)]
    pub topic: Option<String>,

    /// Comma-separated book IDs.
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<u64>,

    /// Copyright status: true, false or null (repeatable).
    #[arg(long)]
    pub copyright: Vec<Copyright>,

    /// Earliest year an author was alive.
    #[arg(long, allow_hyphen_values = true)]
    pub author_year_start: Option<i32>,

    /// Latest year an author was alive.
    #[arg(long, allow_hyphen_values = true)]
    pub author_year_end: Option<i32>,

    /// MIME type prefix a format must match.
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Sort order: ascending, descending or popular.
    #[arg(long)]
    pub sort: Option<Sort>,

    /// Fetch this page URL (e.g. a previous `next` link) instead of building a query.
    #[arg(long, conflicts_with_all = ["search", "languages", "topic", "ids", "copyright", "author_year_start", "author_year_end", "mime_type", "sort"])]
    pub page_url: Option<String>,
}

impl ListArgs {
    /// Build the query these arguments describe.
    pub fn to_query(&self) -> QueryBuilder {
        let mut query = QueryBuilder::new();
        if let Some(ref search) = self.search {
            query = query.search(search.as_str());
        }
        if !self.languages.is_empty() {
            query = query.languages(&self.languages);
        }
        if let Some(ref topic) = self.topic {
            query = query.topic(topic.as_str());
        }
        if !self.ids.is_empty() {
            query = query.ids(&self.ids);
        }
        match self.copyright.as_slice() {
            [] => {}
            [single] => query = query.copyright(*single),
            many => query = query.copyright_multiple(many),
        }
        if let Some(start) = self.author_year_start {
            query = query.author_year_start(start);
        }
        if let Some(end) = self.author_year_end {
            query = query.author_year_end(end);
        }
        if let Some(ref mime_type) = self.mime_type {
            query = query.mime_type(mime_type.as_str());
        }
        if let Some(sort) = self.sort {
            query = query.sort(sort);
        }
        query
    }
}
