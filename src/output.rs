//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Book, Page};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Book {
    fn pretty_print(&self) -> String {
        let header = format!("Book #{}", self.id);
        let divider = "─".repeat(self.title.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Title:          {}", self.title),
        ];

        for author in &self.authors {
            match author.lifespan() {
                Some(years) => lines.push(format!("Author:         {} ({})", author.name, years)),
                None => lines.push(format!("Author:         {}", author.name)),
            }
        }

        for translator in &self.translators {
            lines.push(format!("Translator:     {}", translator.name));
        }

        if !self.languages.is_empty() {
            lines.push(format!("Languages:      {}", self.languages.join(", ")));
        }

        lines.push(format!("Copyright:      {}", self.copyright));
        lines.push(format!("Downloads:      {}", self.download_count));

        if !self.subjects.is_empty() {
            lines.push(format!("Subjects:       {}", self.subjects.join("; ")));
        }

        if !self.shelves.is_empty() {
            lines.push(format!("Bookshelves:    {}", self.shelves.join("; ")));
        }

        for (mime, url) in &self.formats {
            lines.push(format!("Format:         {mime} -> {url}"));
        }

        lines.join("\n")
    }
}

/// One-line footer describing where a page sits in the result set.
pub fn page_summary<T>(page: &Page<T>) -> String {
    let mut summary = format!("{} of {} total items", page.len(), page.total_count);
    if let Some(ref previous) = page.previous_link {
        summary.push_str(&format!("\nPrevious: {previous}"));
    }
    if let Some(ref next) = page.next_link {
        summary.push_str(&format!("\nNext:     {next}"));
    }
    summary
}
