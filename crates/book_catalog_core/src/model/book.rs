//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical record stored in the catalog file.
//! - Provide title/author matching helpers shared by lookup and search.
//!
//! # Invariants
//! - Title comparison is case-insensitive; stored case is never altered.
//! - `year` and `genre` are free-form text and are never validated.
//! - Wire field names are `title`, `author`, `year`, `genre`, `read`.

use serde::{Deserialize, Serialize};

/// One entry of the reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Display title. Lookups by title ignore case.
    pub title: String,
    pub author: String,
    /// Publication year as typed by the user.
    pub year: String,
    pub genre: String,
    /// Whether the user has finished this book.
    pub read: bool,
}

/// Single-field change applied by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookUpdate {
    Title(String),
    Author(String),
    Year(String),
    Genre(String),
    Read(bool),
}

/// Which record field a text search inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    Title,
    Author,
    /// Matches when either title or author contains the query.
    #[default]
    Any,
}

impl Book {
    /// Creates an unread book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read: false,
        }
    }

    /// Returns the same book with `read` set.
    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Returns whether `title` equals this book's title, ignoring case.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Returns whether the selected field contains `query`, ignoring case.
    ///
    /// An empty query matches every book.
    pub fn contains_text(&self, query: &str, field: SearchField) -> bool {
        let needle = query.to_lowercase();
        let in_title = || self.title.to_lowercase().contains(&needle);
        let in_author = || self.author.to_lowercase().contains(&needle);
        match field {
            SearchField::Title => in_title(),
            SearchField::Author => in_author(),
            SearchField::Any => in_title() || in_author(),
        }
    }

    /// Applies a single-field change in place.
    pub fn apply(&mut self, update: BookUpdate) {
        match update {
            BookUpdate::Title(value) => self.title = value,
            BookUpdate::Author(value) => self.author = value,
            BookUpdate::Year(value) => self.year = value,
            BookUpdate::Genre(value) => self.genre = value,
            BookUpdate::Read(value) => self.read = value,
        }
    }
}

/// Normalizes a yes/no answer: only a trimmed, case-insensitive `yes` is true.
pub fn parse_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::{parse_yes, Book, BookUpdate, SearchField};

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi")
    }

    #[test]
    fn title_matches_ignores_case_but_requires_whole_title() {
        let book = dune();
        assert!(book.title_matches("dUNE"));
        assert!(!book.title_matches("dun"));
        assert!(!book.title_matches("Dune Messiah"));
    }

    #[test]
    fn contains_text_respects_selected_field() {
        let book = dune();
        assert!(book.contains_text("herb", SearchField::Author));
        assert!(!book.contains_text("herb", SearchField::Title));
        assert!(book.contains_text("herb", SearchField::Any));
        assert!(book.contains_text("UN", SearchField::Title));
    }

    #[test]
    fn apply_changes_only_the_selected_field() {
        let mut book = dune();
        book.apply(BookUpdate::Genre("Classic".to_string()));
        book.apply(BookUpdate::Read(true));

        assert_eq!(book.genre, "Classic");
        assert!(book.read);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, "1965");
    }

    #[test]
    fn parse_yes_only_accepts_yes() {
        assert!(parse_yes(" YES \n"));
        assert!(parse_yes("yes"));
        assert!(!parse_yes("y"));
        assert!(!parse_yes("no"));
        assert!(!parse_yes(""));
    }
}
