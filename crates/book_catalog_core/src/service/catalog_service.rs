//! Book catalog use-case service.
//!
//! # Responsibility
//! - Own the in-memory collection for the lifetime of the process.
//! - Persist the full collection after every successful mutation.
//! - Provide title lookup, text search and reading-progress projections.
//!
//! # Invariants
//! - Mutations by title act on the first case-insensitive match only.
//! - A failed save never rolls back or corrupts the in-memory change.
//! - Not-found mutations leave the collection untouched and skip the save.

use crate::model::book::{Book, BookUpdate, SearchField};
use crate::repo::book_repo::BookRepository;
use crate::storage::{StorageError, StorageResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum CatalogError {
    /// No book title equals the requested title (ignoring case).
    NotFound(String),
    /// The in-memory change was applied but writing the file failed.
    Storage(StorageError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(title) => write!(f, "book not found: `{title}`"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for CatalogError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Read/total counters for a non-empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingProgress {
    pub total: usize,
    pub read: usize,
}

impl ReadingProgress {
    /// Share of read books, in percent.
    pub fn percent_read(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.read as f64 / self.total as f64 * 100.0
    }
}

/// In-memory book collection synchronized with a repository.
pub struct BookCatalog<R: BookRepository> {
    repo: R,
    books: Vec<Book>,
}

impl<R: BookRepository> BookCatalog<R> {
    /// Loads the stored collection and wraps it in a catalog.
    ///
    /// An absent storage location yields an empty catalog.
    ///
    /// # Errors
    /// - Returns the repository error for unreadable or corrupt storage.
    pub fn open(repo: R) -> StorageResult<Self> {
        let books = repo.load_books()?;
        info!(
            "event=catalog_open module=service status=ok count={}",
            books.len()
        );
        Ok(Self { repo, books })
    }

    /// Writes the full collection through the repository.
    pub fn save(&self) -> CatalogResult<()> {
        self.repo.save_books(&self.books).map_err(|err| {
            warn!(
                "event=catalog_save module=service status=error location={} error={}",
                self.repo.location().display(),
                err
            );
            CatalogError::Storage(err)
        })
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Appends `book` and persists.
    ///
    /// # Errors
    /// - `CatalogError::Storage` when the save fails; the book stays added.
    pub fn add_book(&mut self, book: Book) -> CatalogResult<()> {
        self.books.push(book);
        info!(
            "event=book_add module=service status=ok count={}",
            self.books.len()
        );
        self.save()
    }

    /// Removes the first book whose title matches and persists.
    ///
    /// # Errors
    /// - `CatalogError::NotFound` when nothing matches; nothing is saved.
    /// - `CatalogError::Storage` when the save fails; the book stays removed.
    pub fn remove_by_title(&mut self, title: &str) -> CatalogResult<Book> {
        let Some(index) = self.position_of(title) else {
            info!("event=book_remove module=service status=not_found");
            return Err(CatalogError::NotFound(title.to_string()));
        };

        let removed = self.books.remove(index);
        info!(
            "event=book_remove module=service status=ok index={} count={}",
            index,
            self.books.len()
        );
        self.save()?;
        Ok(removed)
    }

    /// Returns the first book whose title matches.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title_matches(title))
    }

    /// Returns every book whose `field` contains `query`, in collection order.
    pub fn find_by_text(&self, query: &str, field: SearchField) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.contains_text(query, field))
            .collect()
    }

    /// Applies `update` to the first book whose title matches and persists.
    ///
    /// Returns a copy of the updated record.
    ///
    /// # Errors
    /// - `CatalogError::NotFound` when nothing matches; nothing is saved.
    /// - `CatalogError::Storage` when the save fails; the change is kept.
    pub fn update_by_title(&mut self, title: &str, update: BookUpdate) -> CatalogResult<Book> {
        let Some(index) = self.position_of(title) else {
            info!("event=book_update module=service status=not_found");
            return Err(CatalogError::NotFound(title.to_string()));
        };

        let updated = {
            let book = &mut self.books[index];
            book.apply(update);
            book.clone()
        };
        info!(
            "event=book_update module=service status=ok index={}",
            index
        );
        self.save()?;
        Ok(updated)
    }

    /// Reading counters, or `None` when the catalog holds no books.
    pub fn reading_progress(&self) -> Option<ReadingProgress> {
        if self.books.is_empty() {
            return None;
        }
        Some(ReadingProgress {
            total: self.books.len(),
            read: self.books.iter().filter(|book| book.read).count(),
        })
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|book| book.title_matches(title))
    }
}

#[cfg(test)]
mod tests {
    use super::ReadingProgress;

    #[test]
    fn percent_read_is_a_plain_ratio() {
        let progress = ReadingProgress { total: 4, read: 1 };
        assert_eq!(progress.percent_read(), 25.0);
    }

    #[test]
    fn percent_read_of_zero_total_is_zero() {
        let progress = ReadingProgress { total: 0, read: 0 };
        assert_eq!(progress.percent_read(), 0.0);
    }
}
