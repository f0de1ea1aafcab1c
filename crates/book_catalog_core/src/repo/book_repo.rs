//! Book repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable load/save APIs over one storage location.
//! - Keep path handling inside the persistence boundary.

use crate::model::book::Book;
use crate::storage::{load_books, save_books, StorageResult};
use std::path::{Path, PathBuf};

/// Repository interface for the book collection.
pub trait BookRepository {
    /// Loads every stored book in persisted order.
    fn load_books(&self) -> StorageResult<Vec<Book>>;
    /// Replaces the stored collection with `books`.
    fn save_books(&self, books: &[Book]) -> StorageResult<()>;
    /// Storage location, for diagnostics.
    fn location(&self) -> &Path;
}

/// Repository backed by one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load_books(&self) -> StorageResult<Vec<Book>> {
        load_books(&self.path)
    }

    fn save_books(&self, books: &[Book]) -> StorageResult<()> {
        save_books(&self.path, books)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
