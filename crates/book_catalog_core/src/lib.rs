//! Core domain logic for the book catalog.
//! This crate owns the collection, its file storage and logging bootstrap.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::CatalogConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{parse_yes, Book, BookUpdate, SearchField};
pub use repo::book_repo::{BookRepository, JsonFileBookRepository};
pub use service::catalog_service::{BookCatalog, CatalogError, CatalogResult, ReadingProgress};
pub use storage::{StorageError, StorageResult, DEFAULT_DATA_FILE_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
