//! Flat-file storage for the book collection.
//!
//! # Responsibility
//! - Read the whole collection from one JSON document.
//! - Rewrite the whole document on every save.
//!
//! # Invariants
//! - A missing file loads as an empty collection, never as an error.
//! - A malformed file is reported as `StorageError::Corrupt`, never masked.
//! - Saves go through a sibling temp file and a rename, so a failed write
//!   leaves the previous document in place.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;

pub use file::{load_books, save_books, DEFAULT_DATA_FILE_NAME};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    /// Filesystem failure while reading or writing the document.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document exists but is not a valid book list.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The in-memory collection could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::Corrupt { path, source } => {
                write!(f, "`{}` is not a valid book list: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode book list: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}
