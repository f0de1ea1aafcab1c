//! Runtime configuration for the catalog.
//!
//! # Responsibility
//! - Resolve the data file location and logging settings in one place.
//!
//! # Invariants
//! - `log_dir` is always absolute, as required by `init_logging`.
//! - The data file defaults to `books_data.json` in the base directory.

use crate::logging::default_log_level;
use crate::storage::DEFAULT_DATA_FILE_NAME;
use std::path::{Path, PathBuf};

const LOG_DIR_APP_NAME: &str = "book_catalog";

/// Resolved locations and levels used at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON document holding the collection.
    pub data_file: PathBuf,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl CatalogConfig {
    /// Builds the default configuration rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            data_file: base_dir.as_ref().join(DEFAULT_DATA_FILE_NAME),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
        }
    }

    /// Builds the default configuration for the process working directory.
    ///
    /// # Errors
    /// - Returns the I/O error when the working directory is unavailable.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn with_log_level(mut self, log_level: &'static str) -> Self {
        self.log_level = log_level;
        self
    }
}

fn default_log_dir() -> PathBuf {
    let temp = std::env::temp_dir();
    let base = if temp.is_absolute() {
        temp
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&temp))
            .unwrap_or(temp)
    };
    base.join(LOG_DIR_APP_NAME).join("logs")
}
