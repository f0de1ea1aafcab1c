//! JSON document read/write.
//!
//! # Responsibility
//! - Decode the book list from disk, treating "not found" as empty.
//! - Encode with 4-space indentation and replace the target via rename.
//! - Emit `storage_load` / `storage_save` logging events with duration.

use super::{StorageError, StorageResult};
use crate::model::book::Book;
use log::{debug, error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name used when no explicit location is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "books_data.json";

const TEMP_SUFFIX: &str = ".tmp";
const JSON_INDENT: &[u8] = b"    ";

/// Loads the full book list from `path`.
///
/// # Errors
/// - `StorageError::Corrupt` when the file exists but does not decode.
/// - `StorageError::Io` for read failures other than "not found".
pub fn load_books(path: &Path) -> StorageResult<Vec<Book>> {
    let started_at = Instant::now();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=storage_load module=storage status=ok source=absent count=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=storage_load module=storage status=error error_code=read_failed error={}",
                err
            );
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match serde_json::from_str::<Vec<Book>>(&text) {
        Ok(books) => {
            info!(
                "event=storage_load module=storage status=ok source=file count={} duration_ms={}",
                books.len(),
                started_at.elapsed().as_millis()
            );
            Ok(books)
        }
        Err(err) => {
            error!(
                "event=storage_load module=storage status=error error_code=corrupt line={} column={}",
                err.line(),
                err.column()
            );
            Err(StorageError::Corrupt {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Replaces the document at `path` with `books`.
///
/// Parent directories are created when missing. The temp file is removed
/// again if the final rename fails.
///
/// # Errors
/// - `StorageError::Encode` when serialization fails.
/// - `StorageError::Io` when any filesystem step fails.
pub fn save_books(path: &Path, books: &[Book]) -> StorageResult<()> {
    let started_at = Instant::now();
    let bytes = encode_pretty(books)?;

    match write_replace(path, &bytes) {
        Ok(()) => {
            info!(
                "event=storage_save module=storage status=ok count={} bytes={} duration_ms={}",
                books.len(),
                bytes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=storage_save module=storage status=error error_code=write_failed duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn encode_pretty(books: &[Book]) -> StorageResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    books
        .serialize(&mut serializer)
        .map_err(StorageError::Encode)?;
    Ok(buffer)
}

fn write_replace(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let temp_path = temp_path_for(path);
    debug!(
        "event=storage_save module=storage status=start temp={}",
        temp_path.display()
    );

    {
        let mut file = File::create(&temp_path).map_err(io_err)?;
        let written = file.write_all(bytes).and_then(|()| file.sync_all());
        if let Err(err) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(io_err(err));
        }
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_err(err));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_DATA_FILE_NAME));
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}
