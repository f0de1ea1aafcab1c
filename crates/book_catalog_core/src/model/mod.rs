//! Domain model for the reading list.
//!
//! # Responsibility
//! - Define the book record persisted to and loaded from the catalog file.
//! - Keep matching rules (title equality, substring search) in one place.
//!
//! # Invariants
//! - The collection is an ordered `Vec<Book>`; no uniqueness on title.

pub mod book;
