//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by the catalog.
//! - Isolate file format details from service orchestration.
//!
//! # Invariants
//! - `save_books` always receives the full collection, never a delta.

pub mod book_repo;
