//! Printed line shapes.

use book_catalog_core::{Book, ReadingProgress};

/// `1. Dune by Frank Herbert (1965) (Sci-Fi) - Not Read`
pub fn book_line(position: usize, book: &Book) -> String {
    let status = if book.read { "Read" } else { "Not Read" };
    format!(
        "{position}. {} by {} ({}) ({}) - {status}",
        book.title, book.author, book.year, book.genre
    )
}

/// Numbered lines starting at 1.
pub fn book_lines<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    books
        .into_iter()
        .enumerate()
        .map(|(index, book)| book_line(index + 1, book))
        .collect()
}

pub fn book_details(book: &Book) -> Vec<String> {
    vec![
        format!("Title: {}", book.title),
        format!("Author: {}", book.author),
        format!("Year: {}", book.year),
        format!("Genre: {}", book.genre),
        format!("Read: {}", if book.read { "Yes" } else { "No" }),
    ]
}

pub fn progress_lines(progress: &ReadingProgress) -> Vec<String> {
    vec![
        format!("Total books: {}", progress.total),
        format!("Books read: {}", progress.read),
        format!("Percentage of books read: {:.2}%", progress.percent_read()),
    ]
}
