//! Interactive menu loop.
//!
//! # Responsibility
//! - Print the menu, read one choice, run one catalog operation, repeat.
//! - Turn catalog outcomes into user-facing lines.
//!
//! # Invariants
//! - Catalog errors never end the loop; only `Exit` or closed input do.
//! - Each action prompts for its fields in a fixed order.

use crate::console::Console;
use crate::format::{book_details, book_lines, progress_lines};
use crate::menu::{parse_search_field, MenuChoice, UpdateField, MENU_HEADER, MENU_LINES};
use book_catalog_core::{
    parse_yes, Book, BookCatalog, BookRepository, BookUpdate, CatalogError, CatalogResult,
};
use log::{debug, info};
use std::io::{self, BufRead, ErrorKind, Write};

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const NOT_FOUND: &str = "Book not found in the collection.";
const NO_BOOKS: &str = "No books available in the collection.";

/// Runs the menu loop until the user exits or input is closed.
///
/// # Errors
/// - Returns console I/O errors other than end of input.
pub fn run<R, W, B>(catalog: &mut BookCatalog<B>, console: &mut Console<R, W>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    B: BookRepository,
{
    info!("event=app_loop module=cli status=start count={}", catalog.len());
    let outcome = menu_loop(catalog, console);
    match outcome {
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
            info!("event=app_loop module=cli status=ok exit=eof");
            Ok(())
        }
        Err(err) => Err(err),
        Ok(()) => {
            info!("event=app_loop module=cli status=ok exit=menu");
            Ok(())
        }
    }
}

fn menu_loop<R: BufRead, W: Write, B: BookRepository>(
    catalog: &mut BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.say(MENU_HEADER)?;
        for line in MENU_LINES {
            console.say(line)?;
        }

        let answer = console.prompt("Enter your choice: ")?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            debug!("event=menu_choice module=cli status=invalid");
            console.say(INVALID_CHOICE)?;
            continue;
        };
        debug!("event=menu_choice module=cli status=ok choice={choice:?}");

        match choice {
            MenuChoice::Add => add_book(catalog, console)?,
            MenuChoice::Remove => remove_book(catalog, console)?,
            MenuChoice::Search => search_books(catalog, console)?,
            MenuChoice::Update => update_book(catalog, console)?,
            MenuChoice::Display => display_books(catalog, console)?,
            MenuChoice::Progress => show_progress(catalog, console)?,
            MenuChoice::Exit => {
                console.say("Exiting the application...")?;
                return Ok(());
            }
        }
    }
}

fn add_book<R: BufRead, W: Write, B: BookRepository>(
    catalog: &mut BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let title = console.prompt("Enter book title: ")?;
    let author = console.prompt("Enter author: ")?;
    let year = console.prompt("Enter publication year: ")?;
    let genre = console.prompt("Enter genre: ")?;
    let read = parse_yes(&console.prompt("Have you read this book? (yes/no): ")?);

    let book = Book::new(title, author, year, genre).with_read(read);
    report(console, catalog.add_book(book), "Book added successfully!\n")
}

fn remove_book<R: BufRead, W: Write, B: BookRepository>(
    catalog: &mut BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let title = console.prompt("Enter the title of the book to remove: ")?;
    report(
        console,
        catalog.remove_by_title(&title),
        "Book removed successfully!\n",
    )
}

fn search_books<R: BufRead, W: Write, B: BookRepository>(
    catalog: &BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let field = parse_search_field(
        &console.prompt("Search by:\n1 - Title\n2 - Author\nEnter your choice: ")?,
    );
    let query = console.prompt("Enter the search term: ")?;

    let found = catalog.find_by_text(&query, field);
    if found.is_empty() {
        return console.say("No books found matching the search criteria.");
    }

    console.say("Matching books:")?;
    for line in book_lines(found) {
        console.say(line)?;
    }
    Ok(())
}

fn update_book<R: BufRead, W: Write, B: BookRepository>(
    catalog: &mut BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let title = console.prompt("Enter the title of the book to update: ")?;
    let Some(current) = catalog.find_by_title(&title) else {
        return console.say(NOT_FOUND);
    };

    console.say("Current book details:")?;
    for line in book_details(current) {
        console.say(line)?;
    }

    let field = console.prompt(
        "What would you like to update?\n1 - Title\n2 - Author\n3 - Year\n4 - Genre\n5 - Read Status\nEnter your choice: ",
    )?;
    let Some(field) = UpdateField::parse(&field) else {
        return console.say(INVALID_CHOICE);
    };

    let update = match field {
        UpdateField::Title => BookUpdate::Title(console.prompt("Enter the new title: ")?),
        UpdateField::Author => BookUpdate::Author(console.prompt("Enter the new author: ")?),
        UpdateField::Year => BookUpdate::Year(console.prompt("Enter the new year: ")?),
        UpdateField::Genre => BookUpdate::Genre(console.prompt("Enter the new genre: ")?),
        UpdateField::Read => BookUpdate::Read(parse_yes(
            &console.prompt("Enter the new read status (yes/no): ")?,
        )),
    };

    report(
        console,
        catalog.update_by_title(&title, update),
        "Book updated successfully!\n",
    )
}

fn display_books<R: BufRead, W: Write, B: BookRepository>(
    catalog: &BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if catalog.is_empty() {
        return console.say(NO_BOOKS);
    }

    console.say("All books in the collection:")?;
    for line in book_lines(catalog.books()) {
        console.say(line)?;
    }
    Ok(())
}

fn show_progress<R: BufRead, W: Write, B: BookRepository>(
    catalog: &BookCatalog<B>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(progress) = catalog.reading_progress() else {
        return console.say(NO_BOOKS);
    };

    for line in progress_lines(&progress) {
        console.say(line)?;
    }
    Ok(())
}

/// Prints the outcome of a mutation.
///
/// A failed save still reports success afterwards, since the in-memory
/// change has been applied.
fn report<R: BufRead, W: Write, T>(
    console: &mut Console<R, W>,
    result: CatalogResult<T>,
    success: &str,
) -> io::Result<()> {
    match result {
        Ok(_) => console.say(success),
        Err(CatalogError::NotFound(_)) => console.say(NOT_FOUND),
        Err(CatalogError::Storage(err)) => {
            console.say(format!("Error saving to file: {err}"))?;
            console.say(success)
        }
    }
}
