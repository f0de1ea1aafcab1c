//! Menu choices and their text parsing.

use book_catalog_core::SearchField;

pub const MENU_HEADER: &str = "📚 Welcome to the Book Collection Application!📚";

pub const MENU_LINES: [&str; 7] = [
    "1. Add a new book",
    "2. Remove a book",
    "3. Search for book",
    "4. Update book details",
    "5. Display all books",
    "6. View reading progress",
    "7. Exit",
];

/// Top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    Update,
    Display,
    Progress,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Search),
            "4" => Some(Self::Update),
            "5" => Some(Self::Display),
            "6" => Some(Self::Progress),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Field picked in the update sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl UpdateField {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Title),
            "2" => Some(Self::Author),
            "3" => Some(Self::Year),
            "4" => Some(Self::Genre),
            "5" => Some(Self::Read),
            _ => None,
        }
    }
}

/// Maps the search sub-menu answer; anything but 1 or 2 searches both fields.
pub fn parse_search_field(input: &str) -> SearchField {
    match input.trim() {
        "1" => SearchField::Title,
        "2" => SearchField::Author,
        _ => SearchField::Any,
    }
}
