use book_catalog_core::storage::load_books;
use book_catalog_core::Book;

#[test]
fn book_new_starts_unread() {
    let book = Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi");

    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.year, "1965");
    assert_eq!(book.genre, "Sci-Fi");
    assert!(!book.read);
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new("Emma", "Jane Austen", "1815", "Novel").with_read(true);

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["title"], "Emma");
    assert_eq!(json["author"], "Jane Austen");
    assert_eq!(json["year"], "1815");
    assert_eq!(json["genre"], "Novel");
    assert_eq!(json["read"], true);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn deserialize_rejects_numeric_year() {
    let value = serde_json::json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "year": 1965,
        "genre": "Sci-Fi",
        "read": false
    });

    assert!(serde_json::from_value::<Book>(value).is_err());
}

#[test]
fn existing_indented_document_loads_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books_data.json");
    std::fs::write(
        &path,
        r#"[
    {
        "title": "Dune",
        "author": "Frank Herbert",
        "year": "1965",
        "genre": "Sci-Fi",
        "read": false
    },
    {
        "title": "Emma",
        "author": "Jane Austen",
        "year": "1815",
        "genre": "Novel",
        "read": true
    }
]"#,
    )
    .unwrap();

    let books = load_books(&path).unwrap();
    assert_eq!(
        books,
        vec![
            Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi"),
            Book::new("Emma", "Jane Austen", "1815", "Novel").with_read(true),
        ]
    );
}
