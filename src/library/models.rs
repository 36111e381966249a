//! Catalog records and the request/response envelopes of the five operations.

use serde::{Deserialize, Serialize};

/// A single catalog entry. Every write replaces the whole record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i32,
    pub genre: String,
}

/// Body of CreateBook and UpdateBook requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    pub book: Book,
}

/// Body of CreateBook, GetBook and UpdateBook responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookResponse {
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
}

/// The operations exposed by the library service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateBook,
    GetBook,
    UpdateBook,
    DeleteBook,
    ListBooks,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreateBook,
        Operation::GetBook,
        Operation::UpdateBook,
        Operation::DeleteBook,
        Operation::ListBooks,
    ];

    /// RPC name, used as the `operation` metrics label.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateBook => "CreateBook",
            Operation::GetBook => "GetBook",
            Operation::UpdateBook => "UpdateBook",
            Operation::DeleteBook => "DeleteBook",
            Operation::ListBooks => "ListBooks",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
