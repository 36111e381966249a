//! Book catalog domain: models, errors, the locked in-memory store and the
//! service operations built on top of it.

mod error;
mod models;
mod service;
mod store;

pub use error::LibraryError;
pub use models::{
    Book, BookRequest, BookResponse, DeleteBookResponse, ListBooksResponse, Operation,
};
pub use service::{LibraryService, StoreLibraryService};
pub use store::BookStore;
