//! The library service operations.

use super::{Book, BookStore, LibraryError};
use std::sync::Arc;
use tracing::info;

/// The five catalog operations, one per store primitive.
///
/// Implementations must be usable from many request tasks at once.
pub trait LibraryService: Send + Sync {
    /// Stores a new book. Fails with [`LibraryError::AlreadyExists`] if the
    /// id is already in use.
    fn create_book(&self, book: Book) -> Result<Book, LibraryError>;

    fn get_book(&self, id: i32) -> Result<Book, LibraryError>;

    /// Replaces the whole record with the same id. Not a partial patch.
    fn update_book(&self, book: Book) -> Result<Book, LibraryError>;

    fn delete_book(&self, id: i32) -> Result<bool, LibraryError>;

    /// Never fails; the result may be empty and is in no particular order.
    fn list_books(&self) -> Result<Vec<Book>, LibraryError>;
}

/// [`LibraryService`] backed by an in-memory [`BookStore`].
pub struct StoreLibraryService {
    store: Arc<BookStore>,
}

impl StoreLibraryService {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }
}

impl LibraryService for StoreLibraryService {
    fn create_book(&self, book: Book) -> Result<Book, LibraryError> {
        self.store.insert(book.clone())?;
        info!("Book added: {:?}", book);
        Ok(book)
    }

    fn get_book(&self, id: i32) -> Result<Book, LibraryError> {
        self.store.get(id)
    }

    fn update_book(&self, book: Book) -> Result<Book, LibraryError> {
        self.store.replace(book.clone())?;
        info!("Book updated: {:?}", book);
        Ok(book)
    }

    fn delete_book(&self, id: i32) -> Result<bool, LibraryError> {
        self.store.remove(id)?;
        info!("Book deleted: {}", id);
        Ok(true)
    }

    fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
        Ok(self.store.list_all())
    }
}
