//! In-memory book table guarded by a single mutex.
//!
//! Every primitive takes the lock once and holds it for its whole
//! check-then-write sequence, so two concurrent inserts of the same id can
//! never both observe the key as absent. No primitive calls another while
//! holding the lock.

use super::{Book, LibraryError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
pub struct BookStore {
    books: Mutex<HashMap<i32, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Primitives never leave the map half-written, so a panic elsewhere while
    // the guard was held does not invalidate its contents.
    fn books(&self) -> MutexGuard<'_, HashMap<i32, Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, book: Book) -> Result<(), LibraryError> {
        let mut books = self.books();
        if books.contains_key(&book.id) {
            return Err(LibraryError::AlreadyExists(book.id));
        }
        books.insert(book.id, book);
        Ok(())
    }

    pub fn get(&self, id: i32) -> Result<Book, LibraryError> {
        self.books()
            .get(&id)
            .cloned()
            .ok_or(LibraryError::NotFound(id))
    }

    pub fn replace(&self, book: Book) -> Result<(), LibraryError> {
        let mut books = self.books();
        match books.get_mut(&book.id) {
            Some(existing) => {
                *existing = book;
                Ok(())
            }
            None => Err(LibraryError::NotFound(book.id)),
        }
    }

    pub fn remove(&self, id: i32) -> Result<(), LibraryError> {
        self.books()
            .remove(&id)
            .map(|_| ())
            .ok_or(LibraryError::NotFound(id))
    }

    /// Snapshot of every stored book, in no particular order.
    pub fn list_all(&self) -> Vec<Book> {
        self.books().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.books().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
