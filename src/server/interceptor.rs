//! Instrumentation decorator around a [`LibraryService`].
//!
//! Every call is timed and counted under its operation name; the wrapped
//! service's result is handed back untouched.

use super::metrics::{LibraryMetrics, OUTCOME_OK};
use crate::library::{Book, LibraryError, LibraryService, Operation};
use std::time::Instant;

pub struct InstrumentedService<S> {
    inner: S,
    metrics: LibraryMetrics,
}

impl<S: LibraryService> InstrumentedService<S> {
    pub fn new(inner: S, metrics: LibraryMetrics) -> Self {
        Self { inner, metrics }
    }

    fn observe<T>(
        &self,
        operation: Operation,
        call: impl FnOnce(&S) -> Result<T, LibraryError>,
    ) -> Result<T, LibraryError> {
        let start = Instant::now();
        let result = call(&self.inner);
        let code = match &result {
            Ok(_) => OUTCOME_OK,
            Err(err) => err.code(),
        };
        self.metrics.record(operation, code, start.elapsed());
        result
    }
}

impl<S: LibraryService> LibraryService for InstrumentedService<S> {
    fn create_book(&self, book: Book) -> Result<Book, LibraryError> {
        self.observe(Operation::CreateBook, |s| s.create_book(book))
    }

    fn get_book(&self, id: i32) -> Result<Book, LibraryError> {
        self.observe(Operation::GetBook, |s| s.get_book(id))
    }

    fn update_book(&self, book: Book) -> Result<Book, LibraryError> {
        self.observe(Operation::UpdateBook, |s| s.update_book(book))
    }

    fn delete_book(&self, id: i32) -> Result<bool, LibraryError> {
        self.observe(Operation::DeleteBook, |s| s.delete_book(id))
    }

    fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
        self.observe(Operation::ListBooks, |s| s.list_books())
    }
}
