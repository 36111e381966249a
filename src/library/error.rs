use thiserror::Error;

/// Client-side failures of catalog operations.
///
/// The in-memory store cannot fail on its own, so these are the only
/// outcomes besides success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("book with the given ID already exists: {0}")]
    AlreadyExists(i32),

    #[error("book not found: {0}")]
    NotFound(i32),
}

impl LibraryError {
    /// Outcome code used in responses and as a metrics label.
    pub fn code(&self) -> &'static str {
        match self {
            LibraryError::AlreadyExists(_) => "already_exists",
            LibraryError::NotFound(_) => "not_found",
        }
    }
}
