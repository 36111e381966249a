//! Shared constants for end-to-end tests

use library_server::Book;

/// Maximum time to wait for a spawned server to answer on `/`
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Per-request timeout of the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Builds a fully populated book with the given id and title
#[allow(dead_code)]
pub fn sample_book(id: i32, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "Jorge Luis Borges".to_string(),
        isbn: "978-0811216999".to_string(),
        publication_year: 1944,
        genre: "Short Stories".to_string(),
    }
}
