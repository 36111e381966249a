//! Library Server
//!
//! An in-memory book catalog served over HTTP, with every operation
//! instrumented for Prometheus.

pub mod config;
pub mod library;
pub mod server;

// Re-export commonly used types for convenience
pub use library::{Book, BookStore, LibraryError, LibraryService, StoreLibraryService};
pub use server::{run_server, InstrumentedService, RequestsLoggingLevel, ServerConfig};
