//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
