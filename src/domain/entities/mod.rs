//! Core business data structures.

pub mod url;

pub use url::UrlRecord;
