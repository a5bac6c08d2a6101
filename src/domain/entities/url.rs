//! URL record entity representing a shortened URL mapping.

use serde::Serialize;

/// A persisted alias to URL mapping.
///
/// `id` is assigned monotonically by the store; `alias` is unique across all
/// records and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}
