//! DTOs for the save URL endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to save a URL under a short alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-chosen alias. When absent, a random alias is
    /// generated. Aliases are case-sensitive.
    #[validate(length(min = 3, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

/// Response for a successfully saved URL.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: i64,
    pub alias: String,
    pub short_url: String,
}
