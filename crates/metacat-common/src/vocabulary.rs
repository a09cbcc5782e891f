//! Localized source vocabulary.
//!
//! Feeds carry Latvian tokens for importance, category and the active flag.
//! The tables below are the only accepted spellings; lookups are exact
//! (after trimming) and unknown tokens are rejected, never defaulted.

use crate::error::ValidationError;
use crate::types::{Category, FileType, Importance};

/// Source token → canonical importance
pub const IMPORTANCE_TOKENS: &[(&str, Importance)] = &[
    ("zems", Importance::Low),
    ("vidējs", Importance::Medium),
    ("augsts", Importance::High),
    ("kritisks", Importance::Critical),
];

/// Source token → canonical category
pub const CATEGORY_TOKENS: &[(&str, Category)] = &[
    ("publisks", Category::Public),
    ("iekšējs", Category::Internal),
    ("ierobežotas pieejamības", Category::Restricted),
    ("konfidenciāls", Category::Confidential),
];

/// Source token → active flag
pub const ACTIVE_TOKENS: &[(&str, bool)] = &[("jā", true), ("nē", false)];

/// Map a source token through `table`.
///
/// Fails with [`ValidationError::UnknownToken`] naming `field`, the rejected
/// token and every accepted token, in table order.
pub fn map_token<T: Copy>(
    token: &str,
    table: &[(&str, T)],
    field: &'static str,
) -> Result<T, ValidationError> {
    let token = token.trim();
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
        .ok_or_else(|| ValidationError::UnknownToken {
            field,
            token: token.to_string(),
            allowed: allowed_tokens(table),
        })
}

/// Reverse lookup, used when writing feeds
pub fn token_for<T: Copy + PartialEq>(table: &[(&'static str, T)], value: T) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, candidate)| *candidate == value)
        .map(|(key, _)| *key)
}

/// Parse a file type; the set is closed and matching is case-sensitive.
pub fn parse_file_type(value: &str) -> Result<FileType, ValidationError> {
    let value = value.trim();
    value.parse().map_err(|_| ValidationError::InvalidFileType {
        value: value.to_string(),
        allowed: FileType::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn allowed_tokens<T>(table: &[(&str, T)]) -> String {
    table
        .iter()
        .map(|(key, _)| *key)
        .collect::<Vec<_>>()
        .join(", ")
}
