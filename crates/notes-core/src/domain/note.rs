use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Note entity - a persisted title/content record.
///
/// Timestamps are zone-less, matching the `TIMESTAMP` columns they are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub date_created: NaiveDateTime,
    pub date_modified: NaiveDateTime,
}

/// Title and content supplied by a caller when creating or updating a note.
///
/// Both are optional: a missing value is handed to the store as `NULL`
/// and rejected there by the `NOT NULL` constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

impl Note {
    /// Build the `ILIKE` pattern used by substring search.
    ///
    /// A missing query becomes `%%`, which matches every row.
    pub fn search_pattern(query: Option<&str>) -> String {
        format!("%{}%", query.unwrap_or_default())
    }
}
