//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`.
///
/// Fields are not validated here; absent ones reach the store as `NULL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Query string of `GET /api/notes/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_request_missing_fields() {
        let req: NoteRequest = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("A"));
        assert!(req.content.is_none());

        let empty: NoteRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.title.is_none());
    }
}
