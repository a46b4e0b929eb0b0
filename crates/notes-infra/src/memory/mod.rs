//! In-memory note repository - a stand-in store for handler tests.
//!
//! Mirrors the PostgreSQL semantics closely enough to exercise the HTTP layer:
//! serial ids, `NOT NULL` rejection, `ILIKE` matching and ordering by `date_modified`.
//! Data is lost when the value is dropped.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use notes_core::RepoError;
use notes_core::domain::{Note, NoteFields};
use notes_core::ports::NoteRepository;

#[derive(Default)]
struct Table {
    rows: Vec<Note>,
    last_id: i32,
}

/// In-memory note repository using an async RwLock.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    table: RwLock<Table>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn require(column: &str, value: Option<String>) -> Result<String, RepoError> {
        value.ok_or_else(|| {
            RepoError::Constraint(format!(
                "null value in column \"{column}\" of relation \"notes\" violates not-null constraint"
            ))
        })
    }

    fn sorted(mut notes: Vec<Note>) -> Vec<Note> {
        notes.sort_by(|a, b| {
            b.date_modified
                .cmp(&a.date_modified)
                .then_with(|| b.id.cmp(&a.id))
        });
        notes
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>, RepoError> {
        let table = self.table.read().await;
        Ok(Self::sorted(table.rows.clone()))
    }

    async fn create(&self, fields: NoteFields) -> Result<Note, RepoError> {
        let title = Self::require("title", fields.title)?;
        let content = Self::require("content", fields.content)?;

        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now().naive_utc();
        let note = Note {
            id: table.last_id,
            title,
            content,
            date_created: now,
            date_modified: now,
        };
        table.rows.push(note.clone());

        Ok(note)
    }

    async fn update(&self, id: i32, fields: NoteFields) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        // No matching row means no constraint is checked
        let Some(note) = table.rows.iter_mut().find(|n| n.id == id) else {
            return Ok(0);
        };

        let title = Self::require("title", fields.title)?;
        let content = Self::require("content", fields.content)?;

        note.title = title;
        note.content = content;
        note.date_modified = Utc::now().naive_utc();

        Ok(1)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|n| n.id != id);

        Ok((before - table.rows.len()) as u64)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<Note>, RepoError> {
        let table = self.table.read().await;
        let matches = table
            .rows
            .iter()
            .filter(|n| ilike(&n.title, pattern) || ilike(&n.content, pattern))
            .cloned()
            .collect();

        Ok(Self::sorted(matches))
    }
}

/// Case-insensitive SQL `LIKE`: `%` matches any run of characters, `_` exactly one.
fn ilike(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();

    // matched[j]: pattern[..j] matches the text consumed so far
    let mut matched = vec![false; pattern.len() + 1];
    matched[0] = true;
    for j in 1..=pattern.len() {
        matched[j] = matched[j - 1] && pattern[j - 1] == '%';
    }

    for c in text {
        let mut next = vec![false; pattern.len() + 1];
        for j in 1..=pattern.len() {
            next[j] = match pattern[j - 1] {
                '%' => next[j - 1] || matched[j],
                '_' => matched[j - 1],
                p => matched[j - 1] && p == c,
            };
        }
        matched = next;
    }

    matched[pattern.len()]
}
