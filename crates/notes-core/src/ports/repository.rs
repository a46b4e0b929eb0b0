use async_trait::async_trait;

use crate::domain::{Note, NoteFields};
use crate::error::RepoError;

/// Note repository - one SQL statement per method.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes, most recently modified first.
    async fn list(&self) -> Result<Vec<Note>, RepoError>;

    /// Insert a note with both timestamps set to the store's current time.
    async fn create(&self, fields: NoteFields) -> Result<Note, RepoError>;

    /// Replace title and content and refresh `date_modified`.
    ///
    /// Returns the number of rows affected; zero means no note had this id.
    async fn update(&self, id: i32, fields: NoteFields) -> Result<u64, RepoError>;

    /// Hard-delete a note. Returns the number of rows affected.
    async fn delete(&self, id: i32) -> Result<u64, RepoError>;

    /// Notes whose title or content matches `pattern` case-insensitively,
    /// most recently modified first. `pattern` uses SQL `LIKE` syntax.
    async fn search(&self, pattern: &str) -> Result<Vec<Note>, RepoError>;
}
