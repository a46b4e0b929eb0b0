//! PostgreSQL note repository.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DbConn, EntityTrait, QueryOrder, Statement,
};

use notes_core::RepoError;
use notes_core::domain::{Note, NoteFields};
use notes_core::ports::NoteRepository;

use super::entity::note::{self, Entity as NoteEntity};
use super::error::map_db_err;

pub(crate) const INSERT_NOTE: &str = "INSERT INTO notes (title, content, date_created, date_modified) \
     VALUES ($1, $2, NOW(), NOW()) RETURNING *";

pub(crate) const UPDATE_NOTE: &str =
    "UPDATE notes SET title = $1, content = $2, date_modified = NOW() WHERE id = $3";

pub(crate) const SEARCH_NOTES: &str = "SELECT * FROM notes WHERE title ILIKE $1 OR content ILIKE $1 \
     ORDER BY date_modified DESC";

/// PostgreSQL note repository.
///
/// Each method issues exactly one statement on a pooled connection.
pub struct PostgresNoteRepository {
    pub(crate) db: DbConn,
}

impl PostgresNoteRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn list(&self) -> Result<Vec<Note>, RepoError> {
        let result = NoteEntity::find()
            .order_by_desc(note::Column::DateModified)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, fields: NoteFields) -> Result<Note, RepoError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_NOTE,
            [fields.title.into(), fields.content.into()],
        );

        let model = NoteEntity::find()
            .from_raw_sql(stmt)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::Query("INSERT returned no row".to_string()))?;

        tracing::debug!(note_id = model.id, "Note created");
        Ok(model.into())
    }

    async fn update(&self, id: i32, fields: NoteFields) -> Result<u64, RepoError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            UPDATE_NOTE,
            [fields.title.into(), fields.content.into(), id.into()],
        );

        let result = self.db.execute(stmt).await.map_err(map_db_err)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepoError> {
        let result = NoteEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<Note>, RepoError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            SEARCH_NOTES,
            [pattern.into()],
        );

        let result = NoteEntity::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
