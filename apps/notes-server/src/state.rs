//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbErr;

use notes_core::ports::NoteRepository;
use notes_infra::database::ensure_schema;
use notes_infra::{DatabaseConfig, DatabaseConnections, PostgresNoteRepository};

/// Shared application state.
///
/// Holds the repository explicitly; there is no process-wide pool.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// Open the pool, make sure the `notes` table exists and wrap it in a repository.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connections = DatabaseConnections::init(config).await?;
        ensure_schema(&connections.main).await?;

        let repo = PostgresNoteRepository::new(connections.main);
        tracing::info!("Application state initialized");

        Ok(Self::new(Arc::new(repo)))
    }
}
