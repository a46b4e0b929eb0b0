//! Idempotent bootstrap of the `notes` table.

use sea_orm::{ConnectionTrait, DbConn, DbErr};

/// DDL run at startup. Safe to repeat.
pub const CREATE_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    date_modified TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)"#;

/// Create the `notes` table if it does not exist yet.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    db.execute_unprepared(CREATE_NOTES_TABLE).await?;
    tracing::info!("Database schema ready");
    Ok(())
}
