use sea_orm::DbErr;

use notes_core::RepoError;

const NOT_NULL_VIOLATION: &str = "violates not-null constraint";

/// Classify a SeaORM error, keeping its message intact.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    let message = err.to_string();

    if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
        return RepoError::Connection(message);
    }

    if err.sql_err().is_some() || message.contains(NOT_NULL_VIOLATION) {
        RepoError::Constraint(message)
    } else {
        RepoError::Query(message)
    }
}
