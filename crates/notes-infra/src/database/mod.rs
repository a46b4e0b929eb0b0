//! Database connection management and the PostgreSQL note repository.

mod connections;
mod error;
mod postgres_repo;
mod schema;

pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use postgres_repo::PostgresNoteRepository;
pub use schema::ensure_schema;
