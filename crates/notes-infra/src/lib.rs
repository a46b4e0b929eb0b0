//! # Notes Infrastructure
//!
//! Concrete implementations of the ports defined in `notes-core`.
//!
//! - [`database`] - PostgreSQL connection pool, schema bootstrap and repository via SeaORM
//! - [`memory`] - in-memory repository used as a test double

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, DatabaseConnections, PostgresNoteRepository};
pub use memory::InMemoryNoteRepository;
