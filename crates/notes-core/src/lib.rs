//! # Notes Core
//!
//! The domain layer of the notes service.
//! This crate holds the `Note` entity and the repository port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
