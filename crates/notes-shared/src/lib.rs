//! # Notes Shared
//!
//! Wire types shared between the notes server and its clients.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, HealthResponse, SuccessResponse};
