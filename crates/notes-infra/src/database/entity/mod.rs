//! SeaORM entities.

pub mod note;
