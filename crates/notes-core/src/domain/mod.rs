//! Domain entities - the core business objects.

mod note;

pub use note::{Note, NoteFields};
