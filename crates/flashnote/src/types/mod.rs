//! Domain types for AnkiConnect.
//!
//! This module contains the data structures exchanged with AnkiConnect.

mod named;
mod note;

pub use named::NamedIds;
pub use note::{Note, NoteBuilder};
