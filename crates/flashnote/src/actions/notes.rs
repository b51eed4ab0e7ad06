//! Note-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use flashnote::{AnkiClient, NoteBuilder};
//!
//! # async fn example() -> flashnote::Result<()> {
//! let client = AnkiClient::new();
//!
//! let note = NoteBuilder::new("Default", "Basic")
//!     .field("Front", "Hello")
//!     .field("Back", "World")
//!     .tag("test")
//!     .build();
//!
//! let note_id = client.notes().add(&note).await?;
//! println!("Created note: {}", note_id);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::Note;

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct AddNoteParams<'a> {
    note: &'a Note,
}

impl<'a> NoteActions<'a> {
    /// Add a new note.
    ///
    /// Returns the ID of the created note. Anki rejects duplicates and notes
    /// whose first field is empty with an [`Error::AnkiConnect`](crate::Error::AnkiConnect).
    pub async fn add(&self, note: &Note) -> Result<i64> {
        self.client.invoke("addNote", AddNoteParams { note }).await
    }
}
