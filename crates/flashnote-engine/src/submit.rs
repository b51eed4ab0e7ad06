//! Creating notes and decks.
//!
//! A submission runs the local checks first, in a fixed order, and only
//! then sends anything. Any failure is reported as a notice and leaves the
//! draft untouched, so the user can fix it and try again.
//!
//! # Example
//!
//! ```no_run
//! use flashnote_engine::Engine;
//! use flashnote_engine::submit::EntryDraft;
//!
//! # async fn example() {
//! let engine = Engine::new();
//!
//! let draft = EntryDraft::new()
//!     .deck("Spanish")
//!     .template("Basic")
//!     .field("Front", "Hola")
//!     .field("Back", "Hello")
//!     .tag("greeting");
//!
//! if engine.entries().submit(&draft).await {
//!     println!("created");
//! }
//! # }
//! ```

use flashnote::{AnkiClient, Note, NoteBuilder};
use tracing::{debug, info, warn};

use crate::notice::{Notice, Notifier};
use crate::{Error, Result};

/// Number of leading fields that must be filled in.
pub const REQUIRED_FIELDS: usize = 2;

/// An entry as the user is editing it.
///
/// `None` for the deck or template means nothing is selected yet. Fields
/// are kept in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Selected deck.
    pub deck: Option<String>,
    /// Selected template.
    pub template: Option<String>,
    /// `(field name, value)` pairs in template order.
    pub fields: Vec<(String, String)>,
    /// Tags to attach.
    pub tags: Vec<String>,
}

impl EntryDraft {
    /// An empty draft with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a deck.
    pub fn deck(mut self, name: impl Into<String>) -> Self {
        self.deck = Some(name.into());
        self
    }

    /// Select a template.
    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// Append a field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Run the local checks, in order: a deck is selected, a template is
    /// selected, and the first [`REQUIRED_FIELDS`] fields are filled.
    ///
    /// This is a minimal completeness rule, not the template's own notion
    /// of required fields.
    pub fn validate(&self) -> Result<()> {
        self.checked_selection().map(|_| ())
    }

    /// Validate and build the note to send.
    ///
    /// Field values are passed through unchanged. Blank tags are dropped.
    pub fn to_note(&self) -> Result<Note> {
        let (deck, template) = self.checked_selection()?;

        let builder = self
            .fields
            .iter()
            .fold(NoteBuilder::new(deck, template), |builder, (name, value)| {
                builder.field(name.as_str(), value.as_str())
            });
        let tags = self
            .tags
            .iter()
            .filter(|tag| !tag.trim().is_empty())
            .map(String::as_str);

        Ok(builder.tags(tags).build())
    }

    fn checked_selection(&self) -> Result<(&str, &str)> {
        let deck = selection(&self.deck).ok_or_else(|| {
            Error::Validation("Select a deck before creating the note.".to_string())
        })?;
        let template = selection(&self.template).ok_or_else(|| {
            Error::Validation("Select a note type before creating the note.".to_string())
        })?;
        if self.fields.is_empty() {
            return Err(Error::Validation(
                "The selected note type has no fields.".to_string(),
            ));
        }
        for (name, value) in self.fields.iter().take(REQUIRED_FIELDS) {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "The field \"{}\" must be filled in.",
                    name
                )));
            }
        }
        Ok((deck, template))
    }
}

fn selection(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|name| !name.is_empty())
}

/// Note and deck creation workflow engine.
#[derive(Debug)]
pub struct EntryEngine<'a> {
    client: &'a AnkiClient,
    notifier: &'a dyn Notifier,
}

impl<'a> EntryEngine<'a> {
    pub(crate) fn new(client: &'a AnkiClient, notifier: &'a dyn Notifier) -> Self {
        Self { client, notifier }
    }

    /// Validate a draft and create the note.
    ///
    /// Returns `true` when Anki created the note. A failed local check
    /// returns `false` without sending anything; a failed request returns
    /// `false` with the error text in the notice.
    pub async fn submit(&self, draft: &EntryDraft) -> bool {
        let note = match draft.to_note() {
            Ok(note) => note,
            Err(e) => {
                debug!(error = %e, "Draft rejected");
                self.notifier.notify(Notice::error(e.to_string()));
                return false;
            }
        };

        debug!(deck = %note.deck_name, model = %note.model_name, "Adding note");
        match self.client.notes().add(&note).await {
            Ok(note_id) => {
                info!(note_id, deck = %note.deck_name, "Note created");
                self.notifier.notify(Notice::success("Note created successfully."));
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to add note");
                self.notifier.notify(Notice::error(format!(
                    "Failed to create the note: {}. Make sure Anki is running.",
                    e
                )));
                false
            }
        }
    }

    /// Create a deck.
    ///
    /// A blank name is rejected locally. Returns whether Anki created the
    /// deck, so a dialog knows whether to close.
    pub async fn create_deck(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            self.notifier.notify(Notice::error("Enter a name for the new deck."));
            return false;
        }

        debug!(name, "Creating deck");
        match self.client.decks().create(name).await {
            Ok(deck_id) => {
                info!(deck_id, name, "Deck created");
                self.notifier.notify(Notice::success(format!("Deck \"{}\" created.", name)));
                true
            }
            Err(e) => {
                warn!(error = %e, name, "Failed to create deck");
                self.notifier.notify(Notice::error(format!(
                    "Failed to create the deck: {}. Make sure Anki is running.",
                    e
                )));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft::new()
            .deck("Spanish")
            .template("Basic")
            .field("Front", "Hola")
            .field("Back", "Hello")
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_validation_order() {
        let err = EntryDraft::new().validate().unwrap_err();
        assert!(err.to_string().contains("deck"));

        let err = EntryDraft::new().deck("Spanish").validate().unwrap_err();
        assert!(err.to_string().contains("note type"));

        let err = EntryDraft::new().deck("").template("Basic").validate().unwrap_err();
        assert!(err.to_string().contains("deck"));
    }

    #[test]
    fn test_only_first_two_fields_are_required() {
        let ok = draft().field("Extra", "");
        assert!(ok.validate().is_ok());

        let missing_second = EntryDraft::new()
            .deck("Spanish")
            .template("Basic")
            .field("Front", "Hola")
            .field("Back", "   ");
        let err = missing_second.validate().unwrap_err();
        assert!(err.to_string().contains("Back"));
    }

    #[test]
    fn test_single_field_template() {
        let draft = EntryDraft::new().deck("D").template("T").field("Text", "x");
        assert!(draft.validate().is_ok());

        let draft = EntryDraft::new().deck("D").template("T");
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_to_note_drops_blank_tags() {
        let note = draft().tag("greeting").tag(" ").to_note().unwrap();
        assert_eq!(note.deck_name, "Spanish");
        assert_eq!(note.model_name, "Basic");
        assert_eq!(note.fields["Front"], "Hola");
        assert_eq!(note.tags, vec!["greeting"]);
    }
}
