//! The `addNote` payload.

use std::collections::HashMap;

use serde::Serialize;

/// A note as `addNote` expects it.
///
/// Field values are sent exactly as given; Anki treats them as HTML. Field
/// names must match the note type's field names exactly. An empty tag list
/// is left out of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Tags for the note.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Builds a [`Note`].
///
/// ```
/// use flashnote::NoteBuilder;
///
/// let note = NoteBuilder::new("Spanish", "Basic")
///     .field("Front", "Hola")
///     .field("Back", "Hello")
///     .tags(["greeting", "lang::es"])
///     .build();
///
/// assert_eq!(note.fields["Back"], "Hello");
/// assert_eq!(note.tags, vec!["greeting", "lang::es"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteBuilder {
    deck_name: String,
    model_name: String,
    fields: HashMap<String, String>,
    tags: Vec<String>,
}

impl NoteBuilder {
    /// Start a note for `deck` using note type `model`.
    pub fn new(deck: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            deck_name: deck.into(),
            model_name: model.into(),
            ..Default::default()
        }
    }

    /// Set a field value. Setting the same field again replaces it.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Append a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append several tags.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Note {
        Note {
            deck_name: self.deck_name,
            model_name: self.model_name,
            fields: self.fields,
            tags: self.tags,
        }
    }
}
