//! Pre-filling the entry form.
//!
//! Turns extracted [`NoteParameters`] into what the form should show,
//! checked against the stored [`CatalogSnapshot`]. Names must match the
//! catalog exactly to be pre-selected, and only fields the selected
//! template defines are filled. Nothing is invented.

use crate::catalog::CatalogSnapshot;
use crate::extract::NoteParameters;
use crate::submit::EntryDraft;

/// One input of the form: a template field and its pre-filled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    /// Field name as the template defines it.
    pub name: String,
    /// Pre-filled value, if the parameters had one.
    pub value: Option<String>,
}

/// The initial state of the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    /// Pre-selected deck, if the requested one exists.
    pub deck: Option<String>,
    /// Pre-selected template, if the requested one exists.
    pub template: Option<String>,
    /// Pre-filled tags.
    pub tags: Vec<String>,
    /// One slot per field of the selected template, in template order.
    /// Empty while no template is selected.
    pub fields: Vec<FieldSlot>,
}

impl Prefill {
    /// Resolve parameters against the catalog.
    ///
    /// `None` parameters give an empty form.
    ///
    /// # Example
    ///
    /// ```
    /// use flashnote_engine::catalog::{CatalogSnapshot, DeckEntry};
    /// use flashnote_engine::extract::NoteParameters;
    /// use flashnote_engine::prefill::Prefill;
    ///
    /// let snapshot = CatalogSnapshot {
    ///     decks: vec![DeckEntry { name: "Biology".into(), id: 1 }],
    ///     templates: vec![],
    /// };
    /// let params = NoteParameters {
    ///     deck: Some("biology".into()),
    ///     ..Default::default()
    /// };
    ///
    /// let prefill = Prefill::resolve(Some(&params), &snapshot);
    /// assert_eq!(prefill.deck, None);
    /// ```
    pub fn resolve(params: Option<&NoteParameters>, snapshot: &CatalogSnapshot) -> Self {
        let Some(params) = params else {
            return Self::default();
        };

        let deck = params
            .deck
            .as_deref()
            .and_then(|name| snapshot.deck(name))
            .map(|deck| deck.name.clone());
        let template = params
            .template
            .as_deref()
            .and_then(|name| snapshot.template(name))
            .map(|template| template.name.clone());
        let fields = template
            .as_deref()
            .map(|name| field_slots(snapshot, name, Some(params)))
            .unwrap_or_default();

        Self {
            deck,
            template,
            tags: params.tags.clone(),
            fields,
        }
    }

    /// Turn the pre-filled form into an editable draft.
    ///
    /// Slots without a value become empty strings.
    pub fn into_draft(self) -> EntryDraft {
        EntryDraft {
            deck: self.deck,
            template: self.template,
            fields: self
                .fields
                .into_iter()
                .map(|slot| (slot.name, slot.value.unwrap_or_default()))
                .collect(),
            tags: self.tags,
        }
    }
}

/// The form inputs for `template`, pre-filled from `params`.
///
/// Used again whenever the user picks another template. An unknown template
/// gives no slots.
pub fn field_slots(
    snapshot: &CatalogSnapshot,
    template: &str,
    params: Option<&NoteParameters>,
) -> Vec<FieldSlot> {
    let Some(template) = snapshot.template(template) else {
        return Vec::new();
    };

    template
        .fields
        .iter()
        .map(|name| FieldSlot {
            name: name.clone(),
            value: params.and_then(|p| p.field(name)).map(str::to_string),
        })
        .collect()
}
