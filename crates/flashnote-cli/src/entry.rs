//! Building an entry from a pre-filled form and command-line overrides.

use clap::Args;
use flashnote_engine::catalog::CatalogSnapshot;
use flashnote_engine::extract::NoteParameters;
use flashnote_engine::notice::{Notice, Notifier};
use flashnote_engine::prefill::{Prefill, field_slots};
use flashnote_engine::submit::EntryDraft;
use tracing::warn;

/// Values given on the command line, applied on top of the pre-fill.
#[derive(Debug, Default, Clone, Args)]
pub struct Overrides {
    /// Deck to add the note to
    #[arg(long)]
    pub deck: Option<String>,

    /// Note type to use
    #[arg(long, alias = "model")]
    pub template: Option<String>,

    /// Field value as NAME=VALUE (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Tag to attach (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in `{}`", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Apply `overrides` to `prefill` and produce the draft to submit.
///
/// A deck or note type override must name an entry of the catalog exactly.
/// Picking a note type rebuilds the field list from that type, filled again
/// from `params`. Field overrides naming a field the note type does not
/// have are skipped with a notice.
pub fn build_draft(
    mut prefill: Prefill,
    overrides: &Overrides,
    params: Option<&NoteParameters>,
    catalog: &CatalogSnapshot,
    notifier: &dyn Notifier,
) -> Result<EntryDraft, String> {
    if let Some(deck) = &overrides.deck {
        if catalog.deck(deck).is_none() {
            return Err(format!(
                "Unknown deck \"{}\". Run `flashnote sync` to refresh the catalog.",
                deck
            ));
        }
        prefill.deck = Some(deck.clone());
    }

    if let Some(template) = &overrides.template {
        if catalog.template(template).is_none() {
            return Err(format!(
                "Unknown note type \"{}\". Run `flashnote sync` to refresh the catalog.",
                template
            ));
        }
        prefill.fields = field_slots(catalog, template, params);
        prefill.template = Some(template.clone());
    }

    for (name, value) in &overrides.fields {
        let wanted = name.to_lowercase();
        match prefill
            .fields
            .iter_mut()
            .find(|slot| slot.name.to_lowercase() == wanted)
        {
            Some(slot) => slot.value = Some(value.clone()),
            None => {
                warn!(field = %name, "Field not in note type");
                notifier.notify(Notice::info(format!(
                    "Ignoring \"{}\": the selected note type has no such field.",
                    name
                )));
            }
        }
    }

    prefill.tags.extend(overrides.tags.iter().cloned());
    Ok(prefill.into_draft())
}
