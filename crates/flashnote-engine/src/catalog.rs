//! Catalog synchronization.
//!
//! The catalog is the local copy of what Anki knows about: decks, and note
//! types (templates) with their ordered field names. It is rebuilt on
//! request and stored in the [`Settings`](crate::config::Settings); the
//! form logic only ever reads that stored copy.
//!
//! # Example
//!
//! ```no_run
//! use flashnote_engine::Engine;
//! use flashnote_engine::config::JsonFileStore;
//!
//! # async fn example() {
//! let engine = Engine::new();
//! let store = JsonFileStore::new("data.json");
//!
//! let report = engine.catalog().synchronize(&store).await;
//! println!("decks updated: {}", report.decks_updated);
//! # }
//! ```

use flashnote::AnkiClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::Result;
use crate::config::ConfigStore;
use crate::notice::{Notice, Notifier};

/// A deck known to Anki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Deck name, e.g. `Japanese::Vocabulary`.
    pub name: String,
    /// Anki's deck ID.
    pub id: i64,
}

/// A note type known to Anki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Note type name, e.g. `Basic`.
    pub name: String,
    /// Anki's model ID.
    pub id: i64,
    /// Field names in the order Anki defines them.
    pub fields: Vec<String>,
}

/// Decks and templates as of the last synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    /// Known decks.
    pub decks: Vec<DeckEntry>,
    /// Known templates.
    pub templates: Vec<TemplateEntry>,
}

impl CatalogSnapshot {
    /// Find a deck by exact, case-sensitive name.
    pub fn deck(&self, name: &str) -> Option<&DeckEntry> {
        self.decks.iter().find(|deck| deck.name == name)
    }

    /// Find a template by exact, case-sensitive name.
    pub fn template(&self, name: &str) -> Option<&TemplateEntry> {
        self.templates.iter().find(|template| template.name == name)
    }

    /// Whether nothing has been synchronized yet.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty() && self.templates.is_empty()
    }
}

/// What a synchronization changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// The deck list was replaced and saved.
    pub decks_updated: bool,
    /// The template list was replaced and saved.
    pub templates_updated: bool,
}

/// Catalog workflow engine.
#[derive(Debug)]
pub struct CatalogEngine<'a> {
    client: &'a AnkiClient,
    notifier: &'a dyn Notifier,
}

impl<'a> CatalogEngine<'a> {
    pub(crate) fn new(client: &'a AnkiClient, notifier: &'a dyn Notifier) -> Self {
        Self { client, notifier }
    }

    /// Fetch every deck name and ID.
    ///
    /// Returns `None` when Anki has no decks (an informational notice is
    /// shown) or when the request fails (an error notice is shown).
    pub async fn fetch_decks(&self) -> Option<Vec<DeckEntry>> {
        debug!("Fetching decks");
        match self.client.decks().names_and_ids().await {
            Ok(ids) if ids.is_empty() => {
                info!("Anki has no decks");
                self.notifier.notify(Notice::info("No decks found in Anki, create one first."));
                None
            }
            Ok(ids) => {
                let decks: Vec<DeckEntry> = ids
                    .into_iter()
                    .map(|(name, id)| DeckEntry { name, id })
                    .collect();
                debug!(count = decks.len(), "Fetched decks");
                Some(decks)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch decks");
                self.notifier.notify(Notice::error(format!(
                    "Failed to fetch decks: {}. Make sure Anki is running.",
                    e
                )));
                None
            }
        }
    }

    /// Fetch every template with its ordered field names.
    ///
    /// Issues one `modelNamesAndIds` request and then one `modelFieldNames`
    /// request per template. Any failure discards the whole result. Returns
    /// `None` on failure or when Anki has no templates, with a notice either
    /// way.
    pub async fn fetch_templates(&self) -> Option<Vec<TemplateEntry>> {
        debug!("Fetching templates");
        match self.fetch_templates_inner().await {
            Ok(templates) if templates.is_empty() => {
                info!("Anki has no note types");
                self.notifier
                    .notify(Notice::info("No note types found in Anki, create one first."));
                None
            }
            Ok(templates) => {
                debug!(count = templates.len(), "Fetched templates");
                Some(templates)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch templates");
                self.notifier.notify(Notice::error(format!(
                    "Failed to fetch note types: {}. Make sure Anki is running.",
                    e
                )));
                None
            }
        }
    }

    async fn fetch_templates_inner(&self) -> Result<Vec<TemplateEntry>> {
        let ids = self.client.models().names_and_ids().await?;

        let mut templates = Vec::with_capacity(ids.len());
        for (name, id) in ids {
            let fields = self.client.models().field_names(&name).await?;
            templates.push(TemplateEntry { name, id, fields });
        }
        Ok(templates)
    }

    /// Refresh the stored catalog from Anki.
    ///
    /// Each slice (decks, templates) is replaced only if its fetch returned
    /// something, so an empty or failed fetch never wipes what was stored
    /// before. The settings are saved whenever at least one slice changed.
    /// This never fails: problems are reported as notices and reflected in
    /// the returned [`SyncReport`].
    pub async fn synchronize(&self, store: &dyn ConfigStore) -> SyncReport {
        let mut settings = match store.load() {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to load settings");
                self.notifier.notify(Notice::error(format!("Failed to load settings: {}", e)));
                return SyncReport::default();
            }
        };

        let decks = self.fetch_decks().await;
        let templates = self.fetch_templates().await;

        let mut report = SyncReport::default();
        if let Some(decks) = decks {
            settings.catalog.decks = decks;
            report.decks_updated = true;
        }
        if let Some(templates) = templates {
            settings.catalog.templates = templates;
            report.templates_updated = true;
        }

        if !report.decks_updated && !report.templates_updated {
            return report;
        }

        if let Err(e) = store.save(&settings) {
            warn!(error = %e, "Failed to save settings");
            self.notifier.notify(Notice::error(format!("Failed to save settings: {}", e)));
            return SyncReport::default();
        }

        info!(
            decks = settings.catalog.decks.len(),
            templates = settings.catalog.templates.len(),
            "Catalog synchronized"
        );
        self.notifier.notify(Notice::success("Anki data synchronized."));
        report
    }
}
