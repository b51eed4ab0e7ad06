//! Note-to-flashcard workflows for Anki via AnkiConnect.
//!
//! This crate builds on the [`flashnote`] client. Where `flashnote` maps
//! AnkiConnect actions one to one, `flashnote-engine` holds the workflows a
//! note-taking host needs: the permission handshake, catalog
//! synchronization, pulling note parameters out of a document, pre-filling
//! an entry form and submitting it.
//!
//! Operations never return errors to the host. Each one reports its outcome
//! through a [`Notifier`](notice::Notifier) and returns a plain value.
//!
//! # Quick Start
//!
//! ```no_run
//! use flashnote_engine::Engine;
//! use flashnote_engine::config::{ConfigStore, JsonFileStore};
//! use flashnote_engine::extract;
//! use flashnote_engine::prefill::Prefill;
//!
//! # async fn example() -> flashnote_engine::Result<()> {
//! let engine = Engine::new();
//! let store = JsonFileStore::new("data.json");
//!
//! engine.gate().request_permission().await;
//! engine.catalog().synchronize(&store).await;
//!
//! let document = "```AnkiIntegration\ndeck: Spanish;\nmodel: Basic;\n```\n";
//! let params = extract::from_document(Some(document));
//! let settings = store.load()?;
//! let draft = Prefill::resolve(params.as_ref(), &settings.catalog).into_draft();
//!
//! engine.entries().submit(&draft).await;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod catalog;
pub mod config;
pub mod extract;
pub mod gate;
pub mod notice;
pub mod prefill;
pub mod submit;

use std::sync::Arc;

pub use error::{Error, Result};

// Re-export client types for convenience
pub use flashnote::{AnkiClient, ClientBuilder, Note, NoteBuilder};

use catalog::CatalogEngine;
use gate::PermissionGate;
use notice::{Notifier, TracingNotifier};
use submit::EntryEngine;

/// Workflow engine for a note-taking host.
///
/// The engine wraps an [`AnkiClient`] and a [`Notifier`], and hands out the
/// workflow modules that use them.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use flashnote_engine::Engine;
/// use flashnote_engine::notice::RecordingNotifier;
///
/// // Default client settings, notices go to tracing
/// let engine = Engine::new();
///
/// // Or a custom client and notifier
/// let client = flashnote_engine::AnkiClient::builder()
///     .url("http://localhost:8765")
///     .build();
/// let notices = Arc::new(RecordingNotifier::new());
/// let engine = Engine::from_client(client).with_notifier(notices.clone());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    client: AnkiClient,
    notifier: Arc<dyn Notifier>,
}

impl Engine {
    /// Create a new engine with default client settings.
    ///
    /// Connects to AnkiConnect at `http://127.0.0.1:8765`.
    pub fn new() -> Self {
        Self::from_client(AnkiClient::new())
    }

    /// Create an engine from an existing client.
    pub fn from_client(client: AnkiClient) -> Self {
        Self {
            client,
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the notifier that receives user-facing notices.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &AnkiClient {
        &self.client
    }

    /// Get the notifier in use.
    pub fn notifier(&self) -> &dyn Notifier {
        &*self.notifier
    }

    /// Access the permission handshake.
    pub fn gate(&self) -> PermissionGate<'_> {
        PermissionGate::new(&self.client, &*self.notifier)
    }

    /// Access catalog workflows.
    ///
    /// Fetches decks and templates and keeps the stored copy current.
    pub fn catalog(&self) -> CatalogEngine<'_> {
        CatalogEngine::new(&self.client, &*self.notifier)
    }

    /// Access note and deck creation.
    pub fn entries(&self) -> EntryEngine<'_> {
        EntryEngine::new(&self.client, &*self.notifier)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
