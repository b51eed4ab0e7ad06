//! The permission handshake.
//!
//! AnkiConnect asks the user to approve a new client the first time it calls
//! `requestPermission`. The handshake runs once per activation, before any
//! other request. A refusal does not stop anything: later calls are simply
//! left to fail on their own.

use flashnote::AnkiClient;
use tracing::{debug, info, warn};

use crate::notice::{Notice, Notifier};

/// Permission workflow engine.
#[derive(Debug)]
pub struct PermissionGate<'a> {
    client: &'a AnkiClient,
    notifier: &'a dyn Notifier,
}

impl<'a> PermissionGate<'a> {
    pub(crate) fn new(client: &'a AnkiClient, notifier: &'a dyn Notifier) -> Self {
        Self { client, notifier }
    }

    /// Ask AnkiConnect for access.
    ///
    /// Returns `true` only when the answer's `permission` is `"granted"`.
    /// A denial, a transport failure and a malformed response all return
    /// `false` with an error notice. Nothing is cached or retried.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flashnote_engine::Engine;
    /// # async fn example() {
    /// let engine = Engine::new();
    /// if !engine.gate().request_permission().await {
    ///     eprintln!("continuing without Anki access");
    /// }
    /// # }
    /// ```
    pub async fn request_permission(&self) -> bool {
        debug!("Requesting permission");
        match self.client.misc().request_permission().await {
            Ok(result) if result.is_granted() => {
                info!(version = ?result.version, "Permission granted");
                self.notifier.notify(Notice::success("Connected to Anki."));
                true
            }
            Ok(result) => {
                warn!(permission = %result.permission, "Permission not granted");
                self.notifier.notify(Notice::error("Permission to access Anki was denied."));
                false
            }
            Err(e) => {
                warn!(error = %e, "Permission request failed");
                self.notifier.notify(Notice::error(format!(
                    "Could not request permission from Anki: {}. Make sure Anki is running.",
                    e
                )));
                false
            }
        }
    }
}
