//! Miscellaneous AnkiConnect actions.
//!
//! This module provides access to the permission handshake that must
//! precede any other call from a new client.

use serde::Deserialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to miscellaneous AnkiConnect operations.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Result of requesting permission.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionResult {
    /// The permission status, `"granted"` or `"denied"`.
    pub permission: String,
    /// Whether AnkiConnect requires an API key.
    #[serde(default, alias = "requireApikey", alias = "requireApiKey")]
    pub require_api_key: bool,
    /// API version if granted.
    #[serde(default)]
    pub version: Option<u8>,
}

impl PermissionResult {
    /// Whether AnkiConnect granted access.
    pub fn is_granted(&self) -> bool {
        self.permission == "granted"
    }
}

impl<'a> MiscActions<'a> {
    /// Request permission to use AnkiConnect.
    ///
    /// This will show a dialog in Anki asking the user to grant permission
    /// the first time a client from a new origin asks.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flashnote::AnkiClient;
    /// # async fn example() -> flashnote::Result<()> {
    /// let client = AnkiClient::new();
    /// let result = client.misc().request_permission().await?;
    /// if result.is_granted() {
    ///     println!("Permission granted!");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request_permission(&self) -> Result<PermissionResult> {
        self.client.invoke_without_params("requestPermission").await
    }
}
