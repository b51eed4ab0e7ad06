//! Model (note type) AnkiConnect actions.
//!
//! Anki calls the schema of a note a "model": a name plus an ordered list of
//! field names.

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::NamedIds;

/// Provides access to model-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::models()`].
#[derive(Debug)]
pub struct ModelActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelNameParams<'a> {
    model_name: &'a str,
}

impl<'a> ModelActions<'a> {
    /// Get all model names with their IDs, in AnkiConnect's order.
    pub async fn names_and_ids(&self) -> Result<NamedIds> {
        self.client.invoke_without_params("modelNamesAndIds").await
    }

    /// Get the ordered field names of a model.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flashnote::AnkiClient;
    /// # async fn example() -> flashnote::Result<()> {
    /// let client = AnkiClient::new();
    /// let fields = client.models().field_names("Basic").await?;
    /// assert_eq!(fields, vec!["Front", "Back"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn field_names(&self, model_name: &str) -> Result<Vec<String>> {
        self.client
            .invoke("modelFieldNames", ModelNameParams { model_name })
            .await
    }
}
