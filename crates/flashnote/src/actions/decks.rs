//! Deck-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use flashnote::AnkiClient;
//!
//! # async fn example() -> flashnote::Result<()> {
//! let client = AnkiClient::new();
//!
//! // List all decks
//! let decks = client.decks().names_and_ids().await?;
//! println!("Decks: {:?}", decks);
//!
//! // Create a new deck
//! let deck_id = client.decks().create("My New Deck").await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::NamedIds;

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct CreateDeckParams<'a> {
    deck: &'a str,
}

impl<'a> DeckActions<'a> {
    /// Get all deck names with their IDs.
    ///
    /// Pairs come back in the order AnkiConnect enumerates them. An empty
    /// collection is a valid answer.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flashnote::AnkiClient;
    /// # async fn example() -> flashnote::Result<()> {
    /// let client = AnkiClient::new();
    /// let decks = client.decks().names_and_ids().await?;
    /// for (name, id) in decks.iter() {
    ///     println!("{}: {}", name, id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names_and_ids(&self) -> Result<NamedIds> {
        self.client.invoke_without_params("deckNamesAndIds").await
    }

    /// Create a new deck.
    ///
    /// Returns the ID of the created deck. If a deck with the same name
    /// already exists, returns the ID of the existing deck.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flashnote::AnkiClient;
    /// # async fn example() -> flashnote::Result<()> {
    /// let client = AnkiClient::new();
    /// let deck_id = client.decks().create("Japanese::Vocabulary").await?;
    /// println!("Created deck with ID: {}", deck_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, name: &str) -> Result<i64> {
        self.client
            .invoke("createDeck", CreateDeckParams { deck: name })
            .await
    }
}
