//! Error types for the flashnote crate.
//!
//! Every failure of a round trip to AnkiConnect maps to exactly one variant,
//! so callers can tell a missing Anki instance from a broken response or an
//! error reported by Anki itself.
//!
//! # Error Handling
//!
//! The most common errors you'll encounter are:
//!
//! - [`Error::ConnectionRefused`]: Anki is not running or AnkiConnect is not installed
//! - [`Error::AnkiConnect`]: Anki rejected the action (e.g., deck not found, duplicate note)
//! - [`Error::UnexpectedFieldCount`] and friends: the response broke the
//!   `{"error", "result"}` contract
//!
//! # Example
//!
//! ```no_run
//! use flashnote::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.decks().names_and_ids().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(e) if e.is_contract_violation() => {
//!         eprintln!("Something other than AnkiConnect answered: {}", e);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Covers timeouts and any transport failure other than a refused
    /// connection, see [`Error::ConnectionRefused`].
    #[error("failed to issue request: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused - Anki is likely not running.
    ///
    /// This error occurs when:
    /// - Anki is not running
    /// - The AnkiConnect add-on is not installed
    /// - AnkiConnect is configured on a different port
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,

    /// The body was not valid JSON, or the result did not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response object did not have exactly two fields.
    ///
    /// A body that is not a JSON object at all reports a count of zero.
    #[error("response has an unexpected number of fields: {0}")]
    UnexpectedFieldCount(usize),

    /// The response had two fields but none of them was `error`.
    #[error("response is missing required error field")]
    MissingErrorField,

    /// The response had two fields but none of them was `result`.
    #[error("response is missing required result field")]
    MissingResultField,

    /// AnkiConnect returned an error message.
    ///
    /// The message is passed through verbatim. Common messages include:
    /// - "cannot create note because it is a duplicate"
    /// - "deck was not found"
    /// - "model was not found"
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),
}

impl Error {
    /// Whether no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::ConnectionRefused)
    }

    /// Whether a response was received but did not follow the
    /// `{"error", "result"}` envelope.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::Json(_)
                | Error::UnexpectedFieldCount(_)
                | Error::MissingErrorField
                | Error::MissingResultField
        )
    }
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
