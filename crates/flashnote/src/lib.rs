//! An async Rust client for the AnkiConnect API.
//!
//! Every call is a single JSON POST of `{action, version: 6, params}` to the
//! local AnkiConnect endpoint. Responses are held to AnkiConnect's envelope
//! contract: a JSON object with exactly the two fields `error` and `result`.
//! Anything else is reported as its own [`Error`] variant rather than being
//! guessed at.
//!
//! # Quick Start
//!
//! ```no_run
//! use flashnote::AnkiClient;
//!
//! # async fn example() -> flashnote::Result<()> {
//! // Create a client with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! // Ask for access before anything else
//! let permission = client.misc().request_permission().await?;
//! println!("Permission: {}", permission.permission);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use flashnote::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! - [`AnkiClient::decks()`] - List and create decks
//! - [`AnkiClient::models()`] - List note types and their fields
//! - [`AnkiClient::notes()`] - Add notes
//! - [`AnkiClient::misc()`] - Permission handshake
//!
//! Any other action can be sent with [`AnkiClient::invoke()`].
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use actions::PermissionResult;
pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::{NamedIds, Note, NoteBuilder};
