//! Error types for flashnote-engine.
//!
//! Errors from engine workflows fall into three categories:
//!
//! 1. **Client errors**: Wrapped from the underlying [`flashnote::Error`] type
//! 2. **Settings errors**: Reading or writing the persisted configuration
//! 3. **Validation errors**: A draft entry failed a local check before any
//!    request was sent
//!
//! The user-facing operations ([`request_permission`], [`synchronize`],
//! [`submit`]) catch these at their boundary and report them as notices.
//! The lower-level pieces ([`ConfigStore`], [`EntryDraft::validate`]) return
//! them.
//!
//! [`request_permission`]: crate::gate::PermissionGate::request_permission
//! [`synchronize`]: crate::catalog::CatalogEngine::synchronize
//! [`submit`]: crate::submit::EntryEngine::submit
//! [`ConfigStore`]: crate::config::ConfigStore
//! [`EntryDraft::validate`]: crate::submit::EntryDraft::validate

use std::fmt;

/// Result type for flashnote-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during engine operations.
#[derive(Debug)]
pub enum Error {
    /// An error from the underlying flashnote client.
    Client(flashnote::Error),

    /// An I/O error occurred while accessing the settings file.
    Io(std::io::Error),

    /// The settings could not be encoded or decoded.
    Config(serde_json::Error),

    /// A draft entry failed a local check.
    Validation(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::Validation(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Client(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Config(e) => write!(f, "invalid settings: {}", e),
            Error::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err)
    }
}

impl From<flashnote::Error> for Error {
    fn from(err: flashnote::Error) -> Self {
        Error::Client(err)
    }
}
