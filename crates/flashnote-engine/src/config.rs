//! Persisted add-on settings.
//!
//! Settings are loaded once, merged over the built-in defaults, and saved
//! wholesale after every change. The store is passed explicitly to the
//! operations that need it.
//!
//! # Example
//!
//! ```no_run
//! use flashnote_engine::config::{ConfigStore, JsonFileStore};
//!
//! # fn example() -> flashnote_engine::Result<()> {
//! let store = JsonFileStore::new("data.json");
//! let mut settings = store.load()?;
//! settings.invisible_code_block = false;
//! store.save(&settings)?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::catalog::CatalogSnapshot;

/// Everything the add-on persists between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// The last synchronized catalog.
    pub catalog: CatalogSnapshot,
    /// Whether `AnkiIntegration` blocks are hidden when the note is rendered.
    pub invisible_code_block: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSnapshot::default(),
            invisible_code_block: true,
        }
    }
}

/// Loads and saves [`Settings`].
pub trait ConfigStore: Send + Sync {
    /// Load the settings, falling back to defaults for anything not stored.
    fn load(&self) -> Result<Settings>;

    /// Replace the stored settings.
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings stored as a pretty-printed JSON file.
///
/// A missing file loads as [`Settings::default()`]. Parent directories are
/// created on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<Settings> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}

/// Settings held in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Mutex<Settings>,
}

impl MemoryStore {
    /// Create a store holding `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    /// Current settings, without going through [`ConfigStore::load`].
    pub fn snapshot(&self) -> Settings {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Settings> {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.snapshot())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.lock() = settings.clone();
        Ok(())
    }
}
