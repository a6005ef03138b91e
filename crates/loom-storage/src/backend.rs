//! # Storage Backends
//!
//! The key-value abstraction the repositories write through, and its two
//! implementations.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Backend Abstraction                                  │
//! │                                                                         │
//! │  CartRepository / ThemeRepository                                      │
//! │       │                                                                 │
//! │       │   get("loomCart") / set("loomCart", json)                      │
//! │       ▼                                                                 │
//! │  dyn KeyValueStore                                                     │
//! │       │                                                                 │
//! │       ├──► FileStore    one file per key in the app data directory     │
//! │       │                                                                 │
//! │       └──► MemoryStore  HashMap, for tests and ephemeral sessions      │
//! │                                                                         │
//! │  The browser build swaps in an origin-scoped localStorage adapter      │
//! │  behind the same trait.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Semantics match origin-scoped browser storage: string keys, string
//! values, last writer wins. Concurrent writers from another process are
//! not coordinated - an accepted limitation of the storage model.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

// =============================================================================
// Key-Value Store Trait
// =============================================================================

/// A string-keyed, string-valued store.
///
/// Every persisted artifact (cart snapshot, theme flag) goes through this
/// trait, so repositories never know where bytes actually live.
pub trait KeyValueStore: fmt::Debug + Send + Sync {
    /// Reads the value under `key`. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory backend.
///
/// Used by tests and by ephemeral sessions that should not leave artifacts
/// on disk. Contents vanish when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store pre-seeded with entries (test hydration scenarios).
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStore {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed backend: one file per key under a data directory.
///
/// ## Layout
/// `<data_dir>/<key>.json` - keys are the fixed storage constants
/// (`loomCart`, `loomAndLane_theme`), so the file names are stable.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a file store rooted at `dir`. The directory is created on
    /// first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Opens the store at the platform's app data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/lk.loomandlane.storefront/`
    /// - **Windows**: `%APPDATA%\loomandlane\storefront\data\`
    /// - **Linux**: `~/.local/share/storefront/`
    ///
    /// ## Development Override
    /// Set `LOOM_DATA_DIR` to use a custom directory.
    pub fn open_default() -> StorageResult<Self> {
        if let Ok(dir) = std::env::var("LOOM_DATA_DIR") {
            return Ok(FileStore::new(dir));
        }

        let proj_dirs = ProjectDirs::from("lk", "loomandlane", "storefront").ok_or_else(|| {
            StorageError::Unavailable("could not determine app data directory".to_string())
        })?;

        Ok(FileStore::new(proj_dirs.data_dir()))
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::read_failed(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|err| StorageError::write_failed(key, err))?;

        let path = self.path_for(key);
        debug!(?path, "writing storage key");
        std::fs::write(&path, value).map_err(|err| StorageError::write_failed(key, err))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::write_failed(key, err)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
