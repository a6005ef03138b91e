//! # Theme Repository
//!
//! Persistence of the two-value display theme flag. The stored value is the
//! literal string `"light"` or `"dark"`; anything else reads as absent so a
//! mangled value falls back to the default instead of wedging startup.

use std::sync::Arc;

use tracing::warn;

use crate::backend::KeyValueStore;
use crate::error::StorageResult;
use loom_core::Theme;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "loomAndLane_theme";

/// Repository for the persisted theme preference.
#[derive(Debug, Clone)]
pub struct ThemeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeRepository {
    /// Creates a repository over a backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        ThemeRepository { store }
    }

    /// Loads the saved preference, `None` if absent or unrecognized.
    pub fn load(&self) -> StorageResult<Option<Theme>> {
        let raw = match self.store.get(THEME_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match Theme::from_str_opt(raw.trim()) {
            Some(theme) => Ok(Some(theme)),
            None => {
                warn!(value = %raw, "unrecognized stored theme, falling back to default");
                Ok(None)
            }
        }
    }

    /// Persists the preference.
    pub fn save(&self, theme: Theme) -> StorageResult<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
