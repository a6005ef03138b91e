//! # loom-storage: Data Access Layer for Loom & Lane
//!
//! This crate provides every persisted and embedded data source the
//! storefront touches: the key-value snapshot store and the product catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Loom & Lane Data Flow                               │
//! │                                                                         │
//! │  Session layer (CartStore.add_item, ThemeState.toggle)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   loom-storage (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Backends    │    │ Repositories  │    │   Catalog    │  │   │
//! │  │   │ (backend.rs)  │    │  (cart.rs,    │    │ (embedded,   │  │   │
//! │  │   │               │    │   theme.rs)   │    │  loads once) │  │   │
//! │  │   │ FileStore     │◄───│ CartRepo      │    │              │  │   │
//! │  │   │ MemoryStore   │    │ ThemeRepo     │    │ 15 products  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/loomCart.json, <data_dir>/loomAndLane_theme.json           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - key-value store trait and its file/memory backends
//! - [`repository`] - typed snapshot repositories over a backend
//! - [`catalog`] - the embedded, read-only product catalog
//! - [`error`] - storage error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use loom_storage::{MemoryStore, Store};
//!
//! let store = Store::new(Arc::new(MemoryStore::new()));
//!
//! // Nothing persisted yet
//! assert!(store.cart().load().unwrap().is_none());
//! assert!(store.theme().load().unwrap().is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod catalog;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use catalog::Catalog;
pub use error::{StorageError, StorageResult};

// Repository re-exports for convenience
pub use repository::cart::{CartRepository, CART_SNAPSHOT_KEY};
pub use repository::theme::{ThemeRepository, THEME_KEY};

use std::sync::Arc;

/// Handle bundling the repositories over one backend.
///
/// The session layer holds one of these per browser-session equivalent;
/// repositories cloned out of it share the backend.
#[derive(Debug, Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
}

impl Store {
    /// Creates a store over an explicit backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Store { backend }
    }

    /// Convenience: an ephemeral in-memory store.
    pub fn in_memory() -> Self {
        Store::new(Arc::new(MemoryStore::new()))
    }

    /// Opens a file-backed store at the platform data directory
    /// (override with `LOOM_DATA_DIR`).
    pub fn open_default() -> StorageResult<Self> {
        Ok(Store::new(Arc::new(FileStore::open_default()?)))
    }

    /// The cart snapshot repository.
    pub fn cart(&self) -> CartRepository {
        CartRepository::new(self.backend.clone())
    }

    /// The theme preference repository.
    pub fn theme(&self) -> ThemeRepository {
        ThemeRepository::new(self.backend.clone())
    }

    /// The raw backend (for adapters layered on top).
    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        self.backend.clone()
    }
}
