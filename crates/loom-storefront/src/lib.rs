//! # Loom & Lane Storefront Session
//!
//! The session layer a UI binds to. One [`Session`] is constructed per
//! browser-session equivalent, initialized once, and dropped at teardown -
//! state is injected where it is needed, never ambient.
//!
//! ## Module Organization
//! ```text
//! loom_storefront/
//! ├── lib.rs          ◄─── You are here (Session setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store (mutations, persistence, badge)
//! │   ├── theme.rs    ◄─── Theme preference
//! │   └── config.rs   ◄─── Session configuration
//! ├── notify.rs       ◄─── User notice interface
//! ├── observer.rs     ◄─── Post-mutation observer hooks
//! └── error.rs        ◄─── UI-facing error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Open Storage ─────────────────────────────────────────────────────► │
//! │     • File backend in the app data dir (LOOM_DATA_DIR override),        │
//! │       or an in-memory backend for ephemeral runs                        │
//! │                                                                         │
//! │  3. Construct Session ────────────────────────────────────────────────► │
//! │     • CartStore over the snapshot repository + catalog                  │
//! │     • ThemeState over the theme repository                              │
//! │                                                                         │
//! │  4. initialize() ─────────────────────────────────────────────────────► │
//! │     • Theme preference loads (or defaults)                              │
//! │     • Cart hydrates from its snapshot (corrupt → empty + notice)        │
//! │     • Badge observers receive the starting count                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use loom_core::ProductId;
//! use loom_storefront::{LogNotifier, Session, SessionConfig};
//! use loom_storage::Store;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut session = Session::new(
//!     SessionConfig::default(),
//!     Store::in_memory(),
//!     Arc::new(LogNotifier),
//! );
//! session.initialize();
//!
//! let line = session.cart_mut().add_item(ProductId::new(1), 2).await.unwrap();
//! assert_eq!(line.quantity, 2);
//! assert_eq!(session.cart().item_count(), 2);
//! # });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod notify;
pub mod observer;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ErrorCode, StorefrontError};
pub use notify::{LogNotifier, NoticeKind, Notifier};
pub use observer::CartObserver;
pub use state::{CartStore, SessionConfig, ThemeState};

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use loom_core::validation::validate_search_query;
use loom_core::Product;
use loom_storage::{Catalog, StorageResult, Store};

/// One storefront session: the context object a UI layer holds.
///
/// Construction wires the catalog and the storage repositories into the
/// cart and theme state; [`Session::initialize`] runs the startup sequence.
/// Teardown is `Drop` - every mutation already persisted synchronously, so
/// there is nothing to flush.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    catalog: Arc<Catalog>,
    cart: CartStore,
    theme: ThemeState,
}

impl Session {
    /// Builds a session over the given storage.
    pub fn new(config: SessionConfig, store: Store, notifier: Arc<dyn Notifier>) -> Self {
        let catalog = Arc::new(Catalog::new());

        let cart = CartStore::new(
            store.cart(),
            catalog.clone(),
            config.pricing,
            notifier.clone(),
        );
        let theme = ThemeState::new(store.theme(), notifier);

        Session {
            config,
            catalog,
            cart,
            theme,
        }
    }

    /// Builds a session over the platform's default file-backed storage.
    pub fn open_default(config: SessionConfig, notifier: Arc<dyn Notifier>) -> StorageResult<Self> {
        Ok(Session::new(config, Store::open_default()?, notifier))
    }

    /// Runs the startup sequence: theme preference, cart hydration, badge
    /// publication. Call once, before handing the session to the UI.
    pub fn initialize(&mut self) {
        self.theme.initialize();
        self.cart.initialize();
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The product catalog (lookup, filter, search).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store, read-only.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart store, for mutations.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The theme state, read-only.
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// The theme state, for toggling.
    pub fn theme_mut(&mut self) -> &mut ThemeState {
        &mut self.theme
    }

    /// Searches the catalog for the shop page and the search modal.
    ///
    /// The query is validated at this boundary (trimmed, length-capped);
    /// an empty query returns the full catalog.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, StorefrontError> {
        let query = validate_search_query(query)
            .map_err(|err| StorefrontError::validation(err.to_string()))?;

        Ok(self.catalog.search(&query).await?)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=loom_storefront=trace` - trace this crate only
/// - Default: INFO level, with debug for the loom crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,loom_core=debug,loom_storage=debug,loom_storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
