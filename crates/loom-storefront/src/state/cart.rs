//! # Cart Store
//!
//! The stateful cart manager: sole owner and mutator of a session's cart.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action                Operation               Side Effects          │
//! │  ─────────                ─────────               ────────────          │
//! │                                                                         │
//! │  Session start ─────────► initialize() ─────────► hydrate or reset,    │
//! │                                                   badge publish        │
//! │                                                                         │
//! │  Click product ─────────► add_item() ───────────► persist, badge,      │
//! │                              (awaits catalog)     success notice,      │
//! │                                                   item_added hook      │
//! │                                                                         │
//! │  Change quantity ───────► update_quantity() ────► persist, badge       │
//! │                                                                         │
//! │  Click remove ──────────► remove_item() ────────► persist, badge,      │
//! │                                                   info notice          │
//! │                                                                         │
//! │  Click clear ───────────► clear() ──────────────► persist, badge,      │
//! │                                                   info notice          │
//! │                                                                         │
//! │  By the time any mutation returns, the snapshot write and the badge    │
//! │  publication have already happened. Nothing is left pending.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Expected failures (bad input, unknown product, absent line) reject
//! before any mutation, push an error notice, and return a failure signal.
//! A failed snapshot write does NOT roll the in-memory mutation back: the
//! session's cart stays authoritative and the next successful write
//! reconciles the stored copy.

use std::sync::Arc;

use tracing::{debug, error, warn};

use loom_core::cart::{AddOutcome, Cart};
use loom_core::validation::{parse_product_id, parse_quantity, validate_quantity};
use loom_core::{CartLine, CoreError, PricingPolicy, ProductId, Totals};
use loom_storage::{Catalog, CartRepository};

use crate::error::StorefrontError;
use crate::notify::{NoticeKind, Notifier};
use crate::observer::CartObserver;

/// The session's cart manager.
///
/// One instance per session, passed to whatever UI layer needs it - never
/// ambient global state. All mutations go through `&mut self`, so they are
/// serialized by construction; multiple sessions over the same backing
/// store are last-writer-wins at the storage layer (accepted limitation).
pub struct CartStore {
    cart: Cart,
    repo: CartRepository,
    catalog: Arc<Catalog>,
    policy: PricingPolicy,
    notifier: Arc<dyn Notifier>,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl CartStore {
    /// Creates an empty cart store. Call [`CartStore::initialize`] to
    /// hydrate it from the persisted snapshot.
    pub fn new(
        repo: CartRepository,
        catalog: Arc<Catalog>,
        policy: PricingPolicy,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        CartStore {
            cart: Cart::new(),
            repo,
            catalog,
            policy,
            notifier,
            observers: Vec::new(),
        }
    }

    /// Registers a post-mutation observer (badge presenter, confirmation
    /// animation hook). Observers are invoked synchronously, in
    /// registration order.
    pub fn add_observer(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Loads the persisted snapshot into this store.
    ///
    /// ## Behavior
    /// - No snapshot: starts empty
    /// - Valid snapshot: hydrates the lines, order preserved
    /// - Corrupt snapshot or read failure: resets to empty, pushes an error
    ///   notice, keeps running - never a fatal error
    ///
    /// Always ends by publishing the badge count.
    pub fn initialize(&mut self) {
        match self.repo.load() {
            Ok(Some(lines)) => {
                debug!(count = lines.len(), "hydrated cart from snapshot");
                self.cart = Cart::from_lines(lines);
            }
            Ok(None) => {
                debug!("no cart snapshot, starting empty");
                self.cart = Cart::new();
            }
            Err(err) => {
                error!(error = %err, "cart snapshot unusable, resetting to empty");
                self.cart = Cart::new();
                self.notifier
                    .notify("Error loading cart data", NoticeKind::Error);
            }
        }

        self.publish_count();
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - `quantity < 1`: rejected before any mutation
    /// - Unknown product id: rejected, cart untouched
    /// - Product already in cart: its line's quantity increments in place
    /// - Otherwise: a new line is appended, snapshotting the product
    ///
    /// On success the snapshot is persisted, the badge republished, a
    /// success notice pushed, and the `item_added` hook fired. The
    /// resulting line is returned so the caller can drive a visual
    /// confirmation.
    ///
    /// This is the only suspending operation: it awaits the one-time
    /// catalog load.
    pub async fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartLine, StorefrontError> {
        debug!(%product_id, quantity, "add_item");

        if let Err(err) = validate_quantity(quantity) {
            warn!(%product_id, quantity, "rejected add with invalid quantity");
            self.notifier
                .notify("Invalid product or quantity", NoticeKind::Error);
            return Err(StorefrontError::from(CoreError::from(err)));
        }

        let product = match self.catalog.get_by_id(product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                warn!(%product_id, "product not in catalog");
                self.notifier.notify("Product not found", NoticeKind::Error);
                return Err(CoreError::ProductNotFound(product_id).into());
            }
            Err(err) => {
                error!(error = %err, "catalog unavailable during add_item");
                self.notifier
                    .notify("Failed to add item to cart", NoticeKind::Error);
                return Err(err.into());
            }
        };

        let outcome = self.cart.add_line(&product, quantity)?;
        self.persist();
        self.publish_count();

        let line = match outcome {
            AddOutcome::Incremented(line) => {
                self.notifier.notify(
                    &format!("{} quantity updated! ({})", line.name, line.quantity),
                    NoticeKind::Success,
                );
                line
            }
            AddOutcome::Added(line) => {
                self.notifier
                    .notify(&format!("{} added to cart!", line.name), NoticeKind::Success);
                line
            }
        };

        for observer in &self.observers {
            observer.item_added(&line);
        }

        Ok(line)
    }

    /// Boundary variant of [`CartStore::add_item`] for raw UI input
    /// (data attributes, quantity fields).
    ///
    /// Raw strings are parsed and validated here, exactly once; anything
    /// non-canonical ("0", "2.5", "elephant") is rejected with an error
    /// notice before any state is touched.
    pub async fn add_item_raw(
        &mut self,
        product_id: &str,
        quantity: &str,
    ) -> Result<CartLine, StorefrontError> {
        let parsed = parse_product_id(product_id)
            .and_then(|id| parse_quantity(quantity).map(|qty| (id, qty)));

        match parsed {
            Ok((id, qty)) => self.add_item(id, qty).await,
            Err(err) => {
                warn!(product_id, quantity, error = %err, "rejected raw add input");
                self.notifier
                    .notify("Invalid product or quantity", NoticeKind::Error);
                Err(StorefrontError::from(CoreError::from(err)))
            }
        }
    }

    /// Removes the line for `product_id`.
    ///
    /// Returns the removed line (its name is announced in an info notice).
    /// A no-op failure if the line is absent: no notice, no persist, no
    /// badge update.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<CartLine, StorefrontError> {
        debug!(%product_id, "remove_item");

        let line = self.cart.remove_line(product_id)?;
        self.persist();
        self.publish_count();
        self.notifier
            .notify(&format!("{} removed from cart", line.name), NoticeKind::Info);

        Ok(line)
    }

    /// Sets the quantity of an existing line to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity < 1`: delegates to [`CartStore::remove_item`]
    /// - Line absent: no-op failure
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), StorefrontError> {
        debug!(%product_id, quantity, "update_quantity");

        if quantity < 1 {
            return self.remove_item(product_id).map(|_| ());
        }

        self.cart.update_quantity(product_id, quantity)?;
        self.persist();
        self.publish_count();

        Ok(())
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        debug!("clear cart");

        self.cart.clear();
        self.persist();
        self.publish_count();
        self.notifier.notify("Cart cleared", NoticeKind::Info);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The current lines, insertion-ordered (read-only view).
    pub fn items(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Total quantity across all lines (0 for an empty cart).
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Derives totals from the current lines under the session's pricing
    /// policy. Recomputed on every call - never cached, never stale.
    pub fn totals(&self) -> Totals {
        Totals::compute(self.cart.lines(), &self.policy)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Persists the current lines.
    ///
    /// On failure the in-memory cart stays authoritative for the session;
    /// the stored copy catches up on the next successful write.
    fn persist(&self) {
        if let Err(err) = self.repo.save(self.cart.lines()) {
            error!(error = %err, "failed to persist cart snapshot");
            self.notifier.notify("Error saving cart", NoticeKind::Error);
        }
    }

    /// Publishes the item count to every observer (the badge presenter).
    fn publish_count(&self) {
        let count = self.cart.item_count();
        for observer in &self.observers {
            observer.cart_changed(count);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use loom_core::Money;
    use loom_storage::{KeyValueStore, MemoryStore, StorageError, StorageResult, Store};

    /// Notifier that records every notice it sees.
    #[derive(Debug, Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(String, NoticeKind)>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<(String, NoticeKind)> {
            self.notices.lock().unwrap().clone()
        }

        fn last(&self) -> Option<(String, NoticeKind)> {
            self.notices.lock().unwrap().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, kind: NoticeKind) {
            self.notices.lock().unwrap().push((message.to_string(), kind));
        }
    }

    /// Observer that records badge counts and added lines.
    #[derive(Debug, Default)]
    struct RecordingObserver {
        counts: Mutex<Vec<i64>>,
        added: Mutex<Vec<ProductId>>,
    }

    impl CartObserver for RecordingObserver {
        fn cart_changed(&self, item_count: i64) {
            self.counts.lock().unwrap().push(item_count);
        }

        fn item_added(&self, line: &CartLine) {
            self.added.lock().unwrap().push(line.id);
        }
    }

    /// Backend whose writes always fail (quota exhausted, say).
    #[derive(Debug)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::write_failed(key, "quota exceeded"))
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.0.remove(key)
        }
    }

    struct Fixture {
        store: CartStore,
        notifier: Arc<RecordingNotifier>,
        observer: Arc<RecordingObserver>,
    }

    fn fixture_with_backend(backend: Arc<dyn KeyValueStore>) -> Fixture {
        let notifier = Arc::new(RecordingNotifier::default());
        let observer = Arc::new(RecordingObserver::default());

        let mut store = CartStore::new(
            Store::new(backend).cart(),
            Arc::new(Catalog::new()),
            PricingPolicy::default(),
            notifier.clone(),
        );
        store.add_observer(observer.clone());

        Fixture {
            store,
            notifier,
            observer,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_backend(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_add_item_appends_and_persists() {
        let mut fx = fixture();
        fx.store.initialize();

        let line = fx.store.add_item(ProductId::new(1), 1).await.unwrap();
        assert_eq!(line.name, "Cinnamon Wood Elephant");
        assert_eq!(fx.store.item_count(), 1);

        // Badge saw: initialize (0), then the add (1)
        assert_eq!(*fx.observer.counts.lock().unwrap(), vec![0, 1]);
        // Confirmation hook fired once, after the add
        assert_eq!(*fx.observer.added.lock().unwrap(), vec![ProductId::new(1)]);

        let (message, kind) = fx.notifier.last().unwrap();
        assert_eq!(message, "Cinnamon Wood Elephant added to cart!");
        assert_eq!(kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_add_same_product_increments_single_line() {
        let mut fx = fixture();
        fx.store.initialize();

        fx.store.add_item(ProductId::new(1), 2).await.unwrap();
        let line = fx.store.add_item(ProductId::new(1), 3).await.unwrap();

        assert_eq!(line.quantity, 5);
        assert_eq!(fx.store.items().len(), 1);
        let (message, _) = fx.notifier.last().unwrap();
        assert_eq!(message, "Cinnamon Wood Elephant quantity updated! (5)");
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_quantity_before_mutating() {
        let mut fx = fixture();
        fx.store.initialize();

        assert!(fx.store.add_item(ProductId::new(1), 0).await.is_err());
        assert!(fx.store.is_empty());
        assert_eq!(
            fx.notifier.last().unwrap(),
            ("Invalid product or quantity".to_string(), NoticeKind::Error)
        );
        // No badge update beyond the initial publish
        assert_eq!(*fx.observer.counts.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn test_add_item_raw_parses_ui_input() {
        let mut fx = fixture();
        fx.store.initialize();

        let line = fx.store.add_item_raw(" 2 ", "1").await.unwrap();
        assert_eq!(line.name, "Royal Blue Porcelain Vase");

        for (id, qty) in [("elephant", "1"), ("2", "many"), ("0", "1"), ("2", "0")] {
            assert!(fx.store.add_item_raw(id, qty).await.is_err());
            assert_eq!(
                fx.notifier.last().unwrap(),
                ("Invalid product or quantity".to_string(), NoticeKind::Error)
            );
        }
        assert_eq!(fx.store.item_count(), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_rejected() {
        let mut fx = fixture();
        fx.store.initialize();

        let err = fx.store.add_item(ProductId::new(99), 1).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
        assert!(fx.store.is_empty());
        assert_eq!(
            fx.notifier.last().unwrap(),
            ("Product not found".to_string(), NoticeKind::Error)
        );
    }

    #[tokio::test]
    async fn test_remove_item_announces_name() {
        let mut fx = fixture();
        fx.store.initialize();
        fx.store.add_item(ProductId::new(5), 1).await.unwrap();

        let line = fx.store.remove_item(ProductId::new(5)).unwrap();
        assert_eq!(line.name, "Handwoven Palmyra Basket");
        assert!(fx.store.is_empty());
        assert_eq!(
            fx.notifier.last().unwrap(),
            (
                "Handwoven Palmyra Basket removed from cart".to_string(),
                NoticeKind::Info
            )
        );
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop_failure() {
        let mut fx = fixture();
        fx.store.initialize();
        fx.store.add_item(ProductId::new(1), 2).await.unwrap();
        let notices_before = fx.notifier.notices().len();
        let counts_before = fx.observer.counts.lock().unwrap().len();

        assert!(fx.store.remove_item(ProductId::new(99)).is_err());

        // Cart unchanged, no notice, no badge publish
        assert_eq!(fx.store.item_count(), 2);
        assert_eq!(fx.notifier.notices().len(), notices_before);
        assert_eq!(fx.observer.counts.lock().unwrap().len(), counts_before);
    }

    #[tokio::test]
    async fn test_update_quantity_below_one_removes() {
        let mut fx = fixture();
        fx.store.initialize();
        fx.store.add_item(ProductId::new(1), 2).await.unwrap();

        fx.store.update_quantity(ProductId::new(1), 0).unwrap();
        assert!(fx.store.is_empty());

        // Same as remove_item: the removal notice fired
        let (message, kind) = fx.notifier.last().unwrap();
        assert!(message.ends_with("removed from cart"));
        assert_eq!(kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn test_update_quantity_is_absolute() {
        let mut fx = fixture();
        fx.store.initialize();
        fx.store.add_item(ProductId::new(1), 2).await.unwrap();

        fx.store.update_quantity(ProductId::new(1), 7).unwrap();
        assert_eq!(fx.store.item_count(), 7);

        assert!(fx.store.update_quantity(ProductId::new(42), 3).is_err());
    }

    #[tokio::test]
    async fn test_clear() {
        let mut fx = fixture();
        fx.store.initialize();
        fx.store.add_item(ProductId::new(1), 2).await.unwrap();
        fx.store.add_item(ProductId::new(2), 1).await.unwrap();

        fx.store.clear();
        assert!(fx.store.is_empty());
        assert_eq!(fx.observer.counts.lock().unwrap().last(), Some(&0));
        assert_eq!(
            fx.notifier.last().unwrap(),
            ("Cart cleared".to_string(), NoticeKind::Info)
        );
    }

    #[tokio::test]
    async fn test_initialize_recovers_from_corrupt_snapshot() {
        let backend = Arc::new(MemoryStore::with_entries([(
            loom_storage::CART_SNAPSHOT_KEY,
            "!!not json!!",
        )]));
        let mut fx = fixture_with_backend(backend);

        fx.store.initialize();

        assert!(fx.store.is_empty());
        assert_eq!(
            fx.notifier.last().unwrap(),
            ("Error loading cart data".to_string(), NoticeKind::Error)
        );
        // Badge still published (0)
        assert_eq!(*fx.observer.counts.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn test_initialize_hydrates_previous_session() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        {
            let mut fx = fixture_with_backend(backend.clone());
            fx.store.initialize();
            fx.store.add_item(ProductId::new(1), 3).await.unwrap();
            fx.store.add_item(ProductId::new(2), 1).await.unwrap();
        }

        let mut fx = fixture_with_backend(backend);
        fx.store.initialize();

        assert_eq!(fx.store.item_count(), 4);
        let ids: Vec<u32> = fx.store.items().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(*fx.observer.counts.lock().unwrap(), vec![4]);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let mut fx = fixture_with_backend(Arc::new(ReadOnlyStore(MemoryStore::new())));
        fx.store.initialize();

        // The add succeeds in memory even though persistence failed
        let line = fx.store.add_item(ProductId::new(1), 1).await.unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(fx.store.item_count(), 1);

        // The failed write surfaced as an error notice, then the success
        // notice for the add itself
        let notices = fx.notifier.notices();
        assert!(notices
            .iter()
            .any(|(m, k)| m == "Error saving cart" && *k == NoticeKind::Error));
        assert!(notices
            .iter()
            .any(|(_, k)| *k == NoticeKind::Success));
    }

    #[tokio::test]
    async fn test_totals_follow_current_state() {
        let mut fx = fixture();
        fx.store.initialize();

        fx.store.add_item(ProductId::new(1), 3).await.unwrap(); // 3 × 8,500
        fx.store.add_item(ProductId::new(2), 1).await.unwrap(); // 12,500

        let totals = fx.store.totals();
        assert_eq!(totals.subtotal, Money::from_rupees(38_000));
        assert_eq!(totals.tax, Money::from_rupees(1_900));
        assert_eq!(totals.shipping, Money::from_rupees(350));
        assert_eq!(totals.total, Money::from_rupees(40_250));
        assert!(!totals.free_shipping);

        fx.store.remove_item(ProductId::new(2)).unwrap();
        assert_eq!(fx.store.totals().subtotal, Money::from_rupees(25_500));
    }
}
