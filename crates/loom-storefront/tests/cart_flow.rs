//! End-to-end session flow: hydrate, shop, verify totals, recover.
//!
//! Exercises the public `Session` surface the way a UI bridge would,
//! against the in-memory backend.

use std::sync::{Arc, Mutex};

use loom_core::{Money, ProductId};
use loom_storage::{MemoryStore, Store, CART_SNAPSHOT_KEY};
use loom_storefront::{CartObserver, NoticeKind, Notifier, Session, SessionConfig};

/// Test double standing in for the navbar badge.
#[derive(Debug, Default)]
struct Badge {
    counts: Mutex<Vec<i64>>,
}

impl CartObserver for Badge {
    fn cart_changed(&self, item_count: i64) {
        self.counts.lock().unwrap().push(item_count);
    }
}

/// Test double standing in for the toast stack.
#[derive(Debug, Default)]
struct Toasts {
    messages: Mutex<Vec<(String, NoticeKind)>>,
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, kind: NoticeKind) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), kind));
    }
}

fn session_over(store: Store, toasts: Arc<Toasts>, badge: Arc<Badge>) -> Session {
    let mut session = Session::new(SessionConfig::default(), store, toasts);
    session.cart_mut().add_observer(badge);
    session
}

#[tokio::test]
async fn shopping_flow_accumulates_lines_and_totals() {
    let toasts = Arc::new(Toasts::default());
    let badge = Arc::new(Badge::default());
    let mut session = session_over(Store::in_memory(), toasts.clone(), badge.clone());

    session.initialize();
    assert!(session.cart().is_empty());

    // Shop: elephant ×1, vase ×1, elephant ×2 more
    session.cart_mut().add_item(ProductId::new(1), 1).await.unwrap();
    session.cart_mut().add_item(ProductId::new(2), 1).await.unwrap();
    session.cart_mut().add_item(ProductId::new(1), 2).await.unwrap();

    // Two lines, dedup by product, insertion order preserved
    let items = session.cart().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, ProductId::new(1));
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[1].id, ProductId::new(2));
    assert_eq!(items[1].quantity, 1);
    assert_eq!(session.cart().item_count(), 4);

    // Totals: 3×8,500 + 12,500 = 38,000; 5% tax; standard shipping
    let totals = session.cart().totals();
    assert_eq!(totals.subtotal, Money::from_rupees(38_000));
    assert_eq!(totals.tax, Money::from_rupees(1_900));
    assert_eq!(totals.shipping, Money::from_rupees(350));
    assert_eq!(totals.total, Money::from_rupees(40_250));
    assert_eq!(totals.item_count, 4);
    assert!(!totals.free_shipping);

    // The badge tracked every mutation: hydrate, then each add
    assert_eq!(*badge.counts.lock().unwrap(), vec![0, 1, 2, 4]);

    // Display formatting of the grand total
    assert_eq!(
        session.config().format_currency(totals.total),
        "LKR 40,250.00"
    );
}

#[tokio::test]
async fn removing_unknown_product_fails_without_side_effects() {
    let toasts = Arc::new(Toasts::default());
    let badge = Arc::new(Badge::default());
    let mut session = session_over(Store::in_memory(), toasts.clone(), badge.clone());

    session.initialize();
    session.cart_mut().add_item(ProductId::new(3), 2).await.unwrap();

    let toasts_before = toasts.messages.lock().unwrap().len();
    assert!(session.cart_mut().remove_item(ProductId::new(99)).is_err());

    assert_eq!(session.cart().item_count(), 2);
    assert_eq!(toasts.messages.lock().unwrap().len(), toasts_before);
    assert_eq!(*badge.counts.lock().unwrap(), vec![0, 2]);
}

#[tokio::test]
async fn cart_survives_into_a_new_session() {
    let backend = Arc::new(MemoryStore::new());
    let toasts = Arc::new(Toasts::default());
    let badge = Arc::new(Badge::default());

    {
        let store = Store::new(backend.clone());
        let mut session = session_over(store, toasts.clone(), badge.clone());
        session.initialize();
        session.cart_mut().add_item(ProductId::new(6), 1).await.unwrap();
        session.cart_mut().add_item(ProductId::new(12), 1).await.unwrap();
    } // session dropped; nothing to flush, every mutation already persisted

    let store = Store::new(backend);
    let mut session = session_over(store, toasts, Arc::new(Badge::default()));
    session.initialize();

    let items = session.cart().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Ceylon Tea Ceremony Set");
    assert_eq!(items[1].name, "Colonial Era Chandelier");

    // 22,500 + 45,000 = 67,500 ≥ 50,000 → free shipping
    let totals = session.cart().totals();
    assert_eq!(totals.subtotal, Money::from_rupees(67_500));
    assert!(totals.free_shipping);
    assert_eq!(totals.shipping, Money::zero());
}

#[tokio::test]
async fn corrupt_snapshot_recovers_to_usable_empty_session() {
    let backend = Arc::new(MemoryStore::with_entries([(
        CART_SNAPSHOT_KEY,
        "definitely not json",
    )]));
    let toasts = Arc::new(Toasts::default());
    let badge = Arc::new(Badge::default());
    let mut session = session_over(Store::new(backend), toasts.clone(), badge.clone());

    session.initialize();

    // Reset to empty, error surfaced, badge published
    assert!(session.cart().is_empty());
    assert!(toasts
        .messages
        .lock()
        .unwrap()
        .iter()
        .any(|(m, k)| m == "Error loading cart data" && *k == NoticeKind::Error));
    assert_eq!(*badge.counts.lock().unwrap(), vec![0]);

    // The session stays fully usable afterwards
    session.cart_mut().add_item(ProductId::new(1), 1).await.unwrap();
    assert_eq!(session.cart().item_count(), 1);
}

#[tokio::test]
async fn catalog_queries_drive_the_shop_page() {
    let session = session_over(
        Store::in_memory(),
        Arc::new(Toasts::default()),
        Arc::new(Badge::default()),
    );

    let catalog = session.catalog();
    assert_eq!(catalog.list_all().await.unwrap().len(), 15);

    let decor = catalog.filter_by_category("Home Decor").await.unwrap();
    assert_eq!(decor.len(), 3);

    let hits = catalog.search("porcelain").await.unwrap();
    assert!(hits.iter().any(|p| p.name == "Royal Blue Porcelain Vase"));

    // The session-level search validates the query first
    let hits = session.search_products("  TEAK  ").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert!(session.search_products(&"x".repeat(200)).await.is_err());
    assert_eq!(session.search_products("").await.unwrap().len(), 15);
}
