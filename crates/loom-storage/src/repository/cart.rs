//! # Cart Repository
//!
//! Persistence of the cart snapshot.
//!
//! ## Snapshot Format
//! The value under [`CART_SNAPSHOT_KEY`] is a JSON array of line objects,
//! insertion-ordered:
//!
//! ```json
//! [
//!   {"id": 1, "name": "Cinnamon Wood Elephant", "category": "Wooden Crafts",
//!    "price": 850000, "image": "/assets/images/product/web1.jfif", "quantity": 3}
//! ]
//! ```
//!
//! Prices are integer cents. The array is the whole snapshot; totals are
//! never persisted (they are derived on read).

use std::sync::Arc;

use tracing::debug;

use crate::backend::KeyValueStore;
use crate::error::{StorageError, StorageResult};
use loom_core::CartLine;

/// Storage key for the persisted cart snapshot.
pub const CART_SNAPSHOT_KEY: &str = "loomCart";

/// Repository for the persisted cart snapshot.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use loom_storage::{CartRepository, MemoryStore};
///
/// let repo = CartRepository::new(Arc::new(MemoryStore::new()));
/// assert!(repo.load().unwrap().is_none()); // nothing persisted yet
/// ```
#[derive(Debug, Clone)]
pub struct CartRepository {
    store: Arc<dyn KeyValueStore>,
}

impl CartRepository {
    /// Creates a repository over a backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        CartRepository { store }
    }

    /// Loads the persisted snapshot.
    ///
    /// ## Returns
    /// - `Ok(None)` - nothing has been persisted yet
    /// - `Ok(Some(lines))` - the decoded snapshot, insertion-ordered
    /// - `Err(CorruptSnapshot)` - a value exists but does not decode;
    ///   the caller decides how to recover (the session resets to empty)
    pub fn load(&self) -> StorageResult<Option<Vec<CartLine>>> {
        let raw = match self.store.get(CART_SNAPSHOT_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let lines: Vec<CartLine> = serde_json::from_str(&raw)
            .map_err(|err| StorageError::corrupt(CART_SNAPSHOT_KEY, err))?;

        debug!(count = lines.len(), "loaded cart snapshot");
        Ok(Some(lines))
    }

    /// Persists the given lines as the new snapshot.
    pub fn save(&self, lines: &[CartLine]) -> StorageResult<()> {
        let json = serde_json::to_string(lines)
            .map_err(|err| StorageError::write_failed(CART_SNAPSHOT_KEY, err))?;

        debug!(count = lines.len(), "saving cart snapshot");
        self.store.set(CART_SNAPSHOT_KEY, &json)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use loom_core::{Money, Product, ProductId};

    fn line(id: u32, rupees: i64, quantity: i64) -> CartLine {
        let product = Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            category: "Porcelain".to_string(),
            price: Money::from_rupees(rupees),
            description: String::new(),
            image: format!("/assets/images/product/web{}.jfif", id),
            rating: 4.5,
        };
        CartLine::from_product(&product, quantity)
    }

    #[test]
    fn test_load_absent_snapshot() {
        let repo = CartRepository::new(Arc::new(MemoryStore::new()));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let repo = CartRepository::new(Arc::new(MemoryStore::new()));
        let lines = vec![line(1, 8_500, 3), line(2, 12_500, 1)];

        repo.save(&lines).unwrap();
        let loaded = repo.load().unwrap().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, ProductId::new(1));
        assert_eq!(loaded[0].quantity, 3);
        assert_eq!(loaded[1].price, Money::from_rupees(12_500));
    }

    #[test]
    fn test_corrupt_snapshot_is_typed() {
        let store = MemoryStore::with_entries([(CART_SNAPSHOT_KEY, "{not json]")]);
        let repo = CartRepository::new(Arc::new(store));

        let err = repo.load().unwrap_err();
        assert!(matches!(err, StorageError::CorruptSnapshot { .. }));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        // Valid JSON, wrong shape: an object where the array should be
        let store = MemoryStore::with_entries([(CART_SNAPSHOT_KEY, "{\"id\": 1}")]);
        let repo = CartRepository::new(Arc::new(store));

        assert!(matches!(
            repo.load().unwrap_err(),
            StorageError::CorruptSnapshot { .. }
        ));
    }

    #[test]
    fn test_save_empty_cart_writes_empty_array() {
        let store = Arc::new(MemoryStore::new());
        let repo = CartRepository::new(store.clone());

        repo.save(&[]).unwrap();
        assert_eq!(store.get(CART_SNAPSHOT_KEY).unwrap().as_deref(), Some("[]"));
    }
}
