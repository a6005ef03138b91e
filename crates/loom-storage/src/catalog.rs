//! # Product Catalog
//!
//! The read-only product data source.
//!
//! ## Load Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How the Catalog Loads                                │
//! │                                                                         │
//! │  add_item / search / grid render                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.load().await                                                   │
//! │       │                                                                 │
//! │       ├── first call: materialize the embedded dataset into the        │
//! │       │   OnceCell (the only await point in the whole system)          │
//! │       │                                                                 │
//! │       └── every later call: return the cached slice immediately        │
//! │                                                                         │
//! │  The load is idempotent: concurrent first calls race into the same     │
//! │  cell and observe one dataset.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dataset is embedded in the binary (the storefront has no product
//! service to call); a future release can swap [`builtin_products`] for a
//! fetched feed without touching the query surface.

use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use loom_core::{Money, Product, ProductId};

// =============================================================================
// Catalog
// =============================================================================

/// The storefront's product catalog.
///
/// ## Usage
/// ```rust
/// use loom_storage::Catalog;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let catalog = Catalog::new();
/// let all = catalog.list_all().await.unwrap();
/// assert_eq!(all.len(), 15);
///
/// let vases = catalog.filter_by_category("porcelain").await.unwrap();
/// assert!(!vases.is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    products: OnceCell<Vec<Product>>,
}

impl Catalog {
    /// Creates an unloaded catalog. Data materializes on first query.
    pub fn new() -> Self {
        Catalog {
            products: OnceCell::new(),
        }
    }

    /// Loads the catalog, once. Later calls return the cached data.
    ///
    /// ## Errors
    /// `StorageError::CatalogUnavailable` if the dataset is empty.
    pub async fn load(&self) -> StorageResult<&[Product]> {
        let products = self
            .products
            .get_or_try_init(|| async {
                let products = builtin_products();
                if products.is_empty() {
                    return Err(StorageError::CatalogUnavailable);
                }
                debug!(count = products.len(), "catalog loaded");
                Ok(products)
            })
            .await?;

        Ok(products.as_slice())
    }

    /// Looks up a single product by id.
    pub async fn get_by_id(&self, id: ProductId) -> StorageResult<Option<Product>> {
        let products = self.load().await?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    /// Returns every product, catalog-ordered.
    pub async fn list_all(&self) -> StorageResult<Vec<Product>> {
        Ok(self.load().await?.to_vec())
    }

    /// Filters products by category, case-insensitively.
    ///
    /// An empty filter or the literal `"all"` returns everything.
    pub async fn filter_by_category(&self, category: &str) -> StorageResult<Vec<Product>> {
        let products = self.load().await?;
        let category = category.trim();

        if category.is_empty() || category.eq_ignore_ascii_case("all") {
            return Ok(products.to_vec());
        }

        Ok(products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }

    /// Case-insensitive substring search over name, description, and
    /// category. An empty query returns everything.
    pub async fn search(&self, query: &str) -> StorageResult<Vec<Product>> {
        let products = self.load().await?;
        let term = query.trim().to_lowercase();

        if term.is_empty() {
            return Ok(products.to_vec());
        }

        Ok(products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            })
            .cloned()
            .collect())
    }
}

// =============================================================================
// Embedded Dataset
// =============================================================================

/// The launch catalog: fifteen handcrafted Sri Lankan pieces.
fn builtin_products() -> Vec<Product> {
    fn product(
        id: u32,
        name: &str,
        category: &str,
        rupees: i64,
        description: &str,
        image: &str,
        rating: f32,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_rupees(rupees),
            description: description.to_string(),
            image: image.to_string(),
            rating,
        }
    }

    vec![
        product(
            1,
            "Cinnamon Wood Elephant",
            "Wooden Crafts",
            8_500,
            "Handcarved from authentic Ceylon cinnamon wood, this majestic elephant sculpture embodies Sri Lankan heritage.",
            "/assets/images/product/web1.jfif",
            4.8,
        ),
        product(
            2,
            "Royal Blue Porcelain Vase",
            "Porcelain",
            12_500,
            "A stunning porcelain vase adorned with hand-painted sapphire motifs inspired by Sri Lanka's precious gemstones.",
            "/assets/images/product/web13.jfif",
            4.9,
        ),
        product(
            3,
            "Lotus Bloom Arrangement",
            "Flower Arrangements",
            6_500,
            "An exquisite arrangement featuring fresh lotus flowers and tropical foliage native to Sri Lankan waterways.",
            "/assets/images/product/web5.jfif",
            4.7,
        ),
        product(
            4,
            "Teak Wood Wall Panel",
            "Home Decor",
            18_500,
            "A magnificent carved teak panel featuring traditional Kandyan era motifs and geometric patterns.",
            "/assets/images/product/web10.jfif",
            5.0,
        ),
        product(
            5,
            "Handwoven Palmyra Basket",
            "Accessories",
            3_500,
            "Expertly woven from sustainable palmyra palm fibers by skilled artisans from the Northern Province.",
            "/assets/images/product/web4.jfif",
            4.6,
        ),
        product(
            6,
            "Ceylon Tea Ceremony Set",
            "Porcelain",
            22_500,
            "An elegant six-piece porcelain tea set featuring delicate gold leaf accents and tea plantation illustrations.",
            "/assets/images/product/web18.jpeg",
            4.9,
        ),
        product(
            7,
            "Moonstone Terrace Lamp",
            "Home Decor",
            15_500,
            "Inspired by ancient moonstone carvings found in Anuradhapura, this brass lamp casts enchanting patterns.",
            "/assets/images/product/web6.jfif",
            4.8,
        ),
        product(
            8,
            "Sandalwood Prayer Box",
            "Wooden Crafts",
            7_500,
            "A miniature treasure chest carved from fragrant sandalwood with brass inlay work.",
            "/assets/images/product/web3.jfif",
            4.7,
        ),
        product(
            9,
            "Frangipani Silk Arrangement",
            "Flower Arrangements",
            5_500,
            "Premium silk frangipani blooms artfully arranged with natural dried palm leaves and river stones.",
            "/assets/images/product/web8.jfif",
            4.5,
        ),
        product(
            10,
            "Handloom Cotton Table Runner",
            "Accessories",
            4_200,
            "Woven on traditional handlooms using organic cotton threads and natural dyes from indigenous plants.",
            "/assets/images/product/web10.jfif",
            4.6,
        ),
        product(
            11,
            "Ebony Meditation Buddha",
            "Wooden Crafts",
            25_500,
            "Masterfully sculpted from rare ebony wood, this serene Buddha statue radiates peace and contemplation.",
            "/assets/images/product/web11.jfif",
            5.0,
        ),
        product(
            12,
            "Colonial Era Chandelier",
            "Home Decor",
            45_000,
            "A breathtaking brass chandelier inspired by Dutch colonial architecture with hand-blown glass shades.",
            "/assets/images/product/web16.jpeg",
            4.9,
        ),
        product(
            13,
            "Celadon Serving Platter",
            "Porcelain",
            9_500,
            "A stunning celadon-glazed platter with subtle crackle finish and botanical engravings.",
            "/assets/images/product/web15.jfif",
            4.7,
        ),
        product(
            14,
            "Coconut Shell Wall Hanging",
            "Wooden Crafts",
            2_500,
            "An eco-friendly wall art piece crafted from polished coconut shells arranged in geometric patterns.",
            "/assets/images/product/web17.jpeg",
            4.4,
        ),
        product(
            15,
            "Batik Silk Cushion Cover",
            "Accessories",
            3_800,
            "Hand-dyed using traditional batik techniques with vibrant peacock and floral motifs on pure silk.",
            "/assets/images/product/web9.jfif",
            4.8,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
