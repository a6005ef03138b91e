//! # Domain Types
//!
//! Core domain types used throughout the Loom & Lane storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ProductId) │   │  id (FK)        │   │  Light          │       │
//! │  │  name           │   │  price snapshot │   │  Dark           │       │
//! │  │  category       │   │  quantity >= 1  │   └─────────────────┘       │
//! │  │  price (Money)  │   │  added_at       │                             │
//! │  │  rating [0,5]   │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartLine` freezes the product's name, category, price and image at the
//! moment it is added. A later catalog change never rewrites a cart the
//! shopper has already built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a catalog product.
///
/// Catalog ids are small positive integers. The UI boundary parses raw input
/// into this type exactly once ([`crate::validation::parse_product_id`]);
/// everything past that point works with the typed id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product id from a raw integer.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ProductId(raw)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Products are immutable and externally supplied; the storefront never
/// creates or edits them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Category the product is filed under ("Porcelain", "Home Decor", ...).
    pub category: String,

    /// Price at listing time, whole rupees.
    pub price: Money,

    /// Marketing description, also searched.
    pub description: String,

    /// Relative path of the product photograph.
    pub image: String,

    /// Customer rating in [0, 5].
    pub rating: f32,
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a distinct product and its quantity.
///
/// ## Invariants
/// - At most one line per product id within a cart
/// - `quantity >= 1`; a mutation that would drive it below 1 removes the
///   line instead (enforced by [`crate::cart::Cart`])
///
/// ## Persisted Form
/// Serializes to exactly `{id, name, category, price, image, quantity}`.
/// `added_at` is in-memory bookkeeping only and is re-stamped on hydration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id (foreign key into the catalog).
    pub id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Price at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub price: Money,

    /// Image path at time of adding (frozen).
    pub image: String,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this line was added.
    #[serde(skip, default = "Utc::now")]
    #[ts(skip)]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog entry changes
    /// later, this line retains the original price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// The two-value display theme preference.
///
/// Persisted as the literal strings `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default daylight palette.
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// The stored string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything but the two literals is `None`.
    pub fn from_str_opt(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Returns the other theme.
    pub const fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Cinnamon Wood Elephant".to_string(),
            category: "Wooden Crafts".to_string(),
            price: Money::from_rupees(8_500),
            description: "Handcarved from authentic Ceylon cinnamon wood.".to_string(),
            image: "/assets/images/product/web1.jfif".to_string(),
            rating: 4.8,
        }
    }

    #[test]
    fn test_cart_line_snapshots_product() {
        let product = sample_product();
        let line = CartLine::from_product(&product, 3);

        assert_eq!(line.id, product.id);
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.line_total(), Money::from_rupees(25_500));
    }

    #[test]
    fn test_cart_line_persisted_fields() {
        let line = CartLine::from_product(&sample_product(), 2);
        let json = serde_json::to_value(&line).unwrap();
        let obj = json.as_object().unwrap();

        // The snapshot format is fixed: six fields, no timestamps.
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["category", "id", "image", "name", "price", "quantity"]
        );
    }

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::from_str_opt("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str_opt("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str_opt("sepia"), None);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(12).to_string(), "12");
    }
}
