//! # Cart
//!
//! The pure, in-memory shopping cart: an insertion-ordered collection of
//! lines, deduplicated by product id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action            Operation              Collection Change     │
//! │  ──────────────            ─────────              ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_line() ──────────► push / qty += n      │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► lines[i].qty = n     │
//! │                                                                         │
//! │  Click remove ───────────► remove_line() ───────► lines.remove(i)      │
//! │                                                                         │
//! │  Click clear ────────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  This type is pure: persistence and notification live in the           │
//! │  storefront session layer, which wraps every mutation.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartLine, Product, ProductId};

// =============================================================================
// Add Outcome
// =============================================================================

/// What happened when a product was added.
///
/// The UI wording differs between the two cases ("added to cart" versus
/// "quantity updated"), so the cart reports which path it took. Either way
/// the variant carries a copy of the resulting line.
#[derive(Debug, Clone)]
pub enum AddOutcome {
    /// A new line was appended.
    Added(CartLine),
    /// An existing line's quantity was incremented in place.
    Incremented(CartLine),
}

impl AddOutcome {
    /// The resulting line, whichever path was taken.
    pub fn line(&self) -> &CartLine {
        match self {
            AddOutcome::Added(line) | AddOutcome::Incremented(line) => line,
        }
    }

    /// Consumes the outcome, yielding the resulting line.
    pub fn into_line(self) -> CartLine {
        match self {
            AddOutcome::Added(line) | AddOutcome::Incremented(line) => line,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product increments the
///   existing line's quantity, in place)
/// - `quantity >= 1` on every line; driving a quantity below 1 removes the
///   line instead
/// - Insertion order is preserved: new products append, updates keep their
///   position
///
/// The persisted snapshot is the line array alone (see the storage layer);
/// the cart itself never hits the wire.
#[derive(Debug, Clone)]
pub struct Cart {
    /// Lines in the cart, insertion-ordered.
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuilds a cart from previously persisted lines.
    ///
    /// Hydration trusts the snapshot's ordering; dedup by id was enforced
    /// when the snapshot was written.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart {
            lines,
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increments its quantity if present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += `quantity`, position unchanged
    /// - Product not in cart: new line appended, snapshotting the product
    ///
    /// ## Errors
    /// `ValidationError::MustBePositive` if `quantity < 1`. The cart is
    /// untouched on error.
    pub fn add_line(&mut self, product: &Product, quantity: i64) -> CoreResult<AddOutcome> {
        if quantity < 1 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity += quantity;
            return Ok(AddOutcome::Incremented(line.clone()));
        }

        let line = CartLine::from_product(product, quantity);
        self.lines.push(line.clone());
        Ok(AddOutcome::Added(line))
    }

    /// Sets the quantity of a line to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity < 1`: delegates to [`Cart::remove_line`]
    /// - Line absent: `CoreError::NotInCart`
    ///
    /// Returns the removed line when the quantity floor triggered removal,
    /// `None` for a plain update.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        quantity: i64,
    ) -> CoreResult<Option<CartLine>> {
        if quantity < 1 {
            return self.remove_line(id).map(Some);
        }

        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(None)
            }
            None => Err(CoreError::NotInCart(id)),
        }
    }

    /// Removes a line by product id, returning it.
    ///
    /// The returned line carries the name the UI announces.
    pub fn remove_line(&mut self, id: ProductId) -> CoreResult<CartLine> {
        match self.lines.iter().position(|l| l.id == id) {
            Some(index) => Ok(self.lines.remove(index)),
            None => Err(CoreError::NotInCart(id)),
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the lines, insertion-ordered.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (0 for an empty cart).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (before tax and shipping).
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            category: "Wooden Crafts".to_string(),
            price: Money::from_rupees(rupees),
            description: format!("Description {}", id),
            image: format!("/assets/images/product/web{}.jfif", id),
            rating: 4.5,
        }
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        let outcome = cart.add_line(&test_product(1, 8_500), 2).unwrap();

        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(outcome.line().quantity, 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal(), Money::from_rupees(17_000));
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 8_500);

        cart.add_line(&product, 2).unwrap();
        let outcome = cart.add_line(&product, 3).unwrap();

        assert!(matches!(outcome, AddOutcome::Incremented(_)));
        assert_eq!(outcome.line().quantity, 5);
        assert_eq!(cart.line_count(), 1); // still one distinct line
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 8_500), 1).unwrap();
        cart.add_line(&test_product(2, 12_500), 1).unwrap();
        cart.add_line(&test_product(1, 8_500), 2).unwrap();

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add_line(&test_product(1, 8_500), 0).is_err());
        assert!(cart.add_line(&test_product(1, 8_500), -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 8_500), 2).unwrap();

        let removed = cart.update_quantity(ProductId::new(1), 7).unwrap();
        assert!(removed.is_none());
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 8_500), 2).unwrap();

        let removed = cart.update_quantity(ProductId::new(1), 0).unwrap();
        assert_eq!(removed.unwrap().id, ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_line() {
        let mut cart = Cart::new();
        let err = cart.update_quantity(ProductId::new(9), 2).unwrap_err();
        assert!(matches!(err, CoreError::NotInCart(_)));
    }

    #[test]
    fn test_remove_line_returns_line() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 8_500), 2).unwrap();

        let line = cart.remove_line(ProductId::new(1)).unwrap();
        assert_eq!(line.name, "Product 1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_line_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 8_500), 2).unwrap();

        assert!(cart.remove_line(ProductId::new(99)).is_err());
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 8_500), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
