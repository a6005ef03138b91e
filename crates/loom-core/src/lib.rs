//! # loom-core: Pure Business Logic for the Loom & Lane Storefront
//!
//! This crate is the heart of the storefront. It contains all business logic
//! as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Loom & Lane Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Browser UI                                 │   │
//! │  │    Product Grid ──► Cart Drawer ──► Checkout Summary           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 loom-storefront (session layer)                 │   │
//! │  │    CartStore, ThemeState, notices, badge observers             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loom-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Totals   │  │   │
//! │  │   │  CartLine │  │  TaxCalc  │  │  AddLine  │  │  Policy   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  loom-storage (data access)                     │   │
//! │  │        key-value snapshots, embedded product catalog            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Theme, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The deduplicated, insertion-ordered cart collection
//! - [`pricing`] - Pricing policy and the totals calculator
//! - [`currency`] - User-facing currency formatting and parsing
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input parsing and validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input = same output
//! 2. **No I/O**: storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64) to avoid float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use loom_core::cart::Cart;
//! use loom_core::money::Money;
//! use loom_core::pricing::{PricingPolicy, Totals};
//! use loom_core::types::{Product, ProductId};
//!
//! let elephant = Product {
//!     id: ProductId::new(1),
//!     name: "Cinnamon Wood Elephant".to_string(),
//!     category: "Wooden Crafts".to_string(),
//!     price: Money::from_rupees(8_500),
//!     description: String::new(),
//!     image: String::new(),
//!     rating: 4.8,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_line(&elephant, 2).unwrap();
//!
//! let totals = Totals::compute(cart.lines(), &PricingPolicy::default());
//! assert_eq!(totals.subtotal, Money::from_rupees(17_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod currency;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use loom_core::Money` instead of
// `use loom_core::money::Money`

pub use cart::{AddOutcome, Cart};
pub use currency::CurrencyFormat;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PricingPolicy, TaxRate, Totals};
pub use types::{CartLine, Product, ProductId, Theme};
