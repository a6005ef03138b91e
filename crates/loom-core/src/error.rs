//! # Error Types
//!
//! Domain-specific error types for loom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loom-core errors (this file)                                          │
//! │  ├── CoreError        - Cart and catalog domain errors                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  loom-storage errors (separate crate)                                  │
//! │  └── StorageError     - Snapshot read/write failures                   │
//! │                                                                         │
//! │  loom-storefront errors (session layer)                                │
//! │  └── StorefrontError  - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StorefrontError → UI notice       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, raw input, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent cart rule violations or catalog lookups that came
/// up empty. They should be caught and translated to user-facing notices.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - The requested id has no catalog entry
    /// - A stale UI element references a product that was removed
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart has no line for the requested product.
    ///
    /// ## When This Occurs
    /// - Removing or re-quantifying an item that was never added
    /// - A second remove click racing the first one's re-render
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input crossing the UI boundary doesn't meet
/// requirements. Raw values are parsed and validated once, here, before any
/// mutation is attempted; nothing downstream coerces loosely-typed input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A product id that is not a positive integer.
    #[error("invalid product id: {raw:?}")]
    InvalidProductId { raw: String },

    /// A quantity that is not an integer.
    #[error("invalid quantity: {raw:?}")]
    InvalidQuantity { raw: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
