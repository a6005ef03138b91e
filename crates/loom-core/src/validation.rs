//! # Validation Module
//!
//! Boundary validation for input arriving from the UI.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI (forms, buttons)                                          │
//! │  ├── Basic format checks                                               │
//! │  └── Immediate feedback                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - parse raw input exactly once                   │
//! │  ├── "3"  → ProductId(3)                                               │
//! │  ├── "0", "-1", "abc" → typed ValidationError                          │
//! │  └── Past this point everything is typed; nothing coerces loosely      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart rules (quantity floor, dedup) in loom_core::cart        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validate-then-mutate: every parser here runs before any state change, so
//! malformed input can never leave the cart half-updated.

use crate::error::ValidationError;
use crate::types::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a raw product id string into a [`ProductId`].
///
/// ## Rules
/// - Must be a base-10 positive integer (zero is not a valid id)
/// - Surrounding whitespace is tolerated; nothing else is
///
/// ## Example
/// ```rust
/// use loom_core::validation::parse_product_id;
///
/// assert_eq!(parse_product_id(" 7 ").unwrap().get(), 7);
/// assert!(parse_product_id("0").is_err());
/// assert!(parse_product_id("7.5").is_err());
/// assert!(parse_product_id("elephant").is_err());
/// ```
pub fn parse_product_id(raw: &str) -> ValidationResult<ProductId> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    match trimmed.parse::<u32>() {
        Ok(id) if id > 0 => Ok(ProductId::new(id)),
        _ => Err(ValidationError::InvalidProductId {
            raw: raw.to_string(),
        }),
    }
}

/// Parses a raw quantity string into an integer.
///
/// Only parses; range rules live in [`validate_quantity`] so that callers
/// holding an already-numeric quantity share the same check.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidQuantity {
            raw: raw.to_string(),
        })
}

/// Validates a quantity for an add operation.
///
/// ## Rules
/// - Must be at least 1 (an explicit quantity of zero is not an add)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns all products)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
