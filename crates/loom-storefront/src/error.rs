//! # Session Error Type
//!
//! Unified error type for session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in the Storefront                            │
//! │                                                                         │
//! │  UI                          Session Layer                              │
//! │  ──                          ─────────────                              │
//! │                                                                         │
//! │  add-to-cart click                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  CartStore operation                                             │  │
//! │  │  Result<T, StorefrontError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage failure? ── StorageError::WriteFailed ──┐               │  │
//! │  │         │                                        │               │  │
//! │  │         ▼                                        ▼               │  │
//! │  │  Domain failure? ── CoreError::NotInCart ── StorefrontError ───► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Expected failures never escape as panics: every operation returns a   │
//! │  failure signal and has already pushed a user-facing notice.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The error is `Serialize` so a UI bridge can hand it to the frontend as
//! `{"code": "NOT_FOUND", "message": "Product not found: 99"}`.

use serde::Serialize;
use thiserror::Error;

use loom_core::CoreError;
use loom_storage::StorageError;

/// Error returned from session operations.
#[derive(Debug, Clone, Serialize, Error)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct StorefrontError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session operations.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await bridge.addItem(id, qty);
/// } catch (e) {
///   switch (e.code) {
///     case 'NOT_FOUND':
///       highlightMissingProduct();
///       break;
///     case 'VALIDATION_ERROR':
///       markQuantityField(e.message);
///       break;
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not found in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart rule violation (line absent, etc.)
    CartError,

    /// Persistence layer failed
    StorageError,
}

impl StorefrontError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StorefrontError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StorefrontError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts domain errors to session errors.
impl From<CoreError> for StorefrontError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::ProductNotFound(_) => {
                StorefrontError::new(ErrorCode::NotFound, err.to_string())
            }
            CoreError::NotInCart(_) => StorefrontError::new(ErrorCode::CartError, err.to_string()),
            CoreError::Validation(_) => StorefrontError::validation(err.to_string()),
        }
    }
}

/// Converts storage errors to session errors.
impl From<StorageError> for StorefrontError {
    fn from(err: StorageError) -> Self {
        // Log the specifics; the frontend gets the category and message
        tracing::error!(error = %err, "storage failure surfaced to session");
        StorefrontError::new(ErrorCode::StorageError, err.to_string())
    }
}
