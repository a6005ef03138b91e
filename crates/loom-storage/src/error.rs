//! # Storage Error Types
//!
//! Error types for persistence and catalog operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (I/O, quota) or malformed snapshot                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← adds the key and a categorization        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorefrontError (session layer) ← becomes a user-facing notice        │
//! │                                                                         │
//! │  A corrupt snapshot is recoverable: the session resets to an empty     │
//! │  cart and keeps running. Nothing here is fatal to the application.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence and catalog errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A stored snapshot exists but cannot be decoded.
    ///
    /// ## When This Occurs
    /// - A hand-edited or truncated value under the snapshot key
    /// - A snapshot written by an incompatible newer format
    #[error("Corrupt snapshot under '{key}': {reason}")]
    CorruptSnapshot { key: String, reason: String },

    /// The backend failed to read a key.
    #[error("Failed to read '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    /// The backend failed to write a key.
    ///
    /// ## When This Occurs
    /// - Storage quota exhausted
    /// - The backing directory vanished or lost write permission
    #[error("Failed to write '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// The backing store location could not be determined or created.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The product catalog has no entries to serve.
    #[error("No products available")]
    CatalogUnavailable,
}

impl StorageError {
    /// Creates a CorruptSnapshot error for a key.
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::CorruptSnapshot {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a ReadFailed error for a key.
    pub fn read_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::ReadFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a WriteFailed error for a key.
    pub fn write_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::WriteFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
