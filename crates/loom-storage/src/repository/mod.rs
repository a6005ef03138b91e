//! # Repository Module
//!
//! Typed persistence over the raw key-value backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Session layer                                                          │
//! │       │                                                                 │
//! │       │  store.cart().save(cart.lines())                                │
//! │       ▼                                                                 │
//! │  CartRepository                                                         │
//! │  ├── load(&self)  → absent / lines / CorruptSnapshot                   │
//! │  └── save(&self, lines)                                                 │
//! │       │                                                                 │
//! │       │  JSON string under a stable key                                 │
//! │       ▼                                                                 │
//! │  dyn KeyValueStore                                                      │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Encoding lives in one place                                          │
//! │  • Easy to test against the in-memory backend                           │
//! │  • Corruption is a typed outcome, not a panic                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`cart::CartRepository`] - the persisted cart snapshot
//! - [`theme::ThemeRepository`] - the two-value theme flag

pub mod cart;
pub mod theme;
