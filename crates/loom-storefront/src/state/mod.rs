//! # State Module
//!
//! Per-session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, each concern gets its
//! own state type:
//!
//! 1. **Better Separation of Concerns**: each type has a single responsibility
//! 2. **Easier Testing**: the cart tests never touch the theme flag
//! 3. **Clearer Signatures**: a UI bridge declares exactly what it needs
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session (lib.rs)                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │                  │                  │                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartStore   │  │  ThemeState  │  │  SessionConfig   │              │
//! │  │              │  │              │  │                  │              │
//! │  │  lines,      │  │  light/dark  │  │  pricing,        │              │
//! │  │  persistence,│  │  flag        │  │  currency,       │              │
//! │  │  observers   │  │              │  │  store name      │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  MUTATION DISCIPLINE:                                                  │
//! │  • CartStore/ThemeState: &mut self - serialized by construction        │
//! │  • SessionConfig: read-only after construction                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod theme;

pub use cart::CartStore;
pub use config::SessionConfig;
pub use theme::ThemeState;
