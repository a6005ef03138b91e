//! # Cart Observers
//!
//! The explicit post-mutation hook list on the cart store.
//!
//! ## Observer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Observer Invocation                                  │
//! │                                                                         │
//! │  add_item / remove_item / update_quantity / clear / initialize         │
//! │       │                                                                 │
//! │       ├── mutate cart                                                   │
//! │       ├── persist snapshot                                              │
//! │       │                                                                 │
//! │       └── for each observer, synchronously:                            │
//! │              cart_changed(item_count)   ← badge presenter redraws      │
//! │                                                                         │
//! │  add_item additionally fires, on success only:                         │
//! │              item_added(&line)          ← add-to-cart confirmation     │
//! │                                           animation hook               │
//! │                                                                         │
//! │  Observers are registered explicitly on the store. Nothing wraps or    │
//! │  monkey-patches the mutation entry points after the fact.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use loom_core::CartLine;

/// Receives cart change events, synchronously, after the mutation settled.
///
/// Both methods default to no-ops so an observer implements only what it
/// watches: a badge presenter cares about `cart_changed`, an add-to-cart
/// animation only about `item_added`.
pub trait CartObserver: Send + Sync {
    /// The cart's total item count changed (fires after every successful
    /// mutation, including hydration). A presenter showing the count hides
    /// itself when the count is 0.
    fn cart_changed(&self, _item_count: i64) {}

    /// A line was added or incremented via `add_item`. Fires after the
    /// snapshot is persisted and `cart_changed` has been published.
    fn item_added(&self, _line: &CartLine) {}
}
