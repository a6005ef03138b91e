//! # Pricing
//!
//! The pricing policy and the totals calculator.
//!
//! ## Totals Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How Totals Are Derived                              │
//! │                                                                         │
//! │  cart lines ──► subtotal = Σ price × quantity                           │
//! │                     │                                                   │
//! │                     ├──► tax = subtotal × tax_rate                      │
//! │                     │                                                   │
//! │                     ├──► shipping = subtotal >= threshold ? 0 : flat    │
//! │                     │                                                   │
//! │                     └──► total = subtotal + tax + shipping              │
//! │                                                                         │
//! │  Totals are derived on demand from the current lines - never cached,    │
//! │  never persisted, so they cannot go stale.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CartLine;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the storefront's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// The storefront pricing configuration.
///
/// ## Fields
/// - `tax_rate` applies to the subtotal
/// - `shipping_cost` is a flat fee charged below the free-shipping threshold
/// - `free_shipping_threshold` waives shipping at or above this subtotal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Tax applied to the subtotal.
    pub tax_rate: TaxRate,

    /// Flat shipping fee below the threshold.
    pub shipping_cost: Money,

    /// Subtotal at or above which shipping is waived.
    pub free_shipping_threshold: Money,
}

impl Default for PricingPolicy {
    /// The storefront's launch policy: 5% tax, LKR 350 flat shipping,
    /// free shipping from LKR 50,000.
    fn default() -> Self {
        PricingPolicy {
            tax_rate: TaxRate::from_bps(500),
            shipping_cost: Money::from_rupees(350),
            free_shipping_threshold: Money::from_rupees(50_000),
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived cart totals.
///
/// Never persisted and never cached: callers recompute from the current
/// lines every time they need figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of line totals, before tax and shipping.
    pub subtotal: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// Shipping charge (zero when the threshold is met).
    pub shipping: Money,

    /// Grand total: subtotal + tax + shipping.
    pub total: Money,

    /// Total quantity across all lines.
    pub item_count: i64,

    /// Whether the subtotal qualified for free shipping.
    pub free_shipping: bool,
}

impl Totals {
    /// Derives totals from cart lines under a pricing policy.
    ///
    /// Pure function: same lines and policy always produce the same totals,
    /// and nothing is mutated.
    ///
    /// ## Example
    /// ```rust
    /// use loom_core::money::Money;
    /// use loom_core::pricing::{PricingPolicy, Totals};
    ///
    /// let totals = Totals::compute(&[], &PricingPolicy::default());
    /// assert_eq!(totals.subtotal, Money::zero());
    /// assert_eq!(totals.item_count, 0);
    /// // An empty cart still prices shipping below the threshold.
    /// assert_eq!(totals.shipping, Money::from_rupees(350));
    /// ```
    pub fn compute(lines: &[CartLine], policy: &PricingPolicy) -> Totals {
        let subtotal = lines
            .iter()
            .map(CartLine::line_total)
            .fold(Money::zero(), |acc, t| acc + t);

        let tax = subtotal.calculate_tax(policy.tax_rate);

        // Boundary is inclusive: a subtotal exactly at the threshold ships free.
        let free_shipping = subtotal >= policy.free_shipping_threshold;
        let shipping = if free_shipping {
            Money::zero()
        } else {
            policy.shipping_cost
        };

        Totals {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            item_count: lines.iter().map(|l| l.quantity).sum(),
            free_shipping,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
