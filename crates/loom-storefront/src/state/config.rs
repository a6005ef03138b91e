//! # Session Configuration
//!
//! Configuration assembled at session construction.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LOOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after construction, so the session shares it
//! freely without locking.

use serde::{Deserialize, Serialize};

use loom_core::{CurrencyFormat, Money, PricingPolicy, TaxRate};

/// Storefront session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Store name (displayed in the header and the page loader).
    pub store_name: String,

    /// Display currency (code-prefixed, two fractional digits).
    pub currency: CurrencyFormat,

    /// Tax, shipping, and free-shipping threshold.
    pub pricing: PricingPolicy,
}

impl Default for SessionConfig {
    /// The launch configuration: LKR pricing with 5% tax, LKR 350 flat
    /// shipping, free shipping from LKR 50,000.
    fn default() -> Self {
        SessionConfig {
            store_name: "Loom & Lane".to_string(),
            currency: CurrencyFormat::default(),
            pricing: PricingPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LOOM_STORE_NAME`: override the store name
    /// - `LOOM_CURRENCY_CODE`: override the display currency code
    /// - `LOOM_TAX_RATE`: override the tax percentage (e.g. "5" or "7.5")
    /// - `LOOM_SHIPPING_COST`: override the flat shipping fee, whole rupees
    /// - `LOOM_FREE_SHIPPING_THRESHOLD`: override the threshold, whole rupees
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        if let Ok(store_name) = std::env::var("LOOM_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(code) = std::env::var("LOOM_CURRENCY_CODE") {
            config.currency = CurrencyFormat::new(code);
        }

        if let Ok(raw) = std::env::var("LOOM_TAX_RATE") {
            if let Ok(pct) = raw.parse::<f64>() {
                config.pricing.tax_rate = TaxRate::from_percentage(pct);
            }
        }

        if let Ok(raw) = std::env::var("LOOM_SHIPPING_COST") {
            if let Ok(rupees) = raw.parse::<i64>() {
                config.pricing.shipping_cost = Money::from_rupees(rupees);
            }
        }

        if let Ok(raw) = std::env::var("LOOM_FREE_SHIPPING_THRESHOLD") {
            if let Ok(rupees) = raw.parse::<i64>() {
                config.pricing.free_shipping_threshold = Money::from_rupees(rupees);
            }
        }

        config
    }

    /// Formats an amount in the session currency.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = SessionConfig::default();
    /// assert_eq!(config.format_currency(Money::from_rupees(8_500)), "LKR 8,500.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        self.currency.format(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.store_name, "Loom & Lane");
        assert_eq!(config.currency.code, "LKR");
        assert_eq!(config.pricing.tax_rate, TaxRate::from_bps(500));
        assert_eq!(config.pricing.shipping_cost, Money::from_rupees(350));
        assert_eq!(
            config.pricing.free_shipping_threshold,
            Money::from_rupees(50_000)
        );
    }

    #[test]
    fn test_format_currency() {
        let config = SessionConfig::default();
        assert_eq!(
            config.format_currency(Money::from_rupees(8_500)),
            "LKR 8,500.00"
        );
    }
}
