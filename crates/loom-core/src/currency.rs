//! # Currency Formatting
//!
//! User-facing rendering of [`Money`] values and the inverse parser.
//!
//! The storefront sells in a single currency, so the format is fixed:
//! currency-code prefix, comma-grouped thousands, always two fractional
//! digits (`LKR 12,500.00`). Parsing strips everything that is not a digit,
//! decimal point, or minus sign, so it accepts whatever a price label,
//! an input field, or a clipboard paste throws at it.
//!
//! Formatting and parsing are exact inverses for any non-negative amount
//! with at most two decimal places; amounts never touch floating point.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Currency Format
// =============================================================================

/// Fixed-currency display format.
///
/// ## Example
/// ```rust
/// use loom_core::currency::CurrencyFormat;
/// use loom_core::money::Money;
///
/// let lkr = CurrencyFormat::default();
/// assert_eq!(lkr.format(Money::from_rupees(12_500)), "LKR 12,500.00");
/// assert_eq!(lkr.parse("LKR 12,500.00"), Money::from_rupees(12_500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// ISO 4217 currency code used as the display prefix.
    pub code: String,
}

impl CurrencyFormat {
    /// Creates a format for the given currency code.
    pub fn new(code: impl Into<String>) -> Self {
        CurrencyFormat { code: code.into() }
    }

    /// Renders an amount as `CODE 1,234.56`.
    ///
    /// Two fractional digits are always shown; thousands are comma-grouped.
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{} {}.{:02}",
            sign,
            self.code,
            group_thousands(amount.rupees().abs()),
            amount.cents_part()
        )
    }

    /// Parses a formatted amount back into [`Money`].
    ///
    /// Every character outside `[0-9.-]` is stripped first, so currency
    /// codes, symbols, grouping commas, and whitespace are all tolerated.
    /// Input that doesn't reduce to a number parses as zero. A third
    /// fractional digit rounds the cent, matching how sub-cent amounts
    /// would display.
    pub fn parse(&self, input: &str) -> Money {
        let cleaned: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        parse_cleaned(&cleaned).unwrap_or_else(Money::zero)
    }
}

impl Default for CurrencyFormat {
    /// Sri Lankan rupees, the storefront's only currency.
    fn default() -> Self {
        CurrencyFormat::new("LKR")
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Inserts comma separators every three digits: 1000000 -> "1,000,000".
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parses a pre-cleaned numeric string (digits, at most one leading minus,
/// at most one decimal point) into cents. `None` for anything else.
fn parse_cleaned(cleaned: &str) -> Option<Money> {
    if cleaned.is_empty() {
        return None;
    }

    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned),
    };
    if rest.contains('-') {
        return None;
    }

    let mut parts = rest.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    if frac_part.contains('.') {
        return None;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let whole: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    // First two fractional digits are cents; a third digit rounds.
    let frac_digits: Vec<i64> = frac_part
        .chars()
        .map(|c| i64::from(c.to_digit(10).unwrap_or(0)))
        .collect();
    let mut cents = 0;
    if let Some(d) = frac_digits.first() {
        cents += d * 10;
    }
    if let Some(d) = frac_digits.get(1) {
        cents += d;
    }
    if let Some(d) = frac_digits.get(2) {
        if *d >= 5 {
            cents += 1;
        }
    }

    let total = whole.checked_mul(100)?.checked_add(cents)?;
    Some(Money::from_cents(if negative { -total } else { total }))
}

// =============================================================================
// Unit Tests
// =============================================================================
