//! Type-safe price representation using decimal arithmetic.
//!
//! All catalog prices are in euros. Amounts are held as [`Decimal`] so cart
//! totals never go through floating point, and serialize as strings
//! (`"49.99"`) in persisted records.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The input was not a parseable decimal amount.
    #[error("not a valid decimal amount: {0:?}")]
    Invalid(String),

    /// The amount was negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount of euros.
///
/// Zero is representable so that records holding free items keep loading;
/// whether zero is acceptable for a given operation is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse a price from its string form.
    ///
    /// Accepts plain decimal notation with a `.` separator (`"49.99"`).
    /// Anything else, including the empty string, is rejected rather than
    /// coerced.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] for unparseable input and
    /// [`PriceError::Negative`] for negative amounts.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| PriceError::Invalid(input.to_owned()))?;
        Self::new(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_decimal_notation() {
        let price = Price::parse("49.99").unwrap();
        assert_eq!(price.amount(), Decimal::new(4999, 2));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let price = Price::parse("  29.99 ").unwrap();
        assert_eq!(price, Price::from_cents(2999));
    }

    #[test]
    fn test_parse_rejects_non_numeric_input() {
        assert!(matches!(Price::parse("gratuit"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse(""), Err(PriceError::Invalid(_))));
        // French comma notation is not silently coerced.
        assert!(matches!(Price::parse("49,99"), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_parse_rejects_negative_amounts() {
        assert_eq!(Price::parse("-1.00"), Err(PriceError::Negative));
    }

    #[test]
    fn test_zero_is_representable_but_not_positive() {
        let price = Price::parse("0.00").unwrap();
        assert!(!price.is_positive());
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(Price::parse("5.1").unwrap(), Price::parse("5.10").unwrap());
    }

    #[test]
    fn test_serializes_as_string() {
        let price = Price::from_cents(4999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"49.99\"");

        let back: Price = serde_json::from_str("\"49.99\"").unwrap();
        assert_eq!(back, price);
    }
}
