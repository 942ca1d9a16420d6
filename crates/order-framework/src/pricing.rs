//! # Pricing Rules
//!
//! Per order: discount first, then tax on the discounted price.
//!
//! ```text
//! price(p) = tax(discount(p))
//! discount(p) = p > threshold ? p * discount_factor : p
//! tax(p) = p * tax_factor
//! ```
//!
//! The threshold comparison is strict: an amount equal to the threshold is not
//! discounted.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DISCOUNT_THRESHOLD: f64 = 1000.0;
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;
pub const DEFAULT_TAX_FACTOR: f64 = 1.1;

/// Discount and tax parameters.
///
/// Deserialises with `#[serde(default)]`, so a document only needs the fields
/// it wants to change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub discount_threshold: f64,
    pub discount_factor: f64,
    pub tax_factor: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            discount_threshold: DEFAULT_DISCOUNT_THRESHOLD,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            tax_factor: DEFAULT_TAX_FACTOR,
        }
    }
}

impl PricingPolicy {
    pub fn apply_discount(&self, price: f64) -> f64 {
        if price > self.discount_threshold {
            price * self.discount_factor
        } else {
            price
        }
    }

    pub fn apply_tax(&self, price: f64) -> f64 {
        price * self.tax_factor
    }

    /// Final price of a single order amount.
    pub fn price(&self, amount: f64) -> f64 {
        self.apply_tax(self.apply_discount(amount))
    }

    /// Left-to-right sum of [`price`](Self::price) over `amounts`.
    pub fn total<I>(&self, amounts: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        amounts
            .into_iter()
            .fold(0.0, |total, amount| total + self.price(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case(500.0, 500.0)]
    #[case(1000.0, 1000.0)]
    #[case(1000.01, 1000.01 * 0.9)]
    #[case(1500.0, 1350.0)]
    fn test_discount_threshold_is_strict(#[case] price: f64, #[case] expected: f64) {
        let policy = PricingPolicy::default();
        assert!((policy.apply_discount(price) - expected).abs() < EPSILON);
    }

    #[rstest]
    #[case(500.0, 550.0)]
    #[case(1000.0, 1100.0)]
    #[case(1500.0, 1485.0)]
    fn test_tax_applies_after_discount(#[case] amount: f64, #[case] expected: f64) {
        let policy = PricingPolicy::default();
        assert!((policy.price(amount) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_total_of_nothing_is_zero() {
        assert_eq!(PricingPolicy::default().total(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            discount_threshold: 100.0,
            discount_factor: 0.5,
            tax_factor: 1.0,
        };
        assert!((policy.total([50.0, 200.0]) - 150.0).abs() < EPSILON);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let policy: PricingPolicy = serde_json::from_str(r#"{ "tax_factor": 1.2 }"#).unwrap();
        assert_eq!(policy.tax_factor, 1.2);
        assert_eq!(policy.discount_threshold, DEFAULT_DISCOUNT_THRESHOLD);
        assert_eq!(policy.discount_factor, DEFAULT_DISCOUNT_FACTOR);
    }
}
