//! Coupon and discount types.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Value of a coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CouponValue {
    /// Percentage off the subtotal (0.0 - 100.0).
    Percentage(f64),
    /// Fixed amount off.
    Fixed(Money),
}

impl CouponValue {
    /// Calculate the discount for a given subtotal.
    ///
    /// A fixed amount never exceeds the subtotal, so the resulting total
    /// cannot go negative.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        match self {
            CouponValue::Percentage(percent) => subtotal.percentage(*percent),
            CouponValue::Fixed(amount) => {
                if amount.currency != subtotal.currency {
                    return Money::zero(subtotal.currency);
                }
                amount.min(&subtotal)
            }
        }
    }
}

/// A discount coupon.
///
/// Codes are matched case-insensitively; at most one coupon can be applied
/// to a cart at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Coupon code (e.g., "TECH20").
    pub code: String,
    /// What the coupon is worth.
    pub value: CouponValue,
    /// Minimum qualifying subtotal, pre-discount.
    pub min_subtotal: Option<Money>,
    /// Whether the coupon can currently be applied.
    pub active: bool,
}

impl Coupon {
    /// Create a percentage coupon.
    pub fn percentage(code: impl Into<String>, percent: f64) -> Self {
        Self {
            code: code.into(),
            value: CouponValue::Percentage(percent),
            min_subtotal: None,
            active: true,
        }
    }

    /// Create a fixed-amount coupon.
    pub fn fixed(code: impl Into<String>, amount: Money) -> Self {
        Self {
            code: code.into(),
            value: CouponValue::Fixed(amount),
            min_subtotal: None,
            active: true,
        }
    }

    /// Require a minimum qualifying subtotal.
    pub fn with_min_subtotal(mut self, amount: Money) -> Self {
        self.min_subtotal = Some(amount);
        self
    }

    /// Mark the coupon inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Check whether this coupon's code matches the given input.
    pub fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// Check whether a cart with the given subtotal qualifies.
    pub fn qualifies(&self, subtotal: Money) -> bool {
        if !self.active {
            return false;
        }
        match self.min_subtotal {
            Some(min) => subtotal.currency == min.currency && subtotal.cents >= min.cents,
            None => true,
        }
    }

    /// Discount this coupon grants on the given subtotal.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        self.value.discount_for(subtotal)
    }

    /// Short human-readable description of the value (e.g., "20%", "$50.00").
    pub fn value_display(&self) -> String {
        match &self.value {
            CouponValue::Percentage(p) => format!("{p}%"),
            CouponValue::Fixed(amount) => amount.display(),
        }
    }
}

/// The set of known coupons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book from a coupon list.
    pub fn with_coupons(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// Add a coupon.
    pub fn add(&mut self, coupon: Coupon) {
        self.coupons.push(coupon);
    }

    /// Case-insensitive lookup restricted to active coupons.
    pub fn find_active(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.active && c.matches(code))
    }

    /// Iterate over all coupons, active or not.
    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_percentage_discount() {
        let coupon = Coupon::percentage("TECH20", 20.0);
        let discount = coupon.discount_for(Money::new(20_000, Currency::USD));
        assert_eq!(discount.cents, 4_000);
    }

    #[test]
    fn test_fixed_discount() {
        let coupon = Coupon::fixed("REGALO50", Money::new(5_000, Currency::USD));
        let discount = coupon.discount_for(Money::new(20_000, Currency::USD));
        assert_eq!(discount.cents, 5_000);
    }

    #[test]
    fn test_fixed_discount_capped_at_subtotal() {
        let coupon = Coupon::fixed("BIG", Money::new(10_000, Currency::USD));
        let discount = coupon.discount_for(Money::new(3_000, Currency::USD));
        assert_eq!(discount.cents, 3_000);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let coupon = Coupon::percentage("Bienvenido", 10.0);
        assert!(coupon.matches("BIENVENIDO"));
        assert!(coupon.matches("bienvenido"));
        assert!(coupon.matches(" bienvenido "));
        assert!(!coupon.matches("bienvenida"));
    }

    #[test]
    fn test_qualifies_minimum() {
        let coupon = Coupon::percentage("TECH20", 20.0)
            .with_min_subtotal(Money::new(10_000, Currency::USD));

        assert!(coupon.qualifies(Money::new(10_000, Currency::USD)));
        assert!(!coupon.qualifies(Money::new(9_999, Currency::USD)));
    }

    #[test]
    fn test_inactive_never_qualifies() {
        let coupon = Coupon::percentage("OLD", 50.0).deactivated();
        assert!(!coupon.qualifies(Money::new(100_000, Currency::USD)));
    }

    #[test]
    fn test_book_skips_inactive() {
        let book = CouponBook::with_coupons(vec![
            Coupon::percentage("OLD", 50.0).deactivated(),
            Coupon::percentage("NEW", 10.0),
        ]);

        assert!(book.find_active("old").is_none());
        assert!(book.find_active("new").is_some());
    }
}
