//! Product types.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::Money;

/// Stock level at or below which a product counts as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product in the catalog.
///
/// Immutable from the cart's perspective; only admin operations on the
/// catalog change it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-sale price, shown struck through when greater than `price`.
    pub original_price: Option<Money>,
    /// Category name (e.g., "Smartphones").
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Units in stock.
    pub stock: u32,
    /// Average customer rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub reviews: u32,
    /// Shown on the featured shelf.
    pub featured: bool,
    /// Marked as on sale.
    pub on_sale: bool,
    /// Image reference (path or URL); never fetched by this crate.
    pub image: String,
}

impl Product {
    /// Create a product with the given id, name and price; everything else
    /// starts empty or false.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            category: String::new(),
            brand: String::new(),
            stock: 0,
            rating: 0.0,
            reviews: 0,
            featured: false,
            on_sale: false,
            image: String::new(),
        }
    }

    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is at or below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }

    /// Check if the product is on sale, either via the flag or because a
    /// higher original price is present.
    pub fn is_on_sale(&self) -> bool {
        self.on_sale
            || self
                .original_price
                .map(|op| op.cents > self.price.cents)
                .unwrap_or(false)
    }

    /// Savings versus the original price, when discounted.
    pub fn savings(&self) -> Option<Money> {
        self.original_price.and_then(|op| {
            if op.cents > self.price.cents {
                op.sub_floor_zero(&self.price)
            } else {
                None
            }
        })
    }

    /// Discount percentage versus the original price, when discounted.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op.cents > self.price.cents {
                let saved = op.cents - self.price.cents;
                Some((saved as f64 / op.cents as f64) * 100.0)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        let mut p = Product::new("1", "iPhone 15 Pro", Money::new(120000, Currency::USD));
        p.stock = 15;
        p
    }

    #[test]
    fn test_in_stock() {
        let mut p = product();
        assert!(p.in_stock());
        assert!(!p.is_low_stock());

        p.stock = 0;
        assert!(!p.in_stock());
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_on_sale_via_original_price() {
        let mut p = product();
        assert!(!p.is_on_sale());

        p.original_price = Some(Money::new(129900, Currency::USD));
        assert!(p.is_on_sale());
        assert_eq!(p.savings().unwrap().cents, 9900);
    }

    #[test]
    fn test_on_sale_flag_alone() {
        let mut p = product();
        p.on_sale = true;
        assert!(p.is_on_sale());
        assert!(p.savings().is_none());
    }

    #[test]
    fn test_discount_percentage() {
        let mut p = Product::new("2", "AirPods Pro 2", Money::new(29900, Currency::USD));
        p.original_price = Some(Money::new(34900, Currency::USD));

        let pct = p.discount_percentage().unwrap();
        assert!((pct - 14.33).abs() < 0.01);
    }
}
