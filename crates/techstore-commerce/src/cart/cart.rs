//! Cart and cart line types.

use serde::{Deserialize, Serialize};

use crate::cart::{CartTotals, Coupon, CouponBook};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// One product/quantity pairing in a cart.
///
/// Name and unit price are snapshots taken when the line was added; later
/// catalog edits do not change lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Extended price for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A shopping cart: an ordered sequence of lines plus an optional applied
/// coupon.
///
/// Mutations never fail on bad input. Unknown ids are ignored, zero
/// quantities remove, and invalid coupon codes report `false` — the cart
/// cannot reach an invalid state through misuse alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    coupon: Option<Coupon>,
    currency: Currency,
    updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            coupon: None,
            currency,
            updated_at: current_timestamp(),
        }
    }

    /// Rebuild a cart from persisted parts.
    pub fn from_parts(currency: Currency, lines: Vec<CartLine>, coupon: Option<Coupon>) -> Self {
        Self {
            lines,
            coupon,
            currency,
            updated_at: current_timestamp(),
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists its quantity grows by
    /// `quantity`; otherwise a new line is appended. Zero quantity is a
    /// no-op. Stock limits are not enforced here.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
        self.touch();
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero removes the line, exactly like [`Cart::remove_item`].
    /// An unknown id is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = quantity;
            self.touch();
        }
    }

    /// Remove the line for a product, if present.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Empty the cart, clearing lines and any applied coupon together.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.coupon = None;
        self.touch();
    }

    /// Try to apply a coupon by code.
    ///
    /// Looks the code up case-insensitively among active coupons and checks
    /// the minimum-subtotal gate against the current pre-discount subtotal.
    /// On success the coupon replaces any previously applied one and `true`
    /// is returned; otherwise nothing changes and `false` is returned.
    pub fn apply_coupon(&mut self, book: &CouponBook, code: &str) -> bool {
        let Some(coupon) = book.find_active(code) else {
            return false;
        };
        if !coupon.qualifies(self.subtotal()) {
            return false;
        }
        self.coupon = Some(coupon.clone());
        self.touch();
        true
    }

    /// Clear the applied coupon, leaving the lines untouched.
    pub fn remove_coupon(&mut self) {
        if self.coupon.take().is_some() {
            self.touch();
        }
    }

    /// The applied coupon, if any.
    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Unix timestamp of the last mutation.
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Sum of line extended prices, before any discount.
    pub fn subtotal(&self) -> Money {
        let line_totals: Vec<Money> = self.lines.iter().map(|l| l.line_total()).collect();
        Money::sum(line_totals.iter(), self.currency)
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Discount granted by the applied coupon on the current subtotal.
    pub fn discount_amount(&self) -> Money {
        match &self.coupon {
            Some(coupon) => coupon.discount_for(self.subtotal()),
            None => Money::zero(self.currency),
        }
    }

    /// Subtotal minus discount, floored at zero.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal
            .sub_floor_zero(&self.discount_amount())
            .unwrap_or(subtotal)
    }

    /// Derived totals bundled for display.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            discount: self.discount_amount(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }

    fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        let mut p = Product::new(
            id,
            format!("Product {id}"),
            Money::new(price_cents, Currency::USD),
        );
        p.stock = 10;
        p
    }

    fn coupons() -> CouponBook {
        CouponBook::with_coupons(vec![
            Coupon::percentage("BIENVENIDO", 10.0),
            Coupon::percentage("TECH20", 20.0)
                .with_min_subtotal(Money::new(10_000, Currency::USD)),
            Coupon::fixed("REGALO50", Money::new(5_000, Currency::USD))
                .with_min_subtotal(Money::new(20_000, Currency::USD)),
        ])
    }

    #[test]
    fn test_add_item_merges_lines() {
        let mut cart = Cart::default();
        let p = product("1", 10_000);

        cart.add_item(&p, 1);
        cart.add_item(&p, 2);
        cart.add_item(&p, 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_item_zero_quantity_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_and_item_count() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        assert_eq!(cart.subtotal().cents, 20_000);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        cart.update_quantity(&"1".into(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_replaces_in_place() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        cart.update_quantity(&"1".into(), 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        cart.update_quantity(&"99".into(), 7);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_item_keeps_others() {
        let mut cart = Cart::default();
        let p1 = product("1", 10_000);
        let p2 = product("2", 5_000);
        cart.add_item(&p1, 1);
        cart.add_item(&p2, 1);

        assert!(cart.remove_item(&p1.id));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id, p2.id);
        assert_eq!(cart.lines()[0].quantity, 1);

        assert!(!cart.remove_item(&p1.id));
    }

    #[test]
    fn test_clear_resets_lines_and_coupon() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);
        assert!(cart.apply_coupon(&coupons(), "BIENVENIDO"));

        cart.clear();

        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
        assert!(cart.coupon().is_none());
    }

    #[test]
    fn test_apply_coupon_percentage_with_minimum() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2); // subtotal $200

        assert!(cart.apply_coupon(&coupons(), "TECH20"));
        assert_eq!(cart.discount_amount().cents, 4_000);
        assert_eq!(cart.total().cents, 16_000);
    }

    #[test]
    fn test_apply_coupon_below_minimum_rejected() {
        // REGALO50 requires a $200 minimum subtotal
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 1); // subtotal $100

        assert!(!cart.apply_coupon(&coupons(), "REGALO50"));
        assert!(cart.coupon().is_none());
        assert_eq!(cart.total().cents, 10_000);
    }

    #[test]
    fn test_apply_coupon_unknown_code() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        assert!(!cart.apply_coupon(&coupons(), "NOSUCH"));
        assert!(cart.coupon().is_none());
    }

    #[test]
    fn test_apply_coupon_case_insensitive() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        assert!(cart.apply_coupon(&coupons(), "tech20"));
        assert_eq!(cart.coupon().unwrap().code, "TECH20");
    }

    #[test]
    fn test_apply_coupon_idempotent() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);

        assert!(cart.apply_coupon(&coupons(), "TECH20"));
        let once = cart.totals();

        assert!(cart.apply_coupon(&coupons(), "TECH20"));
        let twice = cart.totals();

        assert_eq!(once.subtotal, twice.subtotal);
        assert_eq!(once.discount, twice.discount);
        assert_eq!(once.total, twice.total);
    }

    #[test]
    fn test_new_coupon_replaces_old() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 3); // subtotal $300

        assert!(cart.apply_coupon(&coupons(), "TECH20"));
        assert!(cart.apply_coupon(&coupons(), "REGALO50"));

        assert_eq!(cart.coupon().unwrap().code, "REGALO50");
        assert_eq!(cart.discount_amount().cents, 5_000);
    }

    #[test]
    fn test_fixed_coupon_never_drives_total_negative() {
        let book = CouponBook::with_coupons(vec![Coupon::fixed(
            "HUGE",
            Money::new(1_000_000, Currency::USD),
        )]);

        let mut cart = Cart::default();
        cart.add_item(&product("1", 2_500), 1);

        assert!(cart.apply_coupon(&book, "HUGE"));
        assert_eq!(cart.discount_amount().cents, 2_500);
        assert_eq!(cart.total().cents, 0);
    }

    #[test]
    fn test_remove_coupon_keeps_lines() {
        let mut cart = Cart::default();
        cart.add_item(&product("1", 10_000), 2);
        assert!(cart.apply_coupon(&coupons(), "BIENVENIDO"));

        cart.remove_coupon();

        assert!(cart.coupon().is_none());
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_snapshot_price_survives_catalog_change() {
        let mut cart = Cart::default();
        let mut p = product("1", 10_000);
        cart.add_item(&p, 1);

        // a later catalog price change does not reprice the line
        p.price = Money::new(99_999, Currency::USD);
        assert_eq!(cart.subtotal().cents, 10_000);
    }
}
