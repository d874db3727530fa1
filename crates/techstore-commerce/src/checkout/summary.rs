//! Order summary export.
//!
//! Checkout here is a hand-off: the cart is rendered as a plain-text order
//! message and delivery is delegated to an external messaging app. Nothing
//! is sent by this crate.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;

/// One line item captured in an order summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    /// Product name at the time of checkout.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Extended price for the line.
    pub line_total: Money,
}

/// A snapshot of the cart taken at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Line items.
    pub lines: Vec<SummaryLine>,
    /// Subtotal before discount.
    pub subtotal: Money,
    /// Applied coupon code, if any.
    pub coupon_code: Option<String>,
    /// Discount granted.
    pub discount: Money,
    /// Final total.
    pub total: Money,
}

impl OrderSummary {
    /// Capture a summary from the current cart state.
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|l| SummaryLine {
                name: l.name.clone(),
                quantity: l.quantity,
                line_total: l.line_total(),
            })
            .collect();

        Self {
            lines,
            subtotal: cart.subtotal(),
            coupon_code: cart.coupon().map(|c| c.code.clone()),
            discount: cart.discount_amount(),
            total: cart.total(),
        }
    }

    /// Render the human-readable order message.
    ///
    /// The discount line only appears when a coupon is applied.
    pub fn render_message(&self) -> String {
        let mut items = String::new();
        for line in &self.lines {
            let _ = writeln!(
                items,
                "{} ({}x) - {}",
                line.name,
                line.quantity,
                line.line_total.display()
            );
        }

        let mut message = format!(
            "Hola! Quiero realizar esta compra:\n\n{}\nSubtotal: {}",
            items,
            self.subtotal.display()
        );
        if let Some(code) = &self.coupon_code {
            let _ = write!(
                message,
                "\nDescuento ({}): -{}",
                code,
                self.discount.display()
            );
        }
        let _ = write!(message, "\nTotal: {}", self.total.display());
        message
    }
}
