//! Checkout hand-off command.

use anyhow::Result;
use techstore_commerce::checkout::OrderSummary;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
///
/// Renders the order message and the prefilled WhatsApp link; nothing is
/// sent from here.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    if store.cart().is_empty() {
        ctx.output.info("Your cart is empty, nothing to check out.");
        return Ok(());
    }

    let summary = OrderSummary::from_cart(store.cart());
    let phone = args.phone.as_deref().unwrap_or_else(|| ctx.whatsapp_number());
    let url = summary.whatsapp_url(phone);

    if ctx.output.is_json() {
        #[derive(serde::Serialize)]
        struct CheckoutOutput<'a> {
            summary: &'a OrderSummary,
            message: String,
            whatsapp_url: &'a str,
        }
        ctx.output.json(&CheckoutOutput {
            summary: &summary,
            message: summary.render_message(),
            whatsapp_url: &url,
        });
        return Ok(());
    }

    ctx.output.header("Order Summary");
    for line in &summary.lines {
        ctx.output.list_item(&format!(
            "{} ({}x) - {}",
            line.name,
            line.quantity,
            line.line_total.display()
        ));
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    if let Some(code) = &summary.coupon_code {
        ctx.output
            .kv("Discount", &format!("-{} ({})", summary.discount.display(), code));
    }
    ctx.output.kv("Total", &summary.total.display());

    ctx.output.header("WhatsApp hand-off");
    ctx.output.info("Open this link to send the order:");
    println!("{url}");

    Ok(())
}
