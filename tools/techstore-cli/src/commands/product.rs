//! Product detail command.

use anyhow::{bail, Result};

use super::ProductArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let id = args.id.as_str().into();

    let Some(product) = store.catalog().get(&id) else {
        bail!("Product '{}' not found", args.id);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Id", product.id.as_str());
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &product.price.display());

    if let Some(original) = product.original_price {
        ctx.output.kv("Original price", &original.display());
        if let Some(pct) = product.discount_percentage() {
            ctx.output.kv("Discount", &format!("{:.0}% off", pct));
        }
    }

    ctx.output.kv(
        "Rating",
        &format!("{:.1} ({} reviews)", product.rating, product.reviews),
    );
    ctx.output.kv("Stock", &stock_badge(product));
    ctx.output.kv("Image", &product.image);

    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    if product.is_low_stock() && product.in_stock() {
        ctx.output.warn("Only a few units left.");
    }

    Ok(())
}
