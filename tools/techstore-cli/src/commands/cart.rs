//! Cart management commands.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => show(ctx),
        Some(CartCommand::Add { id, quantity }) => add(&id, quantity, ctx),
        Some(CartCommand::Update { id, quantity }) => update(&id, quantity, ctx),
        Some(CartCommand::Remove { id }) => remove(&id, ctx),
        Some(CartCommand::Clear { yes }) => clear(yes, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.cart();

    if ctx.output.is_json() {
        ctx.output.json(&store.totals());
        return Ok(());
    }

    ctx.output.header("Shopping Cart");

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Run `techstore shop` to browse products.");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "NAME", "QTY", "UNIT", "TOTAL"],
        &[4, 26, 4, 10, 10],
    );
    for line in cart.lines() {
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.name,
                &line.quantity.to_string(),
                &line.unit_price.display(),
                &line.line_total().display(),
            ],
            &[4, 26, 4, 10, 10],
        );
    }

    let totals = store.totals();
    ctx.output.info("");
    ctx.output.kv("Items", &totals.item_count.to_string());
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    if let Some(coupon) = cart.coupon() {
        ctx.output.kv(
            "Discount",
            &format!("-{} ({})", totals.discount.display(), coupon.code),
        );
    }
    ctx.output.kv("Total", &totals.total.display());
    ctx.output.kv("Updated", &format_timestamp(cart.updated_at()));

    Ok(())
}

fn add(id: &str, quantity: u32, ctx: &Context) -> Result<()> {
    if quantity == 0 {
        bail!("Quantity must be at least 1");
    }

    let mut store = ctx.open_store()?;
    let product_id = id.into();

    let Some(product) = store.catalog().get(&product_id) else {
        bail!("Product '{}' not found", id);
    };
    let name = product.name.clone();
    let stock = product.stock;

    store.add_item(&product_id, quantity);

    let in_cart = store
        .cart()
        .lines()
        .iter()
        .find(|l| l.product_id == product_id)
        .map(|l| l.quantity)
        .unwrap_or(0);

    ctx.output
        .success(&format!("Added {} x {} to the cart", quantity, name));
    if in_cart > stock {
        ctx.output.warn(&format!(
            "Cart holds {} units but only {} are in stock",
            in_cart, stock
        ));
    }

    Ok(())
}

fn update(id: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product_id = id.into();

    let known = store
        .cart()
        .lines()
        .iter()
        .any(|l| l.product_id == product_id);
    if !known {
        ctx.output.warn(&format!("'{}' is not in the cart", id));
        return Ok(());
    }

    store.update_quantity(&product_id, quantity);

    if quantity == 0 {
        ctx.output.success(&format!("Removed '{}' from the cart", id));
    } else {
        ctx.output
            .success(&format!("Set '{}' quantity to {}", id, quantity));
    }

    Ok(())
}

fn remove(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if store.remove_item(&id.into()) {
        ctx.output.success(&format!("Removed '{}' from the cart", id));
    } else {
        ctx.output.warn(&format!("'{}' is not in the cart", id));
    }

    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if store.cart().is_empty() {
        ctx.output.info("Cart is already empty.");
        return Ok(());
    }

    if !yes {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt("Empty the cart and drop any applied coupon?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    store.clear_cart();
    ctx.output.success("Cart emptied");

    Ok(())
}

fn format_timestamp(ts: i64) -> String {
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => ts.to_string(),
    }
}
