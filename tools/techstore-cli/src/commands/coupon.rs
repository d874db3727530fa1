//! Coupon commands.

use anyhow::Result;
use techstore_commerce::cart::Coupon;

use super::{CouponArgs, CouponCommand};
use crate::context::Context;

/// Run the coupon command.
pub fn run(args: CouponArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CouponCommand::List) | None => list(ctx),
        Some(CouponCommand::Apply { code }) => apply(&code, ctx),
        Some(CouponCommand::Remove) => remove(ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    if ctx.output.is_json() {
        let coupons: Vec<&Coupon> = store.coupons().iter().collect();
        ctx.output.json(&coupons);
        return Ok(());
    }

    ctx.output.header("Available Coupons");

    for coupon in store.coupons().iter().filter(|c| c.active) {
        let requirement = match coupon.min_subtotal {
            Some(min) => format!(" on orders over {}", min.display()),
            None => String::new(),
        };
        ctx.output.list_item(&format!(
            "{} - {} off{}",
            coupon.code,
            coupon.value_display(),
            requirement
        ));
    }

    if let Some(applied) = store.cart().coupon() {
        ctx.output.info("");
        ctx.output
            .info(&format!("Currently applied: {}", applied.code));
    }

    Ok(())
}

fn apply(code: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if store.apply_coupon(code) {
        let totals = store.totals();
        ctx.output.success(&format!(
            "Coupon \"{}\" applied, you save {}",
            store.cart().coupon().map(|c| c.code.as_str()).unwrap_or(code),
            totals.discount.display()
        ));
    } else {
        ctx.output.error(&format!(
            "Coupon \"{}\" is not valid or the cart does not meet its requirements",
            code
        ));
    }

    Ok(())
}

fn remove(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if store.cart().coupon().is_none() {
        ctx.output.info("No coupon is applied.");
        return Ok(());
    }

    store.remove_coupon();
    ctx.output.success("Coupon removed");

    Ok(())
}
