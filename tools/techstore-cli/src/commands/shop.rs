//! Catalog browsing command.

use anyhow::{bail, Result};
use techstore_commerce::catalog::{ProductQuery, SortKey};
use techstore_commerce::money::Money;

use super::ShopArgs;
use crate::context::Context;
use crate::output::{sale_badge, stock_badge};

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let Some(sort) = SortKey::from_str(&args.sort) else {
        bail!(
            "Unknown sort '{}' (expected featured, price-asc, price-desc, rating or name)",
            args.sort
        );
    };

    let store = ctx.open_store()?;
    let currency = ctx.currency();

    let mut query = ProductQuery::new().sorted_by(sort).with_price_range(
        args.min.map(|v| Money::from_major(v, currency)),
        args.max.map(|v| Money::from_major(v, currency)),
    );
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    if let Some(search) = args.search {
        query = query.with_search(search);
    }

    let hits = query.run(store.catalog());

    if ctx.output.is_json() {
        ctx.output.json(&hits);
        return Ok(());
    }

    ctx.output.header("TechStore");

    if hits.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "NAME", "BRAND", "PRICE", "RATING", "STOCK", ""],
        &[4, 26, 9, 10, 6, 12, 4],
    );
    for p in &hits {
        ctx.output.table_row(
            &[
                p.id.as_str(),
                &p.name,
                &p.brand,
                &p.price.display(),
                &format!("{:.1}", p.rating),
                &stock_badge(p),
                &sale_badge(p),
            ],
            &[4, 26, 9, 10, 6, 12, 4],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} product(s) · categories: {}",
        hits.len(),
        store.catalog().categories().join(", ")
    ));

    Ok(())
}
