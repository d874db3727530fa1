//! Catalog administration commands.
//!
//! The catalog is the in-memory demo seed; edits last for the current
//! process only, which is enough to exercise the CRUD surface.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use techstore_commerce::catalog::{Product, ProductPatch};
use techstore_commerce::ids::ProductId;
use techstore_commerce::money::Money;

use super::{AdminArgs, AdminCommand};
use crate::context::Context;
use crate::output::stock_badge;

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdminCommand::List => list(ctx),
        AdminCommand::Add => add(ctx),
        AdminCommand::Update { id } => update(&id, ctx),
        AdminCommand::Delete { id, yes } => delete(&id, yes, ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let catalog = store.catalog();

    if ctx.output.is_json() {
        let products: Vec<&Product> = catalog.iter().collect();
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Catalog Administration");

    ctx.output.table_row(
        &["ID", "NAME", "CATEGORY", "PRICE", "STOCK", "FLAGS"],
        &[4, 26, 12, 10, 12, 14],
    );
    for p in catalog.iter() {
        let mut flags = Vec::new();
        if p.featured {
            flags.push("featured");
        }
        if p.is_on_sale() {
            flags.push("sale");
        }
        ctx.output.table_row(
            &[
                p.id.as_str(),
                &p.name,
                &p.category,
                &p.price.display(),
                &stock_badge(p),
                &flags.join(","),
            ],
            &[4, 26, 12, 10, 12, 14],
        );
    }

    ctx.output.info("");
    ctx.output
        .kv("Products", &catalog.len().to_string());
    ctx.output
        .kv("Low stock", &catalog.low_stock().count().to_string());
    ctx.output
        .kv("Categories", &catalog.categories().join(", "));
    ctx.output.kv("Brands", &catalog.brands().join(", "));

    Ok(())
}

fn add(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let currency = ctx.currency();

    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let price: f64 = Input::new().with_prompt("Price").interact_text()?;
    let original: String = Input::new()
        .with_prompt("Original price (empty for none)")
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let category: String = Input::new()
        .with_prompt(format!(
            "Category ({})",
            store.catalog().categories().join(", ")
        ))
        .interact_text()?;
    let brand: String = Input::new().with_prompt("Brand").interact_text()?;
    let stock: u32 = Input::new().with_prompt("Stock").interact_text()?;
    let image: String = Input::new()
        .with_prompt("Image path")
        .with_initial_text("assets/placeholder.jpg")
        .interact_text()?;

    let mut product = Product::new(
        ProductId::generate(),
        name,
        Money::from_major(price, currency),
    );
    product.description = description;
    product.category = category;
    product.brand = brand;
    product.stock = stock;
    product.image = image;
    if !original.trim().is_empty() {
        let value: f64 = original
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Original price is not a number"))?;
        product.original_price = Some(Money::from_major(value, currency));
    }

    let id = product.id.clone();
    store.add_product(product)?;

    ctx.output
        .success(&format!("Product '{}' added to the catalog", id));
    ctx.output
        .warn("Catalog edits are in-memory only and reset on the next run.");

    Ok(())
}

fn update(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product_id: ProductId = id.into();

    let Some(current) = store.catalog().get(&product_id).cloned() else {
        bail!("Product '{}' not found", id);
    };

    let name: String = Input::new()
        .with_prompt("Name")
        .default(current.name.clone())
        .interact_text()?;
    let price: f64 = Input::new()
        .with_prompt("Price")
        .default(current.price.to_major())
        .interact_text()?;
    let stock: u32 = Input::new()
        .with_prompt("Stock")
        .default(current.stock)
        .interact_text()?;
    let category: String = Input::new()
        .with_prompt("Category")
        .default(current.category.clone())
        .interact_text()?;
    let brand: String = Input::new()
        .with_prompt("Brand")
        .default(current.brand.clone())
        .interact_text()?;

    let patch = ProductPatch {
        name: Some(name),
        price: Some(Money::from_major(price, ctx.currency())),
        stock: Some(stock),
        category: Some(category),
        brand: Some(brand),
        ..Default::default()
    };

    store.update_product(&product_id, patch)?;

    ctx.output.success(&format!("Product '{}' updated", id));
    ctx.output
        .warn("Catalog edits are in-memory only and reset on the next run.");

    Ok(())
}

fn delete(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product_id: ProductId = id.into();

    let Some(product) = store.catalog().get(&product_id) else {
        bail!("Product '{}' not found", id);
    };
    let name = product.name.clone();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'?", name))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    store.remove_product(&product_id)?;
    ctx.output.success(&format!("Deleted '{}'", name));

    Ok(())
}
