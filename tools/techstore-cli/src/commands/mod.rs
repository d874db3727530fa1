//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod coupon;
pub mod product;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Filter by category (e.g., "Laptops").
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search in product name and brand.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price.
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort order: featured, price-asc, price-desc, rating, name.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals (default).
    Show,
    /// Add a product to the cart.
    Add {
        /// Product id.
        id: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Replace a line's quantity (0 removes the line).
    Update {
        /// Product id.
        id: String,
        /// New quantity.
        quantity: u32,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product id.
        id: String,
    },
    /// Empty the cart and drop any applied coupon.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the coupon command.
#[derive(Args)]
pub struct CouponArgs {
    #[command(subcommand)]
    pub command: Option<CouponCommand>,
}

#[derive(Subcommand)]
pub enum CouponCommand {
    /// List available coupons (default).
    List,
    /// Apply a coupon code to the cart.
    Apply {
        /// Coupon code (case-insensitive).
        code: String,
    },
    /// Remove the applied coupon.
    Remove,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// WhatsApp number to address the order to (overrides config).
    #[arg(long)]
    pub phone: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List the catalog with stock status.
    List,
    /// Add a product (interactive).
    Add,
    /// Update a product (interactive).
    Update {
        /// Product id.
        id: String,
    },
    /// Delete a product.
    Delete {
        /// Product id.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
