//! TechStore CLI - storefront and admin tool for the TechStore demo shop.
//!
//! Commands:
//! - `techstore shop` - Browse the catalog
//! - `techstore product` - Show one product
//! - `techstore cart` - Manage the shopping cart
//! - `techstore coupon` - List and apply discount coupons
//! - `techstore checkout` - Render the WhatsApp order hand-off
//! - `techstore admin` - Catalog administration
//! - `techstore config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    AdminArgs, CartArgs, CheckoutArgs, ConfigArgs, CouponArgs, ProductArgs, ShopArgs,
};

/// TechStore CLI - Browse the shop, manage the cart, check out over WhatsApp
#[derive(Parser)]
#[command(name = "techstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Shop(ShopArgs),

    /// Show details for one product
    Product(ProductArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// List and apply discount coupons
    Coupon(CouponArgs),

    /// Render the order summary and WhatsApp hand-off link
    Checkout(CheckoutArgs),

    /// Catalog administration
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing();
    }

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Coupon(args) => commands::coupon::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("techstore_commerce=debug,techstore_kv=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
