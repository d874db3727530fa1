//! Storefront domain types and cart state for TechStore.
//!
//! This crate provides the state behind a small storefront UI:
//!
//! - **Catalog**: products, admin CRUD, derived category/brand indexes,
//!   listing queries
//! - **Cart**: cart lines, coupons, derived totals
//! - **Checkout**: plain-text order summary and messaging hand-off link
//! - **Store**: the state container with an injected persistence port
//!
//! # Example
//!
//! ```rust,ignore
//! use techstore_commerce::prelude::*;
//!
//! let mut store = Store::open(
//!     seed::demo_catalog(),
//!     seed::demo_coupons(),
//!     Currency::USD,
//!     MemoryPort::new(),
//! );
//!
//! store.add_item(&"1".into(), 2);
//! store.apply_coupon("TECH20");
//!
//! let totals = store.totals();
//! println!("Total: {}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod store;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{seed, Catalog, Product, ProductPatch, ProductQuery, SortKey};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, Coupon, CouponBook, CouponValue};

    // Checkout
    pub use crate::checkout::{whatsapp_url, OrderSummary, SummaryLine};

    // Store
    pub use crate::store::{MemoryPort, PersistedState, StatePort, Store, User};

    #[cfg(feature = "storage")]
    pub use crate::store::KvPort;
}
