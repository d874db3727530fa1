//! Application state container.
//!
//! [`Store`] owns the catalog, the cart, the coupon book and the user
//! placeholder, and writes the persisted subset through an injected
//! [`StatePort`] after every cart mutation. It is meant to be constructed
//! once by the application's composition root; there is no global instance.

#[cfg(feature = "storage")]
mod persist;

#[cfg(feature = "storage")]
pub use persist::KvPort;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cart::{Cart, CartLine, CartTotals, Coupon, CouponBook};
use crate::catalog::{Catalog, Product, ProductPatch};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Storage key the persisted state lives under.
pub const STORAGE_KEY: &str = "techstore-storage";

/// Authenticated-user placeholder. No authentication happens anywhere;
/// this only round-trips through the persisted state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// The subset of state that survives a restart.
///
/// There is no version tag; every field defaults so that records written by
/// an older layout still rehydrate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedState {
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub applied_coupon: Option<Coupon>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Load/save interface the store persists through.
///
/// Implementations are expected to be cheap and synchronous; the store
/// treats every failure as non-fatal.
pub trait StatePort {
    /// Load the persisted state, `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<PersistedState>, CommerceError>;

    /// Save the persisted state.
    fn save(&self, state: &PersistedState) -> Result<(), CommerceError>;
}

/// In-memory port for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPort {
    slot: RefCell<Option<PersistedState>>,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing record, as if a previous session had saved.
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            slot: RefCell::new(Some(state)),
        }
    }

    /// Inspect the last saved record.
    pub fn saved(&self) -> Option<PersistedState> {
        self.slot.borrow().clone()
    }
}

impl StatePort for MemoryPort {
    fn load(&self) -> Result<Option<PersistedState>, CommerceError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), CommerceError> {
        *self.slot.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

/// The storefront state container.
///
/// Cart mutations go through the store so that every change is followed by
/// a best-effort persistence write. If the port fails, the in-memory state
/// stays authoritative for the rest of the session and the failure is only
/// logged.
pub struct Store<P: StatePort> {
    catalog: Catalog,
    coupons: CouponBook,
    cart: Cart,
    user: Option<User>,
    port: P,
}

impl<P: StatePort> Store<P> {
    /// Open a store, rehydrating the persisted subset from the port.
    ///
    /// A port that has nothing stored, or that fails to load, yields an
    /// empty cart; the failure is logged and swallowed.
    pub fn open(catalog: Catalog, coupons: CouponBook, currency: Currency, port: P) -> Self {
        let state = match port.load() {
            Ok(state) => state.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "failed to load persisted state, starting empty");
                PersistedState::default()
            }
        };

        Self {
            catalog,
            coupons,
            cart: Cart::from_parts(currency, state.cart, state.applied_coupon),
            user: state.user,
            port,
        }
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The known coupons.
    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The user placeholder.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Derived totals for the current cart.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // ------------------------------------------------------------------
    // Cart mutations
    // ------------------------------------------------------------------

    /// Add a product from the catalog to the cart.
    ///
    /// Returns `false` without touching anything when the id is not in the
    /// catalog.
    pub fn add_item(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            debug!(product = %product_id, "add_item ignored unknown product");
            return false;
        };
        let product = product.clone();
        self.cart.add_item(&product, quantity);
        self.persist();
        true
    }

    /// Replace a line's quantity; zero removes the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Empty the cart and drop any applied coupon.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Try to apply a coupon code to the cart.
    pub fn apply_coupon(&mut self, code: &str) -> bool {
        let applied = self.cart.apply_coupon(&self.coupons, code);
        if applied {
            self.persist();
        } else {
            debug!(code, "coupon rejected");
        }
        applied
    }

    /// Remove the applied coupon, leaving cart lines untouched.
    pub fn remove_coupon(&mut self) {
        self.cart.remove_coupon();
        self.persist();
    }

    /// Set or clear the user placeholder.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        self.persist();
    }

    // ------------------------------------------------------------------
    // Catalog administration
    // ------------------------------------------------------------------
    //
    // The catalog itself is not part of the persisted subset, so these do
    // not write through the port.

    /// Add a product to the catalog.
    pub fn add_product(&mut self, product: Product) -> Result<(), CommerceError> {
        self.catalog.add(product)
    }

    /// Apply a partial update to a catalog product.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<(), CommerceError> {
        self.catalog.update(id, patch)
    }

    /// Remove a product from the catalog. Cart lines referencing it keep
    /// their snapshot and are left alone.
    pub fn remove_product(&mut self, id: &ProductId) -> Result<Product, CommerceError> {
        self.catalog.remove(id)
    }

    fn persist(&self) {
        let state = PersistedState {
            cart: self.cart.lines().to_vec(),
            applied_coupon: self.cart.coupon().cloned(),
            user: self.user.clone(),
        };
        if let Err(e) = self.port.save(&state) {
            warn!(error = %e, "persistence unavailable, keeping state in memory");
        }
    }
}
