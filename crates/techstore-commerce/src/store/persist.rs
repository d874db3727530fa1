//! Key/value-backed persistence port.

use techstore_kv::KvStore;

use crate::error::CommerceError;
use crate::store::{PersistedState, StatePort, STORAGE_KEY};

/// [`StatePort`] implementation over a [`techstore_kv::KvStore`].
pub struct KvPort {
    store: KvStore,
    key: String,
}

impl KvPort {
    /// Persist under the default storage key.
    pub fn new(store: KvStore) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: KvStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl StatePort for KvPort {
    fn load(&self) -> Result<Option<PersistedState>, CommerceError> {
        Ok(self.store.get(&self.key)?)
    }

    fn save(&self, state: &PersistedState) -> Result<(), CommerceError> {
        Ok(self.store.set(&self.key, state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{demo_catalog, demo_coupons};
    use crate::money::Currency;
    use crate::store::Store;

    #[test]
    fn test_cart_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let port = KvPort::new(KvStore::open(dir.path()).unwrap());
            let mut store = Store::open(demo_catalog(), demo_coupons(), Currency::USD, port);
            store.add_item(&"3".into(), 2);
            store.apply_coupon("BIENVENIDO");
        }

        let port = KvPort::new(KvStore::open(dir.path()).unwrap());
        let store = Store::open(demo_catalog(), demo_coupons(), Currency::USD, port);

        assert_eq!(store.cart().item_count(), 2);
        assert_eq!(store.cart().coupon().unwrap().code, "BIENVENIDO");
    }

    #[test]
    fn test_corrupt_record_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), b"{oops").unwrap();

        let port = KvPort::new(KvStore::open(dir.path()).unwrap());
        let store = Store::open(demo_catalog(), demo_coupons(), Currency::USD, port);

        assert!(store.cart().is_empty());
    }
}
