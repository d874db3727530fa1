//! File-backed JSON Key-Value storage for TechStore.
//!
//! Provides a simple, ergonomic API for persisting small records on the
//! local filesystem with automatic JSON serialization. One record maps to
//! one file under the store's root directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use techstore_kv::KvStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Snapshot {
//!     items: Vec<String>,
//! }
//!
//! let store = KvStore::open(data_dir)?;
//!
//! // Store a value
//! store.set("techstore-storage", &snapshot)?;
//!
//! // Retrieve a value
//! let snapshot: Option<Snapshot> = store.get("techstore-storage")?;
//!
//! // Delete a value
//! store.delete("techstore-storage")?;
//! ```

mod error;
mod kv;

pub use error::KvError;
pub use kv::KvStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KvError, KvStore};
}
