//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never produce these: unknown ids and bad coupon codes
/// degrade to no-ops or boolean results. The variants below cover catalog
/// administration and the persistence boundary.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with this id already exists.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

#[cfg(feature = "storage")]
impl From<techstore_kv::KvError> for CommerceError {
    fn from(e: techstore_kv::KvError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}
