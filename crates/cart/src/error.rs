//! Error types for the cart state container.
//!
//! Persistence faults are non-fatal by policy: the store logs them and keeps
//! the in-memory cart usable. The variants here exist so the storage layer
//! and the provider can describe precisely what went wrong.

use thiserror::Error;

/// Errors raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage)
/// backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the cart store and provider.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized to or deserialized from its
    /// persisted JSON form.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `CartProvider::mount` was called on a provider that already holds a
    /// mounted store.
    #[error("cart provider is already mounted")]
    AlreadyMounted,
}
