//! GoMarketplace cart state container.
//!
//! This crate owns the authoritative in-process cart and keeps a local
//! persisted copy in sync. The hosting UI mounts the store once through a
//! [`CartProvider`]; mounting loads any previously persisted cart; UI
//! actions invoke the mutation operations; each mutation updates in-memory
//! state synchronously and then mirrors the full list to storage.
//!
//! # Consistency model
//!
//! The in-memory cart is always authoritative for reads. The persisted copy
//! is a best-effort mirror: each mutation writes the snapshot it produced,
//! with no ordering guarantee across overlapping writes, no retry and no
//! timeout. Persistence faults are logged and never surfaced to the caller.
//!
//! # Example
//!
//! ```
//! use go_marketplace_cart::{CartProvider, MemoryStorage};
//! use go_marketplace_core::{Product, ProductId};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), go_marketplace_cart::CartError> {
//! let provider = CartProvider::new();
//! let cart = provider.mount(MemoryStorage::new()).await?;
//!
//! cart.add_to_cart(Product {
//!     id: ProductId::new("shirt-1"),
//!     title: "Shirt".to_owned(),
//!     image_url: String::new(),
//!     price: Decimal::new(1000, 2),
//! })
//! .await;
//!
//! assert_eq!(cart.products().len(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod provider;
pub mod storage;
pub mod store;

pub use error::{CartError, StorageError};
pub use provider::CartProvider;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CartStore, STORAGE_KEY};
