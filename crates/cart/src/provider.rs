//! Explicit provider scope for the cart store.
//!
//! The hosting UI creates one provider at its composition root, mounts it
//! once at startup, and hands [`CartStore`] handles to whatever component
//! asks for the cart. Asking an unmounted provider for the cart is a
//! programmer error and fails fast instead of returning an empty stand-in.

use std::sync::OnceLock;

use crate::error::CartError;
use crate::storage::KeyValueStorage;
use crate::store::CartStore;

/// Holds at most one mounted [`CartStore`].
///
/// `new` is `const`, so a provider can live in a `static` at the composition
/// root:
///
/// ```
/// use go_marketplace_cart::{CartProvider, MemoryStorage};
///
/// static CART: CartProvider<MemoryStorage> = CartProvider::new();
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), go_marketplace_cart::CartError> {
/// CART.mount(MemoryStorage::new()).await?;
/// assert!(CART.cart().products().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct CartProvider<S> {
    store: OnceLock<CartStore<S>>,
}

impl<S> CartProvider<S> {
    /// Create an unmounted provider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: OnceLock::new(),
        }
    }

    /// Returns a cart handle, or `None` if the provider is not mounted.
    #[must_use]
    pub fn try_cart(&self) -> Option<CartStore<S>> {
        self.store.get().cloned()
    }

    /// Returns a handle to the mounted cart store.
    ///
    /// # Panics
    ///
    /// Panics if the provider has not been mounted. Accessing the cart
    /// outside an active provider scope is a programmer error meant to be
    /// caught during development, not a runtime condition to recover from.
    #[must_use]
    pub fn cart(&self) -> CartStore<S> {
        self.try_cart().unwrap_or_else(|| {
            panic!("cart accessed outside a mounted CartProvider; call mount() first")
        })
    }
}

impl<S: KeyValueStorage> CartProvider<S> {
    /// Mount the cart store on `storage`, loading any persisted cart.
    ///
    /// Returns a handle to the freshly mounted store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::AlreadyMounted`] if the provider already holds a
    /// store.
    pub async fn mount(&self, storage: S) -> Result<CartStore<S>, CartError> {
        let store = CartStore::mount(storage).await;
        self.store
            .set(store.clone())
            .map_err(|_| CartError::AlreadyMounted)?;
        Ok(store)
    }
}

impl<S> Default for CartProvider<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[tokio::test]
    async fn test_mount_then_cart_returns_store() {
        let provider = CartProvider::new();
        provider.mount(MemoryStorage::new()).await.unwrap();
        assert!(provider.cart().products().is_empty());
    }

    #[tokio::test]
    async fn test_mount_twice_is_an_error() {
        let provider = CartProvider::new();
        provider.mount(MemoryStorage::new()).await.unwrap();

        let err = provider.mount(MemoryStorage::new()).await.unwrap_err();
        assert!(matches!(err, CartError::AlreadyMounted));
    }

    #[test]
    fn test_try_cart_unmounted_is_none() {
        let provider: CartProvider<MemoryStorage> = CartProvider::new();
        assert!(provider.try_cart().is_none());
    }

    #[test]
    #[should_panic(expected = "cart accessed outside a mounted CartProvider")]
    fn test_cart_unmounted_panics() {
        let provider: CartProvider<MemoryStorage> = CartProvider::new();
        let _ = provider.cart();
    }

    #[tokio::test]
    async fn test_handles_share_state() {
        let provider = CartProvider::new();
        provider.mount(MemoryStorage::new()).await.unwrap();

        let a = provider.cart();
        let b = provider.cart();
        a.add_to_cart(go_marketplace_core::Product {
            id: go_marketplace_core::ProductId::new("x"),
            title: "X".to_owned(),
            image_url: String::new(),
            price: rust_decimal::Decimal::ONE,
        })
        .await;

        assert_eq!(b.products().len(), 1);
    }
}
