//! The cart store: authoritative in-process cart with a persisted mirror.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use go_marketplace_core::{CartItem, Product, ProductId};

use crate::error::CartError;
use crate::storage::KeyValueStorage;

/// Fixed storage key under which the whole cart is persisted.
///
/// The value is a JSON array of cart items, read once at mount and
/// overwritten wholesale on every mutation.
pub const STORAGE_KEY: &str = "@GoMarketplace:products";

/// The authoritative in-process cart.
///
/// This struct is cheaply cloneable via `Arc`; every clone is a handle to
/// the same cart. Mutations update the in-memory list synchronously, then
/// mirror the full list to storage before their future resolves - the host
/// may await the future or fire and forget it.
///
/// Items are kept in insertion order and are unique by product id.
pub struct CartStore<S> {
    inner: Arc<CartStoreInner<S>>,
}

struct CartStoreInner<S> {
    storage: S,
    products: RwLock<Vec<CartItem>>,
}

impl<S> Clone for CartStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Mount the store on a storage backend, loading any persisted cart.
    ///
    /// A missing blob leaves the cart empty. A storage fault or a corrupt
    /// blob is logged and likewise yields an empty cart: the store must stay
    /// usable even when its mirror cannot be read.
    pub async fn mount(storage: S) -> Self {
        let store = Self {
            inner: Arc::new(CartStoreInner {
                storage,
                products: RwLock::new(Vec::new()),
            }),
        };
        store.load().await;
        store
    }

    /// Replace the in-memory cart wholesale from the persisted blob.
    async fn load(&self) {
        match self.inner.storage.get(STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => {
                    tracing::debug!(items = items.len(), "loaded persisted cart");
                    *self.write_products() = items;
                }
                Err(e) => {
                    tracing::warn!("discarding corrupt persisted cart: {e}");
                }
            },
            Ok(None) => {
                tracing::debug!("no persisted cart found, starting empty");
            }
            Err(e) => {
                tracing::warn!("failed to read persisted cart: {e}");
            }
        }
    }

    /// Snapshot of the current in-memory cart.
    ///
    /// Reflects the latest synchronous state; it does not wait for any
    /// pending persistence write.
    #[must_use]
    pub fn products(&self) -> Vec<CartItem> {
        self.read_products().clone()
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same id already exists its quantity is incremented
    /// in place (the stored title, image and price are not refreshed from
    /// the incoming descriptor); otherwise a new line with quantity 1 is
    /// appended. The full cart is then mirrored to storage.
    pub async fn add_to_cart(&self, product: Product) {
        let snapshot = {
            let mut products = self.write_products();
            match products.iter_mut().find(|item| item.id == product.id) {
                Some(item) => item.quantity += 1,
                None => products.push(CartItem::from(product)),
            }
            products.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Increment the quantity of the line with the given id.
    ///
    /// A miss is a no-op; no error is surfaced.
    pub async fn increment(&self, id: &ProductId) {
        let snapshot = {
            let mut products = self.write_products();
            let Some(item) = products.iter_mut().find(|item| item.id == *id) else {
                return;
            };
            item.quantity += 1;
            products.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Decrement the quantity of the line with the given id.
    ///
    /// A miss is a no-op. After the decrement, every line in the cart whose
    /// quantity is 0 is removed - not only the targeted one.
    pub async fn decrement(&self, id: &ProductId) {
        let snapshot = {
            let mut products = self.write_products();
            let Some(item) = products.iter_mut().find(|item| item.id == *id) else {
                return;
            };
            if item.quantity == 0 {
                return;
            }
            item.quantity -= 1;
            products.retain(|item| item.quantity > 0);
            products.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Mirror a cart snapshot to storage, swallowing faults.
    ///
    /// The snapshot was taken under the lock at mutation time; overlapping
    /// writes carry whichever snapshot their mutation produced and the last
    /// write to complete wins.
    async fn persist(&self, snapshot: &[CartItem]) {
        if let Err(e) = self.try_persist(snapshot).await {
            tracing::warn!("failed to persist cart: {e}");
        }
    }

    async fn try_persist(&self, snapshot: &[CartItem]) -> Result<(), CartError> {
        let raw = serde_json::to_string(snapshot)?;
        self.inner.storage.set(STORAGE_KEY, &raw).await?;
        Ok(())
    }

    fn read_products(&self) -> RwLockReadGuard<'_, Vec<CartItem>> {
        self.inner
            .products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_products(&self) -> RwLockWriteGuard<'_, Vec<CartItem>> {
        self.inner
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
