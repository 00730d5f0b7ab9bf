//! Local key-value storage backends.
//!
//! The cart persists as a single serialized string under a fixed key, so the
//! storage abstraction is a minimal string key-value store in the shape of a
//! device-local storage facility. Two backends are provided: [`FileStorage`]
//! for real hosts and [`MemoryStorage`] for tests and throwaway sessions.

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::StorageError;

/// Asynchronous string key-value storage.
///
/// Values are opaque strings; serialization is the caller's concern. `get`
/// distinguishes "key absent" (`Ok(None)`) from a storage fault (`Err`).
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Read the value stored under `key`, if any.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// File-backed storage: one JSON file per key under a root directory.
///
/// Keys are mapped to file names by replacing every byte outside
/// `[A-Za-z0-9._-]` with `_`, so namespaced keys like
/// `@GoMarketplace:products` land on a plain file name. Writes overwrite the
/// file wholesale; the root directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `root`.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}

/// In-memory storage backed by a `HashMap`.
///
/// Useful in tests and wherever persistence across processes is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_get_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_storage_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set("key", "value").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_memory_storage_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("key", "first").await.unwrap();
        storage.set("key", "second").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_file_storage_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("@GoMarketplace:products", "[]").await.unwrap();
        assert_eq!(
            storage
                .get("@GoMarketplace:products")
                .await
                .unwrap()
                .as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_file_storage_creates_root_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let storage = FileStorage::new(&root);
        storage.set("key", "value").await.unwrap();
        assert!(root.exists());
    }

    #[test]
    fn test_path_for_sanitizes_key() {
        let storage = FileStorage::new("/tmp/data");
        let path = storage.path_for("@GoMarketplace:products");
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "_GoMarketplace_products.json"
        );
    }
}
