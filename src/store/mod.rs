//! Catalog store implementations.
//!
//! The catalog treats persistence as an external collaborator: an ordered
//! associative store of serialized records, addressed by string keys. One
//! store instance backs one logical table (movies or shows).

use crate::error::Result;

pub mod inmemory;

pub use inmemory::InMemoryStore;

/// Trait for catalog store implementations.
///
/// Abstracts storage operations, allowing swappable backends: in-memory
/// (default), an embedded key-value engine, a stable-memory map, etc.
///
/// **IMPORTANT:** All methods use `&self` instead of `&mut self` to allow
/// concurrent access. Implementations should use interior mutability or
/// external storage.
///
/// **Ordering:** `values()` and `keys()` return entries in ascending key
/// order. Listings built on top of the store inherit that order.
///
/// **ASYNC:** All methods are async and must be awaited.
#[allow(async_fn_in_trait)]
pub trait CatalogStore: Send + Sync + Clone {
    /// Retrieve a record's bytes by key.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - record found
    /// - `Ok(None)` - key not present
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a record's bytes under a key (upsert - overwrites an existing
    /// key).
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn insert(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove a record. Removing an absent key is not an error.
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn remove(&self, key: &str) -> Result<()>;

    /// Return every stored record's bytes, in ascending key order.
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn values(&self) -> Result<Vec<Vec<u8>>>;

    /// Return every key, in ascending order.
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn keys(&self) -> Result<Vec<String>>;

    /// Check if a key exists (optional optimization).
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Number of stored records.
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn len(&self) -> Result<usize> {
        Ok(self.keys().await?.len())
    }

    /// True if the store holds no records.
    ///
    /// # Errors
    /// Returns `Err` if a backend error occurs
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Health check - verify the store is accessible.
    ///
    /// # Errors
    /// Returns `Err` if the store is not accessible
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}
