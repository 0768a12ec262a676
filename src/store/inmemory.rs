//! In-memory catalog store (default, thread-safe, async).
//!
//! Uses DashMap for lock-free concurrent access with per-key sharding.
//! Ordered listings are produced by sorting keys on read; the catalog's
//! tables are small enough that scan cost is irrelevant next to the
//! ordering guarantee.

use super::CatalogStore;
use crate::error::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe async in-memory catalog store.
///
/// Uses DashMap for lock-free concurrent access with fine-grained per-key
/// sharding. No async locks required - operations are non-blocking.
///
/// # Example
///
/// ```no_run
/// use cinema_kit::store::{CatalogStore, InMemoryStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     store.insert("movie:1", b"record".to_vec()).await?;
///
///     let value = store.get("movie:1").await?;
///     assert!(value.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct InMemoryStore {
    entries: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Get storage statistics.
    pub async fn stats(&self) -> StoreStats {
        let total_bytes: usize = self.entries.iter().map(|entry| entry.value().len()).sum();

        StoreStats {
            total_entries: self.entries.len(),
            total_bytes,
        }
    }

    /// Print storage statistics to debug log.
    pub async fn log_stats(&self) {
        let stats = self.stats().await;
        debug!(
            "Store Stats: {} entries, {} bytes",
            stats.total_entries, stats.total_bytes
        );
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.entries.get(key).map(|entry| entry.value().clone());
        debug!(
            "InMemory GET {} -> {}",
            key,
            if value.is_some() { "HIT" } else { "MISS" }
        );
        Ok(value)
    }

    async fn insert(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        debug!("InMemory INSERT {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        debug!("InMemory REMOVE {}", key);
        Ok(())
    }

    async fn values(&self) -> Result<Vec<Vec<u8>>> {
        let mut pairs: Vec<(String, Vec<u8>)> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        debug!("InMemory VALUES -> {} entries", pairs.len());
        Ok(pairs.into_iter().map(|(_, v)| v).collect())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }

    async fn health_check(&self) -> Result<bool> {
        // In-memory store is always healthy
        Ok(true)
    }
}

/// Storage statistics.
#[derive(Clone, Debug)]
pub struct StoreStats {
    pub total_entries: usize,
    pub total_bytes: usize,
}
