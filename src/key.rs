//! Store key management utilities.

use crate::entity::CatalogEntity;

/// Builder for catalog store keys.
pub struct StoreKeyBuilder;

impl StoreKeyBuilder {
    /// Build the full store key from a record type and ID.
    pub fn build<T: CatalogEntity>(id: &T::Key) -> String {
        format!("{}:{}", T::catalog_prefix(), id)
    }

    /// Build a store key with a custom prefix.
    pub fn build_with_prefix(prefix: &str, id: &dyn std::fmt::Display) -> String {
        format!("{}:{}", prefix, id)
    }

    /// Parse a key into its prefix and id parts.
    pub fn parse(key: &str) -> Vec<&str> {
        key.split(':').collect()
    }
}
