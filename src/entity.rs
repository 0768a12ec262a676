//! Core trait for records persisted in the catalog store.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;

/// Trait that all records stored in the catalog must implement.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use cinema_kit::CatalogEntity;
///
/// #[derive(Clone, Serialize, Deserialize)]
/// pub struct Voucher {
///     pub id: String,
///     pub discount: u32,
/// }
///
/// impl CatalogEntity for Voucher {
///     type Key = String;
///
///     fn catalog_key(&self) -> Self::Key {
///         self.id.clone()
///     }
///
///     fn catalog_prefix() -> &'static str {
///         "voucher"
///     }
/// }
/// ```
pub trait CatalogEntity: Send + Sync + Serialize + for<'de> Deserialize<'de> + Clone {
    /// Type of the record's key/ID (typically String)
    type Key: Display + Clone + Send + Sync + Eq + Hash + 'static;

    /// Return the record's unique key.
    fn catalog_key(&self) -> Self::Key;

    /// Return the store prefix for this record type.
    ///
    /// Used to namespace store keys. Final key format: `"{prefix}:{key}"`.
    fn catalog_prefix() -> &'static str;

    /// Serialize the record for store persistence.
    ///
    /// Uses Postcard with versioned envelopes for all persisted data. Not
    /// overridable, so every record type shares one byte format.
    ///
    /// See `crate::serialization` for the envelope layout.
    fn serialize_for_store(&self) -> Result<Vec<u8>> {
        crate::serialization::serialize_for_store(self)
    }

    /// Deserialize a record from store bytes.
    ///
    /// Validates magic header and schema version before decoding. Not
    /// overridable.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidStoreEntry`: bad magic or corrupted envelope
    /// - `Error::VersionMismatch`: schema version changed
    /// - `Error::DeserializationError`: corrupted payload
    fn deserialize_from_store(bytes: &[u8]) -> Result<Self> {
        crate::serialization::deserialize_from_store(bytes)
    }

    /// Optional: validate the record after deserialization.
    ///
    /// Called after loading from the store. Use to reject records that
    /// decode but violate domain invariants.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Serialize, Deserialize)]
    struct TestEntity {
        id: String,
        value: String,
    }

    impl CatalogEntity for TestEntity {
        type Key = String;

        fn catalog_key(&self) -> Self::Key {
            self.id.clone()
        }

        fn catalog_prefix() -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_serialize_deserialize() {
        let entity = TestEntity {
            id: "test_1".to_string(),
            value: "data".to_string(),
        };

        let bytes = entity.serialize_for_store().unwrap();
        let deserialized = TestEntity::deserialize_from_store(&bytes).unwrap();

        assert_eq!(entity.id, deserialized.id);
        assert_eq!(entity.value, deserialized.value);
    }

    #[test]
    fn test_key_and_prefix() {
        let entity = TestEntity {
            id: "entity_123".to_string(),
            value: "test".to_string(),
        };

        assert_eq!(entity.catalog_key(), "entity_123");
        assert_eq!(TestEntity::catalog_prefix(), "test");
    }
}
