//! Postcard-based record serialization with versioned envelopes.
//!
//! This module provides the canonical byte format for everything the catalog
//! persists. It uses Postcard for compact encoding and wraps every record in
//! a versioned envelope so schema changes are detected instead of silently
//! misread.
//!
//! # Format
//!
//! ```text
//! ┌─────────────────┬─────────────────┬──────────────────────────┐
//! │  MAGIC (4 bytes)│VERSION (4 bytes)│POSTCARD PAYLOAD (N bytes)│
//! └─────────────────┴─────────────────┴──────────────────────────┘
//!   "CNKT"              u32 (LE)          postcard::to_allocvec(T)
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic:** the same record always produces identical bytes
//! - **Validated:** magic and version checked on every deserialization
//! - **Versioned:** schema changes force a rewrite, not a silent migration
//!
//! # Example
//!
//! ```rust
//! use cinema_kit::serialization::{serialize_for_store, deserialize_from_store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Ticket {
//!     show_id: String,
//!     seats: u32,
//! }
//!
//! # fn main() -> cinema_kit::Result<()> {
//! let ticket = Ticket { show_id: "show-1".to_string(), seats: 2 };
//!
//! let bytes = serialize_for_store(&ticket)?;
//! let back: Ticket = deserialize_from_store(&bytes)?;
//! assert_eq!(ticket, back);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Magic header for cinema-kit store entries: b"CNKT"
///
/// This 4-byte signature identifies valid cinema-kit records. Any entry
/// without it is rejected during deserialization.
pub const STORE_MAGIC: [u8; 4] = *b"CNKT";

/// Current schema version.
///
/// Increment when making breaking changes to persisted types:
/// - Adding/removing struct fields
/// - Changing field types
/// - Reordering fields
///
/// Readers reject entries written under a different version with
/// `Error::VersionMismatch`; the entry must then be rewritten from source
/// data.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Versioned envelope for store entries.
///
/// # Example
///
/// ```rust
/// use cinema_kit::serialization::StoreEnvelope;
///
/// let envelope = StoreEnvelope::new("data");
/// assert_eq!(envelope.magic, *b"CNKT");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreEnvelope<T> {
    /// Magic header: must be b"CNKT"
    pub magic: [u8; 4],
    /// Schema version: must match CURRENT_SCHEMA_VERSION
    pub version: u32,
    /// The actual record
    pub payload: T,
}

impl<T> StoreEnvelope<T> {
    /// Create a new envelope with current magic and version.
    pub fn new(payload: T) -> Self {
        Self {
            magic: STORE_MAGIC,
            version: CURRENT_SCHEMA_VERSION,
            payload,
        }
    }
}

/// Serialize a record with envelope for store persistence.
///
/// This is the canonical way to serialize data for the catalog store; every
/// backend receives bytes produced by this function.
///
/// # Errors
///
/// Returns `Error::SerializationError` if Postcard serialization fails.
pub fn serialize_for_store<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let envelope = StoreEnvelope::new(value);
    postcard::to_allocvec(&envelope).map_err(|e| {
        log::error!("Store serialization failed: {}", e);
        Error::SerializationError(e.to_string())
    })
}

/// Deserialize a record from store bytes with validation.
///
/// Performs strict validation:
/// 1. Magic header must be b"CNKT"
/// 2. Version must match CURRENT_SCHEMA_VERSION
/// 3. Postcard payload must decode
///
/// # Errors
///
/// - `Error::InvalidStoreEntry`: invalid magic header
/// - `Error::VersionMismatch`: schema version mismatch
/// - `Error::DeserializationError`: corrupted Postcard payload
pub fn deserialize_from_store<'de, T: Deserialize<'de>>(bytes: &'de [u8]) -> Result<T> {
    let envelope: StoreEnvelope<T> = postcard::from_bytes(bytes).map_err(|e| {
        log::error!("Store deserialization failed: {}", e);
        Error::DeserializationError(e.to_string())
    })?;

    if envelope.magic != STORE_MAGIC {
        log::warn!(
            "Invalid store entry: expected magic {:?}, got {:?}",
            STORE_MAGIC,
            envelope.magic
        );
        return Err(Error::InvalidStoreEntry(format!(
            "Invalid magic: expected {:?}, got {:?}",
            STORE_MAGIC, envelope.magic
        )));
    }

    if envelope.version != CURRENT_SCHEMA_VERSION {
        log::warn!(
            "Store version mismatch: expected {}, got {}",
            CURRENT_SCHEMA_VERSION,
            envelope.version
        );
        return Err(Error::VersionMismatch {
            expected: CURRENT_SCHEMA_VERSION,
            found: envelope.version,
        });
    }

    Ok(envelope.payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    struct TestRecord {
        id: String,
        count: u32,
    }

    fn record() -> TestRecord {
        TestRecord {
            id: "rec_1".to_string(),
            count: 7,
        }
    }

    #[test]
    fn test_roundtrip() {
        let bytes = serialize_for_store(&record()).expect("Failed to serialize");
        let back: TestRecord = deserialize_from_store(&bytes).expect("Failed to deserialize");
        assert_eq!(back, record());
    }

    #[test]
    fn test_determinism() {
        let a = serialize_for_store(&record()).expect("Failed to serialize");
        let b = serialize_for_store(&record()).expect("Failed to serialize");
        assert_eq!(a, b);
    }

    #[test]
    fn test_envelope_magic_present() {
        let bytes = serialize_for_store(&record()).expect("Failed to serialize");
        assert_eq!(&bytes[0..4], b"CNKT");
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut bytes = serialize_for_store(&record()).expect("Failed to serialize");
        bytes[0] = b'X';
        let result: Result<TestRecord> = deserialize_from_store(&bytes);
        assert!(matches!(result, Err(Error::InvalidStoreEntry(_))));
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let envelope = StoreEnvelope {
            magic: STORE_MAGIC,
            version: CURRENT_SCHEMA_VERSION + 1,
            payload: record(),
        };
        let bytes = postcard::to_allocvec(&envelope).expect("Failed to serialize");
        let result: Result<TestRecord> = deserialize_from_store(&bytes);
        assert!(matches!(
            result,
            Err(Error::VersionMismatch { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let result: Result<TestRecord> = deserialize_from_store(&[0xFF, 0x00, 0x13]);
        assert!(result.is_err());
    }
}
