//! Identifier generation for movies and shows.
//!
//! Identifiers are opaque unique tokens; the catalog never inspects them
//! beyond equality. Generation sits behind a trait so tests can inject a
//! deterministic sequence instead of ambient randomness.

use std::sync::atomic::{AtomicU64, Ordering};

/// Trait for identifier generators.
///
/// Implementations must produce tokens that are unique for the lifetime of
/// the catalog. Collisions are treated as practically impossible, not
/// detected.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier.
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers (default).
#[derive(Clone, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Create a new UUID generator.
    pub fn new() -> Self {
        UuidGenerator
    }
}

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic counter-based identifiers for tests.
///
/// Produces `"{prefix}-1"`, `"{prefix}-2"`, ... so assertions can name the
/// records a test expects to exist.
pub struct SequentialGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialGenerator {
    /// Create a generator with the given id prefix.
    pub fn new(prefix: &str) -> Self {
        SequentialGenerator {
            prefix: prefix.to_string(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
