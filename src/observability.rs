//! Observability hooks for catalog operations.
//!
//! The catalog reports every lifecycle event - inserts, lookups, bookings,
//! deletions, failures - through the [`CatalogMetrics`] trait. Implement it
//! to wire the catalog into your monitoring system:
//!
//! ```ignore
//! use cinema_kit::observability::CatalogMetrics;
//! use std::time::Duration;
//!
//! struct PrometheusMetrics;
//!
//! impl CatalogMetrics for PrometheusMetrics {
//!     fn record_booking(&self, _show_id: &str, _seats: u32, _duration: Duration) {
//!         // counter!("tickets_booked").inc_by(seats);
//!         // histogram!("booking_latency").record(duration);
//!     }
//!     // ... implement other methods
//! }
//!
//! // let catalog = Catalog::new(movies, shows, ids)
//! //     .with_metrics(Box::new(PrometheusMetrics));
//! ```
//!
//! Default behavior (if not overridden) logs via the `log` crate;
//! [`NoOpMetrics`] silences everything.

use std::time::Duration;

/// Trait for catalog metrics collection.
pub trait CatalogMetrics: Send + Sync {
    /// Record a persisted movie or show.
    fn record_insert(&self, key: &str, duration: Duration) {
        debug!("Catalog INSERT: {} took {:?}", key, duration);
    }

    /// Record a read (hit or miss) against the store.
    fn record_lookup(&self, key: &str, hit: bool, duration: Duration) {
        debug!(
            "Catalog LOOKUP: {} -> {} took {:?}",
            key,
            if hit { "HIT" } else { "MISS" },
            duration
        );
    }

    /// Record a successful booking.
    fn record_booking(&self, show_id: &str, seats: u32, duration: Duration) {
        debug!(
            "Catalog BOOKING: {} seats on {} took {:?}",
            seats, show_id, duration
        );
    }

    /// Record a deleted movie and its cascaded shows.
    fn record_delete(&self, movie_id: &str, shows_removed: usize, duration: Duration) {
        debug!(
            "Catalog DELETE: {} (+{} shows) took {:?}",
            movie_id, shows_removed, duration
        );
    }

    /// Record a failed operation.
    fn record_error(&self, key: &str, error: &str) {
        warn!("Catalog ERROR for {}: {}", key, error);
    }
}

/// Default metrics implementation (no-op).
#[derive(Clone, Default)]
pub struct NoOpMetrics;

impl CatalogMetrics for NoOpMetrics {
    fn record_insert(&self, _key: &str, _duration: Duration) {}
    fn record_lookup(&self, _key: &str, _hit: bool, _duration: Duration) {}
    fn record_booking(&self, _show_id: &str, _seats: u32, _duration: Duration) {}
    fn record_delete(&self, _movie_id: &str, _shows_removed: usize, _duration: Duration) {}
    fn record_error(&self, _key: &str, _error: &str) {}
}
