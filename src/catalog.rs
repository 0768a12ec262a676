//! Catalog - the core of the ticketing backend.
//!
//! Owns the two logical tables (movies, shows) and implements every
//! operation of the remote surface: adding a movie with its generated
//! schedule, cascading deletion, seat booking, and the read accessors.
//!
//! # Atomicity
//!
//! Multi-step mutations (the multi-insert of `add_movie`, the cascade of
//! `delete_movie`, the check-then-decrement of `book_ticket`) must not
//! interleave with each other. On a single-threaded run-to-completion host
//! that holds by construction; this crate targets multi-threaded tokio
//! hosts, so the catalog serializes all mutations behind one async write
//! lock. Reads stay lock-free.

use crate::entity::CatalogEntity;
use crate::error::{Error, Result};
use crate::id::IdGenerator;
use crate::key::StoreKeyBuilder;
use crate::model::{Movie, Show};
use crate::observability::{CatalogMetrics, NoOpMetrics};
use crate::rules;
use crate::schedule;
use crate::store::CatalogStore;
use std::time::Instant;
use tokio::sync::Mutex;

/// Core catalog - movie lifecycle, schedules and bookings.
///
/// Generic over the store backend `S` and the id generator `G`, both
/// injected, so tests run against the in-memory store with deterministic
/// ids and deployments can plug in durable backends.
///
/// # Example
///
/// ```no_run
/// use cinema_kit::{Catalog, InMemoryStore, UuidGenerator};
///
/// #[tokio::main]
/// async fn main() -> cinema_kit::Result<()> {
///     let catalog = Catalog::new(
///         InMemoryStore::new(),
///         InMemoryStore::new(),
///         UuidGenerator::new(),
///     );
///
///     let movie_id = catalog
///         .add_movie("Inception", 1000, 150, "10:00", 3, 50)
///         .await?;
///
///     let shows = catalog.show_list().await?;
///     assert_eq!(shows.len(), 3);
///
///     catalog.book_ticket(&shows[0].id, 2).await?;
///     catalog.delete_movie(&movie_id).await?;
///     Ok(())
/// }
/// ```
pub struct Catalog<S: CatalogStore, G: IdGenerator> {
    movies: S,
    shows: S,
    ids: G,
    metrics: Box<dyn CatalogMetrics>,
    // Serializes all mutating operations; see the module docs.
    write_lock: Mutex<()>,
}

impl<S: CatalogStore, G: IdGenerator> Catalog<S, G> {
    /// Create a catalog over the given movie and show tables.
    pub fn new(movies: S, shows: S, ids: G) -> Self {
        Catalog {
            movies,
            shows,
            ids,
            metrics: Box::new(NoOpMetrics),
            write_lock: Mutex::new(()),
        }
    }

    /// Set a custom metrics handler.
    pub fn with_metrics(mut self, metrics: Box<dyn CatalogMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    // ========================================================================
    // Movie lifecycle
    // ========================================================================

    /// Add a movie and generate its daily show schedule.
    ///
    /// Validation runs first and in full; nothing is persisted if any check
    /// fails. On success the movie record and exactly `show_amount` show
    /// records are written, and the new movie id is returned.
    ///
    /// # Errors
    ///
    /// The first failing validation check is returned: `NotPositiveInteger`,
    /// `TimeFormatError`, `DurationError` or `ShowAmountError` (whose message
    /// carries the computed maximum). Store failures surface as
    /// `BackendError`/`SerializationError`.
    pub async fn add_movie(
        &self,
        name: &str,
        price: u32,
        duration_minutes: i32,
        first_show_time: &str,
        show_amount: i32,
        seat_amount: i32,
    ) -> Result<String> {
        let timer = Instant::now();

        // Everything is computed before the first write, so a failure here
        // leaves no partial state.
        let validated = rules::validate(duration_minutes, first_show_time, show_amount, seat_amount)
            .map_err(|e| {
                self.metrics.record_error(name, &e.to_string());
                e
            })?;

        let movie = Movie {
            id: self.ids.next_id(),
            name: name.to_string(),
            price,
            duration_minutes: validated.duration_minutes,
            first_show_minutes: validated.first_show_minutes,
            show_amount: validated.show_amount,
            seat_amount: validated.seat_amount,
        };
        let shows = schedule::generate(&movie.id, &validated, &self.ids)?;

        let _guard = self.write_lock.lock().await;

        self.persist(&self.movies, &movie).await?;
        for show in &shows {
            self.persist(&self.shows, show).await?;
        }

        info!(
            "Added movie {} ({:?}) with {} shows in {:?}",
            movie.id,
            name,
            shows.len(),
            timer.elapsed()
        );
        Ok(movie.id)
    }

    /// Delete a movie and every show it owns.
    ///
    /// Shows are found by scanning the show table for a matching `movie_id`;
    /// hard delete, no tombstones. Returns the deleted movie's id.
    ///
    /// # Errors
    ///
    /// Returns `Error::MovieDoesNotExist` if the id is not found; nothing is
    /// removed in that case.
    pub async fn delete_movie(&self, movie_id: &str) -> Result<String> {
        let timer = Instant::now();
        let _guard = self.write_lock.lock().await;

        let movie_key = StoreKeyBuilder::build::<Movie>(&movie_id.to_string());
        if self.load::<Movie>(&self.movies, &movie_key).await?.is_none() {
            self.metrics
                .record_error(&movie_key, "delete of missing movie");
            return Err(Error::MovieDoesNotExist(movie_id.to_string()));
        }

        self.movies.remove(&movie_key).await?;

        let mut removed = 0usize;
        for bytes in self.shows.values().await? {
            let show = Show::deserialize_from_store(&bytes)?;
            if show.movie_id == movie_id {
                let show_key = StoreKeyBuilder::build::<Show>(&show.id);
                self.shows.remove(&show_key).await?;
                removed += 1;
            }
        }

        self.metrics
            .record_delete(movie_id, removed, timer.elapsed());
        info!(
            "Deleted movie {} and {} shows in {:?}",
            movie_id,
            removed,
            timer.elapsed()
        );
        Ok(movie_id.to_string())
    }

    // ========================================================================
    // Booking
    // ========================================================================

    /// Book seats on a show.
    ///
    /// Decrements the show's available seats and persists the updated
    /// record. Check and decrement happen under the write lock, so two
    /// concurrent bookings can never oversell a show. Returns the show id.
    ///
    /// # Errors
    ///
    /// - `Error::ScheduleDoesNotExist`: no show under `show_id`
    /// - `Error::NoAvailableSeats`: `seats` exceeds the remaining seats; the
    ///   record is left unchanged
    pub async fn book_ticket(&self, show_id: &str, seats: u32) -> Result<String> {
        let timer = Instant::now();
        let _guard = self.write_lock.lock().await;

        let show_key = StoreKeyBuilder::build::<Show>(&show_id.to_string());
        let mut show = match self.load::<Show>(&self.shows, &show_key).await? {
            Some(show) => show,
            None => {
                self.metrics
                    .record_error(&show_key, "booking against missing show");
                return Err(Error::ScheduleDoesNotExist(show_id.to_string()));
            }
        };

        if seats > show.available_seats {
            let msg = format!(
                "show {} has {} seats left, {} requested",
                show_id, show.available_seats, seats
            );
            self.metrics.record_error(&show_key, &msg);
            return Err(Error::NoAvailableSeats(msg));
        }

        show.available_seats -= seats;
        self.persist(&self.shows, &show).await?;

        self.metrics.record_booking(show_id, seats, timer.elapsed());
        info!(
            "Booked {} seats on show {} ({} left) in {:?}",
            seats,
            show_id,
            show.available_seats,
            timer.elapsed()
        );
        Ok(show.id)
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// List every movie, in store (key) order.
    pub async fn movie_list(&self) -> Result<Vec<Movie>> {
        self.list::<Movie>(&self.movies).await
    }

    /// List every show, in store (key) order.
    pub async fn show_list(&self) -> Result<Vec<Show>> {
        self.list::<Show>(&self.shows).await
    }

    /// Look up one movie by id.
    pub async fn movie_details(&self, movie_id: &str) -> Result<Option<Movie>> {
        let key = StoreKeyBuilder::build::<Movie>(&movie_id.to_string());
        self.load::<Movie>(&self.movies, &key).await
    }

    /// Look up one show by id.
    pub async fn show_details(&self, show_id: &str) -> Result<Option<Show>> {
        let key = StoreKeyBuilder::build::<Show>(&show_id.to_string());
        self.load::<Show>(&self.shows, &key).await
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn persist<T: CatalogEntity>(&self, store: &S, entity: &T) -> Result<()> {
        let timer = Instant::now();
        let key = StoreKeyBuilder::build::<T>(&entity.catalog_key());
        let bytes = entity.serialize_for_store()?;
        store.insert(&key, bytes).await?;
        self.metrics.record_insert(&key, timer.elapsed());
        Ok(())
    }

    async fn load<T: CatalogEntity>(&self, store: &S, key: &str) -> Result<Option<T>> {
        let timer = Instant::now();
        match store.get(key).await? {
            Some(bytes) => {
                let entity = T::deserialize_from_store(&bytes)?;
                entity.validate()?;
                self.metrics.record_lookup(key, true, timer.elapsed());
                Ok(Some(entity))
            }
            None => {
                self.metrics.record_lookup(key, false, timer.elapsed());
                Ok(None)
            }
        }
    }

    async fn list<T: CatalogEntity>(&self, store: &S) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for bytes in store.values().await? {
            let entity = T::deserialize_from_store(&bytes)?;
            entity.validate()?;
            records.push(entity);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;
    use crate::store::InMemoryStore;

    fn catalog() -> Catalog<InMemoryStore, SequentialGenerator> {
        Catalog::new(
            InMemoryStore::new(),
            InMemoryStore::new(),
            SequentialGenerator::new("id"),
        )
    }

    #[tokio::test]
    async fn test_add_movie_persists_movie_and_shows() {
        let catalog = catalog();

        let movie_id = catalog
            .add_movie("Inception", 1000, 150, "10:00", 3, 50)
            .await
            .expect("Failed to add movie");

        let movie = catalog
            .movie_details(&movie_id)
            .await
            .expect("Failed to fetch movie")
            .expect("Movie not found");
        assert_eq!(movie.name, "Inception");
        assert_eq!(movie.first_show_minutes, 600);

        let shows = catalog.show_list().await.expect("Failed to list shows");
        assert_eq!(shows.len(), 3);
        assert!(shows.iter().all(|s| s.movie_id == movie_id));
        assert!(shows.iter().all(|s| s.available_seats == 50));
    }

    #[tokio::test]
    async fn test_add_movie_validation_failure_writes_nothing() {
        let catalog = catalog();

        let result = catalog.add_movie("X", 100, 800, "10:00", 1, 10).await;
        assert!(matches!(result, Err(Error::DurationError(_))));

        assert!(catalog
            .movie_list()
            .await
            .expect("Failed to list")
            .is_empty());
        assert!(catalog
            .show_list()
            .await
            .expect("Failed to list")
            .is_empty());
    }

    #[tokio::test]
    async fn test_book_ticket_decrements_seats() {
        let catalog = catalog();
        catalog
            .add_movie("Movie", 500, 90, "12:00", 1, 10)
            .await
            .expect("Failed to add movie");
        let show = &catalog.show_list().await.expect("Failed to list")[0];

        let booked = catalog
            .book_ticket(&show.id, 4)
            .await
            .expect("Failed to book");
        assert_eq!(booked, show.id);

        let updated = catalog
            .show_details(&show.id)
            .await
            .expect("Failed to fetch show")
            .expect("Show not found");
        assert_eq!(updated.available_seats, 6);
    }

    #[tokio::test]
    async fn test_book_ticket_missing_show() {
        let catalog = catalog();
        let result = catalog.book_ticket("nope", 1).await;
        assert_eq!(result, Err(Error::ScheduleDoesNotExist("nope".to_string())));
    }

    #[tokio::test]
    async fn test_book_ticket_overbooking_leaves_seats_unchanged() {
        let catalog = catalog();
        catalog
            .add_movie("Movie", 500, 90, "12:00", 1, 50)
            .await
            .expect("Failed to add movie");
        let show = &catalog.show_list().await.expect("Failed to list")[0];

        let result = catalog.book_ticket(&show.id, 60).await;
        assert!(matches!(result, Err(Error::NoAvailableSeats(_))));

        let unchanged = catalog
            .show_details(&show.id)
            .await
            .expect("Failed to fetch show")
            .expect("Show not found");
        assert_eq!(unchanged.available_seats, 50);
    }

    #[tokio::test]
    async fn test_book_ticket_exhausts_then_rejects() {
        let catalog = catalog();
        catalog
            .add_movie("Movie", 500, 90, "12:00", 1, 50)
            .await
            .expect("Failed to add movie");
        let show_id = catalog.show_list().await.expect("Failed to list")[0]
            .id
            .clone();

        catalog
            .book_ticket(&show_id, 50)
            .await
            .expect("Failed to book");
        let result = catalog.book_ticket(&show_id, 1).await;
        assert!(matches!(result, Err(Error::NoAvailableSeats(_))));

        let drained = catalog
            .show_details(&show_id)
            .await
            .expect("Failed to fetch show")
            .expect("Show not found");
        assert_eq!(drained.available_seats, 0);
    }

    #[tokio::test]
    async fn test_book_zero_seats_is_noop_success() {
        let catalog = catalog();
        catalog
            .add_movie("Movie", 500, 90, "12:00", 1, 10)
            .await
            .expect("Failed to add movie");
        let show_id = catalog.show_list().await.expect("Failed to list")[0]
            .id
            .clone();

        catalog
            .book_ticket(&show_id, 0)
            .await
            .expect("Failed to book");
        let show = catalog
            .show_details(&show_id)
            .await
            .expect("Failed to fetch show")
            .expect("Show not found");
        assert_eq!(show.available_seats, 10);
    }

    #[tokio::test]
    async fn test_delete_movie_cascades_to_shows() {
        let catalog = catalog();
        let keep_id = catalog
            .add_movie("Keep", 500, 60, "09:00", 2, 20)
            .await
            .expect("Failed to add movie");
        let drop_id = catalog
            .add_movie("Drop", 500, 60, "09:00", 3, 20)
            .await
            .expect("Failed to add movie");

        let deleted = catalog
            .delete_movie(&drop_id)
            .await
            .expect("Failed to delete");
        assert_eq!(deleted, drop_id);

        assert!(catalog
            .movie_details(&drop_id)
            .await
            .expect("Failed to fetch")
            .is_none());

        let shows = catalog.show_list().await.expect("Failed to list");
        assert_eq!(shows.len(), 2);
        assert!(shows.iter().all(|s| s.movie_id == keep_id));
    }

    #[tokio::test]
    async fn test_delete_missing_movie() {
        let catalog = catalog();
        let result = catalog.delete_movie("ghost").await;
        assert_eq!(result, Err(Error::MovieDoesNotExist("ghost".to_string())));
    }

    #[tokio::test]
    async fn test_lists_empty_catalog() {
        let catalog = catalog();
        assert!(catalog
            .movie_list()
            .await
            .expect("Failed to list")
            .is_empty());
        assert!(catalog
            .show_list()
            .await
            .expect("Failed to list")
            .is_empty());
        assert!(catalog
            .movie_details("none")
            .await
            .expect("Failed to fetch")
            .is_none());
        assert!(catalog
            .show_details("none")
            .await
            .expect("Failed to fetch")
            .is_none());
    }
}
