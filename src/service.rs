//! High-level ticketing service for server applications.
//!
//! Provides a convenient wrapper around [`Catalog`] with `Arc` for easy
//! sharing.

use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::{Movie, Show};
use crate::observability::CatalogMetrics;
use crate::store::CatalogStore;
use crate::Catalog;
use std::sync::Arc;

/// High-level ticketing service for server applications.
///
/// Wraps [`Catalog`] in `Arc` for easy sharing across tasks without
/// requiring external `Arc<Mutex<>>` wrappers: the catalog already owns its
/// write lock and the store uses interior mutability, so `&self` methods are
/// safe to call from any task.
///
/// # Example
///
/// ```no_run
/// use cinema_kit::{CinemaService, InMemoryStore, UuidGenerator};
///
/// #[tokio::main]
/// async fn main() -> cinema_kit::Result<()> {
///     let service = CinemaService::new(
///         InMemoryStore::new(),
///         InMemoryStore::new(),
///         UuidGenerator::new(),
///     );
///
///     // Cheap clone - just an Arc increment - for each request handler
///     let handler_copy = service.clone();
///
///     let movie_id = handler_copy
///         .add_movie("Inception", 1000, 150, "10:00", 3, 50)
///         .await?;
///     assert!(service.movie_details(&movie_id).await?.is_some());
///     Ok(())
/// }
/// ```
pub struct CinemaService<S: CatalogStore, G: IdGenerator> {
    catalog: Arc<Catalog<S, G>>,
}

impl<S: CatalogStore, G: IdGenerator> Clone for CinemaService<S, G> {
    fn clone(&self) -> Self {
        CinemaService {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: CatalogStore, G: IdGenerator> CinemaService<S, G> {
    /// Create a new service over the given movie table, show table and id
    /// generator.
    pub fn new(movies: S, shows: S, ids: G) -> Self {
        CinemaService {
            catalog: Arc::new(Catalog::new(movies, shows, ids)),
        }
    }

    /// Create a new service with custom metrics.
    pub fn with_metrics(movies: S, shows: S, ids: G, metrics: Box<dyn CatalogMetrics>) -> Self {
        CinemaService {
            catalog: Arc::new(Catalog::new(movies, shows, ids).with_metrics(metrics)),
        }
    }

    /// Add a movie and its generated show schedule. See
    /// [`Catalog::add_movie`].
    ///
    /// # Errors
    ///
    /// Same error cases as [`Catalog::add_movie`].
    pub async fn add_movie(
        &self,
        name: &str,
        price: u32,
        duration_minutes: i32,
        first_show_time: &str,
        show_amount: i32,
        seat_amount: i32,
    ) -> Result<String> {
        self.catalog
            .add_movie(
                name,
                price,
                duration_minutes,
                first_show_time,
                show_amount,
                seat_amount,
            )
            .await
    }

    /// Delete a movie and its shows. See [`Catalog::delete_movie`].
    ///
    /// # Errors
    ///
    /// Same error cases as [`Catalog::delete_movie`].
    pub async fn delete_movie(&self, movie_id: &str) -> Result<String> {
        self.catalog.delete_movie(movie_id).await
    }

    /// Book seats on a show. See [`Catalog::book_ticket`].
    ///
    /// # Errors
    ///
    /// Same error cases as [`Catalog::book_ticket`].
    pub async fn book_ticket(&self, show_id: &str, seats: u32) -> Result<String> {
        self.catalog.book_ticket(show_id, seats).await
    }

    /// List every movie in store order.
    pub async fn movie_list(&self) -> Result<Vec<Movie>> {
        self.catalog.movie_list().await
    }

    /// List every show in store order.
    pub async fn show_list(&self) -> Result<Vec<Show>> {
        self.catalog.show_list().await
    }

    /// Look up one movie by id.
    pub async fn movie_details(&self, movie_id: &str) -> Result<Option<Movie>> {
        self.catalog.movie_details(movie_id).await
    }

    /// Look up one show by id.
    pub async fn show_details(&self, show_id: &str) -> Result<Option<Show>> {
        self.catalog.show_details(show_id).await
    }

    /// Get a reference to the underlying catalog.
    ///
    /// Use this if you need direct access to catalog methods.
    pub fn catalog(&self) -> &Catalog<S, G> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;
    use crate::store::InMemoryStore;

    fn service() -> CinemaService<InMemoryStore, SequentialGenerator> {
        CinemaService::new(
            InMemoryStore::new(),
            InMemoryStore::new(),
            SequentialGenerator::new("id"),
        )
    }

    #[tokio::test]
    async fn test_service_forwards_operations() {
        let service = service();

        let movie_id = service
            .add_movie("Movie", 500, 60, "09:00", 2, 10)
            .await
            .expect("Failed to add movie");

        assert_eq!(
            service
                .movie_list()
                .await
                .expect("Failed to list")
                .len(),
            1
        );
        assert_eq!(service.show_list().await.expect("Failed to list").len(), 2);

        service
            .delete_movie(&movie_id)
            .await
            .expect("Failed to delete");
        assert!(service
            .movie_details(&movie_id)
            .await
            .expect("Failed to fetch")
            .is_none());
    }

    #[tokio::test]
    async fn test_service_clone_shares_catalog() {
        let service1 = service();
        let service2 = service1.clone();

        assert!(Arc::ptr_eq(&service1.catalog, &service2.catalog));

        service1
            .add_movie("Movie", 500, 60, "09:00", 1, 10)
            .await
            .expect("Failed to add movie");
        assert_eq!(
            service2.movie_list().await.expect("Failed to list").len(),
            1
        );
    }

    #[tokio::test]
    async fn test_service_thread_safety() {
        let service = service();
        let mut handles = vec![];

        for i in 0..5 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .add_movie(&format!("Movie {}", i), 500, 60, "09:00", 1, 10)
                    .await
                    .expect("Failed to add movie");
            }));
        }

        for handle in handles {
            handle.await.expect("Task failed");
        }

        assert_eq!(service.movie_list().await.expect("Failed to list").len(), 5);
        assert_eq!(service.show_list().await.expect("Failed to list").len(), 5);
    }

    #[tokio::test]
    async fn test_service_catalog_access() {
        let service = service();
        let _catalog = service.catalog();
    }
}
