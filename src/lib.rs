//! # cinema-kit
//!
//! A type-safe cinema ticketing core: show scheduling, seat booking, and
//! pluggable catalog storage.
//!
//! ## Features
//!
//! - **Schedule generation:** derive a movie's daily shows - non-overlapping,
//!   30-minute cleaning buffer, per-show seat inventory - from validated inputs
//! - **Booking ledger:** check-then-decrement seat booking that can never
//!   oversell, serialized behind one async write lock
//! - **Backend agnostic:** the [`CatalogStore`] trait abstracts persistence;
//!   an in-memory store ships by default
//! - **Deterministic tests:** identifiers come from an injectable
//!   [`IdGenerator`], so tests can name every record they expect
//! - **Production ready:** built-in logging, metrics hooks, and a closed
//!   error enum of caller-visible outcomes
//!
//! ## Quick Start
//!
//! Use [`CinemaService`] for easy sharing across tasks:
//!
//! ```no_run
//! use cinema_kit::{CinemaService, InMemoryStore, UuidGenerator};
//!
//! #[tokio::main]
//! async fn main() -> cinema_kit::Result<()> {
//!     // One store instance per logical table
//!     let service = CinemaService::new(
//!         InMemoryStore::new(),
//!         InMemoryStore::new(),
//!         UuidGenerator::new(),
//!     );
//!
//!     // Three shows: 10:00-12:30, 13:00-15:30, 16:00-18:30
//!     let movie_id = service
//!         .add_movie("Inception", 1000, 150, "10:00", 3, 50)
//!         .await?;
//!
//!     let shows = service.show_list().await?;
//!     service.book_ticket(&shows[0].id, 2).await?;
//!
//!     service.delete_movie(&movie_id).await?;
//!     Ok(())
//! }
//! ```
//!
//! For explicit control - custom metrics, direct table access - construct a
//! [`Catalog`] yourself and wrap it in `Arc` as needed.

#[macro_use]
extern crate log;

pub mod catalog;
pub mod entity;
pub mod error;
pub mod id;
pub mod key;
pub mod model;
pub mod observability;
pub mod rules;
pub mod schedule;
pub mod serialization;
pub mod service;
pub mod store;
pub mod time;

// Re-exports for convenience
pub use catalog::Catalog;
pub use entity::CatalogEntity;
pub use error::{Error, Result};
pub use id::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use model::{Movie, Show};
pub use observability::CatalogMetrics;
pub use service::CinemaService;
pub use store::{CatalogStore, InMemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
