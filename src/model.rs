//! Movie and Show records.
//!
//! A Movie and its Shows are created atomically by one `add_movie` call;
//! deleting the movie cascades to every show whose `movie_id` matches. Shows
//! carry no back-reference list on the movie side - cascade deletion filters
//! by `movie_id` instead.

use crate::entity::CatalogEntity;
use crate::error::{Error, Result};
use crate::rules::MAX_DURATION_MINUTES;
use crate::time::parse_time;
use serde::{Deserialize, Serialize};

/// A movie in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// Opaque unique identifier.
    pub id: String,
    /// Title.
    pub name: String,
    /// Ticket price in the smallest currency unit.
    pub price: u32,
    /// Runtime in minutes, `1..=720`.
    pub duration_minutes: u32,
    /// First show start, minutes since midnight.
    pub first_show_minutes: u32,
    /// Number of shows scheduled per day.
    pub show_amount: u32,
    /// Seat capacity of each show.
    pub seat_amount: u32,
}

impl CatalogEntity for Movie {
    type Key = String;

    fn catalog_key(&self) -> Self::Key {
        self.id.clone()
    }

    fn catalog_prefix() -> &'static str {
        "movie"
    }

    fn validate(&self) -> Result<()> {
        if self.duration_minutes == 0 || self.duration_minutes > MAX_DURATION_MINUTES {
            return Err(Error::InvalidStoreEntry(format!(
                "movie {} has out-of-range duration {}",
                self.id, self.duration_minutes
            )));
        }
        Ok(())
    }
}

/// One scheduled screening of a movie with its own seat inventory.
///
/// Source-domain term: "Schedule". Start and end are stored as formatted
/// `HH:mm` strings; `end == start + duration` and consecutive shows of the
/// same movie are 30 minutes apart by construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Show {
    /// Opaque unique identifier.
    pub id: String,
    /// Identifier of the owning movie.
    pub movie_id: String,
    /// Start time of day, `HH:mm`.
    pub start_time: String,
    /// End time of day, `HH:mm`.
    pub end_time: String,
    /// Seats still bookable, `0..=seat_amount` of the owning movie.
    pub available_seats: u32,
}

impl CatalogEntity for Show {
    type Key = String;

    fn catalog_key(&self) -> Self::Key {
        self.id.clone()
    }

    fn catalog_prefix() -> &'static str {
        "show"
    }

    fn validate(&self) -> Result<()> {
        // Times are written by the generator; a record that no longer parses
        // is corrupt, not merely stale.
        let start = parse_time(&self.start_time)
            .map_err(|_| corrupt_times(&self.id, &self.start_time))?;
        let end =
            parse_time(&self.end_time).map_err(|_| corrupt_times(&self.id, &self.end_time))?;
        if end <= start {
            return Err(Error::InvalidStoreEntry(format!(
                "show {} ends at {} before it starts at {}",
                self.id, self.end_time, self.start_time
            )));
        }
        Ok(())
    }
}

fn corrupt_times(id: &str, text: &str) -> Error {
    Error::InvalidStoreEntry(format!("show {} has unparseable time {:?}", id, text))
}
