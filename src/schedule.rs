//! Show schedule generation.
//!
//! Given a validated set of inputs, derives the day's sequence of shows for
//! one movie: non-overlapping intervals separated by the cleaning buffer,
//! each with its own seat inventory.

use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::Show;
use crate::rules::{ValidatedSchedule, CLEANING_BUFFER_MINUTES};
use crate::time::format_time;

/// Generate the show sequence for a movie.
///
/// For `i` in `0..show_amount`:
///
/// ```text
/// start_i = first_show + i * (duration + 30)
/// end_i   = start_i + duration
/// ```
///
/// Produces exactly `show_amount` shows with strictly increasing start times
/// and a 30-minute gap between consecutive shows, each seeded with the full
/// seat capacity. Taking a [`ValidatedSchedule`] (only obtainable from
/// `rules::validate`) is what makes this safe: the show-amount bound proven
/// there keeps every computed time inside the day, so no bounds are
/// re-checked here.
///
/// # Example
///
/// ```
/// use cinema_kit::id::SequentialGenerator;
/// use cinema_kit::rules::validate;
/// use cinema_kit::schedule::generate;
///
/// let validated = validate(150, "10:00", 3, 50).unwrap();
/// let shows = generate("movie-1", &validated, &SequentialGenerator::new("show")).unwrap();
///
/// assert_eq!(shows.len(), 3);
/// assert_eq!(shows[0].start_time, "10:00");
/// assert_eq!(shows[0].end_time, "12:30");
/// assert_eq!(shows[2].start_time, "16:00");
/// assert_eq!(shows[2].available_seats, 50);
/// ```
///
/// # Errors
///
/// Propagates `Error::TimeFormatError` from time formatting; unreachable for
/// any `ValidatedSchedule` produced by `rules::validate`.
pub fn generate<G: IdGenerator>(
    movie_id: &str,
    schedule: &ValidatedSchedule,
    ids: &G,
) -> Result<Vec<Show>> {
    let slot = schedule.duration_minutes + CLEANING_BUFFER_MINUTES;
    let mut shows = Vec::with_capacity(schedule.show_amount as usize);

    for i in 0..schedule.show_amount {
        let start = schedule.first_show_minutes + i * slot;
        let end = start + schedule.duration_minutes;

        shows.push(Show {
            id: ids.next_id(),
            movie_id: movie_id.to_string(),
            start_time: format_time(start)?,
            end_time: format_time(end)?,
            available_seats: schedule.seat_amount,
        });
    }

    debug!(
        "Generated {} shows for movie {} starting {}",
        shows.len(),
        movie_id,
        shows
            .first()
            .map(|s| s.start_time.as_str())
            .unwrap_or("n/a")
    );

    Ok(shows)
}
