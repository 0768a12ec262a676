//! Validation rules for movie schedules.
//!
//! Four checks run in a fixed order; the first failure is returned and no
//! later check executes. Validation happens before any persistence, so a
//! rejected `add_movie` call leaves the catalog untouched.
//!
//! 1. `duration_minutes`, `show_amount` and `seat_amount` must be positive
//!    (`NotPositiveInteger`)
//! 2. `first_show_time` must parse as `HH:mm` (`TimeFormatError`)
//! 3. `duration_minutes` must not exceed [`MAX_DURATION_MINUTES`]
//!    (`DurationError`)
//! 4. `show_amount` must fit into the remaining day, accounting for the
//!    cleaning buffer between shows (`ShowAmountError`; the message carries
//!    the computed maximum)

use crate::error::{Error, Result};
use crate::time::{parse_time, MINUTES_PER_DAY};

/// Maximum movie duration in minutes (12 hours).
pub const MAX_DURATION_MINUTES: u32 = 720;

/// Fixed gap enforced between consecutive shows of the same movie.
pub const CLEANING_BUFFER_MINUTES: u32 = 30;

/// Inputs that passed all validation checks.
///
/// Carries the already-parsed first show time and unsigned copies of the
/// numeric inputs so downstream code (the schedule generator, the catalog)
/// never re-validates or re-parses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSchedule {
    /// First show start, minutes since midnight.
    pub first_show_minutes: u32,
    /// Movie runtime in minutes, `1..=720`.
    pub duration_minutes: u32,
    /// Number of shows to generate, `1..=max_shows`.
    pub show_amount: u32,
    /// Seat capacity of every generated show.
    pub seat_amount: u32,
    /// Largest show count that fits into the day for these inputs.
    pub max_shows: u32,
}

/// How many shows of the given duration fit into the day.
///
/// A show occupies `duration + CLEANING_BUFFER_MINUTES` on the timeline, so
/// `max = floor((1440 - first_show_minutes) / (duration + 30))`. The bound
/// guarantees that the last generated show ends inside the day.
pub fn max_shows(first_show_minutes: u32, duration_minutes: u32) -> u32 {
    (MINUTES_PER_DAY - first_show_minutes) / (duration_minutes + CLEANING_BUFFER_MINUTES)
}

/// Validate `add_movie` schedule inputs.
///
/// Inputs arrive signed so the positivity check is meaningful at the remote
/// boundary; the returned [`ValidatedSchedule`] holds unsigned values.
///
/// # Example
///
/// ```
/// use cinema_kit::rules::validate;
///
/// let v = validate(150, "10:00", 3, 50).unwrap();
/// assert_eq!(v.first_show_minutes, 600);
/// assert_eq!(v.max_shows, 4);
///
/// // 800 minutes exceeds the 720-minute cap
/// assert!(validate(800, "10:00", 1, 10).is_err());
/// ```
///
/// # Errors
///
/// The first failing check's error is returned: `NotPositiveInteger`,
/// `TimeFormatError`, `DurationError` or `ShowAmountError`, in that order.
pub fn validate(
    duration_minutes: i32,
    first_show_time: &str,
    show_amount: i32,
    seat_amount: i32,
) -> Result<ValidatedSchedule> {
    if duration_minutes <= 0 || show_amount <= 0 || seat_amount <= 0 {
        return Err(Error::NotPositiveInteger(format!(
            "duration_minutes={}, show_amount={}, seat_amount={} must all be positive",
            duration_minutes, show_amount, seat_amount
        )));
    }

    let first_show_minutes = parse_time(first_show_time)?;

    let duration_minutes = duration_minutes as u32;
    let show_amount = show_amount as u32;
    let seat_amount = seat_amount as u32;

    if duration_minutes > MAX_DURATION_MINUTES {
        return Err(Error::DurationError(format!(
            "duration of {} minutes exceeds the maximum of {}",
            duration_minutes, MAX_DURATION_MINUTES
        )));
    }

    let max_shows = max_shows(first_show_minutes, duration_minutes);
    if show_amount > max_shows {
        return Err(Error::ShowAmountError(format!(
            "{} shows requested but at most {} fit after {}",
            show_amount, max_shows, first_show_time
        )));
    }

    Ok(ValidatedSchedule {
        first_show_minutes,
        duration_minutes,
        show_amount,
        seat_amount,
        max_shows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_feasible_schedule() {
        let v = validate(150, "10:00", 3, 50).expect("Failed to validate");
        assert_eq!(v.first_show_minutes, 600);
        assert_eq!(v.duration_minutes, 150);
        assert_eq!(v.show_amount, 3);
        assert_eq!(v.seat_amount, 50);
        // (1440 - 600) / (150 + 30) = 4
        assert_eq!(v.max_shows, 4);
    }

    #[test]
    fn test_validate_rejects_non_positive_inputs() {
        assert!(matches!(
            validate(0, "10:00", 3, 50),
            Err(Error::NotPositiveInteger(_))
        ));
        assert!(matches!(
            validate(150, "10:00", -1, 50),
            Err(Error::NotPositiveInteger(_))
        ));
        assert!(matches!(
            validate(150, "10:00", 3, 0),
            Err(Error::NotPositiveInteger(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_time_format() {
        assert!(matches!(
            validate(150, "25:00", 3, 50),
            Err(Error::TimeFormatError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_overlong_duration() {
        assert!(matches!(
            validate(800, "10:00", 1, 10),
            Err(Error::DurationError(_))
        ));
        // 720 exactly is still allowed
        assert!(validate(720, "00:00", 1, 10).is_ok());
    }

    #[test]
    fn test_validate_rejects_too_many_shows() {
        let err = validate(150, "10:00", 5, 50).expect_err("Should reject");
        match err {
            Error::ShowAmountError(msg) => {
                assert!(msg.contains("at most 4"), "message was: {}", msg)
            }
            other => panic!("expected ShowAmountError, got {:?}", other),
        }
    }

    #[test]
    fn test_checks_run_in_order() {
        // Non-positive duration wins over the bad time format
        assert!(matches!(
            validate(-5, "nonsense", 3, 50),
            Err(Error::NotPositiveInteger(_))
        ));
        // Bad time format wins over the overlong duration
        assert!(matches!(
            validate(800, "nonsense", 3, 50),
            Err(Error::TimeFormatError(_))
        ));
    }

    #[test]
    fn test_max_shows_late_start() {
        // Starting at 23:30 leaves room for nothing at 60 minutes runtime
        assert_eq!(max_shows(1410, 60), 0);
        // A midnight start fits the whole day
        assert_eq!(max_shows(0, 90), 12);
    }
}
