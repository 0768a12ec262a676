//! Time-of-day utilities: `HH:mm` strings and minutes-since-midnight.
//!
//! Show times are stored as zero-padded `HH:mm` strings and computed as
//! integer minutes since midnight. The two functions here are exact inverses
//! over the valid range: `format_time(parse_time(s)?)? == s` for every
//! well-formed `s`.

use crate::error::{Error, Result};

/// Minutes in a 24-hour day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parse a `HH:mm` string into minutes since midnight.
///
/// Accepts only zero-padded strings with hours in `00..=23` and minutes in
/// `00..=59`. The format is deliberately strict: `9:30`, `09:3`, `09-30` and
/// `24:00` are all rejected.
///
/// # Example
///
/// ```
/// use cinema_kit::time::parse_time;
///
/// assert_eq!(parse_time("10:00").unwrap(), 600);
/// assert_eq!(parse_time("23:59").unwrap(), 1439);
/// assert!(parse_time("24:00").is_err());
/// ```
///
/// # Errors
///
/// Returns `Error::TimeFormatError` for any input not matching the format.
pub fn parse_time(text: &str) -> Result<u32> {
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(Error::TimeFormatError(format!(
            "expected HH:mm, got {:?}",
            text
        )));
    }

    let digit = |b: u8| -> Result<u32> {
        if b.is_ascii_digit() {
            Ok(u32::from(b - b'0'))
        } else {
            Err(Error::TimeFormatError(format!(
                "expected HH:mm, got {:?}",
                text
            )))
        }
    };

    let hours = digit(bytes[0])? * 10 + digit(bytes[1])?;
    let minutes = digit(bytes[3])? * 10 + digit(bytes[4])?;

    if hours > 23 {
        return Err(Error::TimeFormatError(format!(
            "hours out of range in {:?}",
            text
        )));
    }
    if minutes > 59 {
        return Err(Error::TimeFormatError(format!(
            "minutes out of range in {:?}",
            text
        )));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded `HH:mm` string.
///
/// The input must lie in `0..MINUTES_PER_DAY`. Validated schedules never
/// produce values outside that range (the show-amount bound keeps the last
/// show's end inside the day), so an out-of-range value here means a caller
/// bug and is reported rather than wrapped.
///
/// # Errors
///
/// Returns `Error::TimeFormatError` if `minutes >= 1440`.
pub fn format_time(minutes: u32) -> Result<String> {
    if minutes >= MINUTES_PER_DAY {
        return Err(Error::TimeFormatError(format!(
            "{} minutes does not fit into a 24-hour day",
            minutes
        )));
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}
