//! Error types for the ticketing core.

use std::fmt;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the ticketing core.
///
/// All catalog operations return `Result<T>` where `Result` is defined as
/// `std::result::Result<T, Error>`. Every variant is an expected, recoverable,
/// caller-visible outcome - nothing here is raised as an unrecoverable fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No movie is stored under the given identifier.
    ///
    /// Carries the offending movie id. Returned by `delete_movie` before any
    /// mutation happens.
    MovieDoesNotExist(String),

    /// No show is stored under the given identifier.
    ///
    /// Carries the offending show id. Returned by `book_ticket` before any
    /// mutation happens.
    ScheduleDoesNotExist(String),

    /// A booking asked for more seats than the show has left.
    ///
    /// The show record is left untouched - repeated attempts keep failing
    /// with this variant until a smaller booking fits.
    NoAvailableSeats(String),

    /// A numeric input that must be a positive integer was zero or negative.
    ///
    /// Raised by validation for `duration_minutes`, `show_amount` and
    /// `seat_amount`. Checked first; no other validation runs after it fails.
    NotPositiveInteger(String),

    /// The first show time does not match the `HH:mm` format.
    ///
    /// Accepted values are zero-padded with hours in `00..=23` and minutes
    /// in `00..=59`. Anything else - wrong length, missing colon, out-of-range
    /// fields - lands here.
    TimeFormatError(String),

    /// The movie duration exceeds the maximum of 720 minutes.
    DurationError(String),

    /// The requested show count does not fit into the remaining day.
    ///
    /// The message includes the computed maximum so callers can retry with a
    /// feasible value.
    ShowAmountError(String),

    /// Serialization failed when converting a record to store bytes.
    ///
    /// This occurs when the record's Serde implementation or the Postcard
    /// codec fails.
    SerializationError(String),

    /// Deserialization failed when converting store bytes to a record.
    ///
    /// This indicates corrupted or malformed data in the store.
    ///
    /// **Recovery:** the store entry should be removed and re-created.
    DeserializationError(String),

    /// Backend storage error.
    ///
    /// This indicates the catalog store is unavailable or returned an error.
    /// The in-memory store never produces it; external backends (a database,
    /// a stable-memory map) map their failures here.
    ///
    /// **Recovery:** retry the operation.
    BackendError(String),

    /// Invalid store entry: corrupted envelope or bad magic.
    ///
    /// Returned when:
    /// - Magic header is not `b"CNKT"`
    /// - Envelope deserialization fails
    /// - Non-cinema-kit data under a catalog key
    InvalidStoreEntry(String),

    /// Schema version mismatch between code and stored data.
    ///
    /// Raised when `CURRENT_SCHEMA_VERSION` changed between the writer and
    /// the reader of a record. Expected during deployments; the entry must
    /// be rewritten.
    VersionMismatch {
        /// Expected schema version (from compiled code)
        expected: u32,
        /// Found schema version (from the stored entry)
        found: u32,
    },

    /// Generic error with custom message.
    ///
    /// Used for errors that don't fit into other variants.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MovieDoesNotExist(id) => write!(f, "Movie does not exist: {}", id),
            Error::ScheduleDoesNotExist(id) => write!(f, "Schedule does not exist: {}", id),
            Error::NoAvailableSeats(msg) => write!(f, "No available seats: {}", msg),
            Error::NotPositiveInteger(msg) => write!(f, "Not a positive integer: {}", msg),
            Error::TimeFormatError(msg) => write!(f, "Time format error: {}", msg),
            Error::DurationError(msg) => write!(f, "Duration error: {}", msg),
            Error::ShowAmountError(msg) => write!(f, "Show amount error: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Error::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidStoreEntry(msg) => write!(f, "Invalid store entry: {}", msg),
            Error::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Store version mismatch: expected {}, found {}",
                    expected, found
                )
            }
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::BackendError(e.to_string())
        } else if e.is_syntax() {
            Error::DeserializationError(e.to_string())
        } else {
            Error::SerializationError(e.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::BackendError(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}
