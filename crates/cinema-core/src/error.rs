//! Error types for cinema scheduling operations.

use thiserror::Error;

use crate::time::TimeOfDay;

/// Errors produced while parsing an `H:MM` / `HH:MM` string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The text is not one or two digits, a colon, then two digits.
    #[error("Malformed time {0:?}: expected H:MM or HH:MM")]
    Malformed(String),

    /// The text has the right shape but hours are zero or minutes exceed 60.
    #[error("Invalid time {hours}:{minutes:02}: hours must be at least 1 and minutes at most 60")]
    OutOfRange { hours: u32, minutes: u32 },
}

/// The computed end of a showing falls on or after midnight.
///
/// Carries the end time the calculation arrived at, which is always 24:00 or later.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Film would end at {end_hours}:{end_minutes:02}, after midnight")]
pub struct EndsAfterMidnight {
    pub end_hours: u32,
    pub end_minutes: u32,
}

/// Errors returned by the schedule store. A failed call never modifies the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Exceeded max capacity: {capacity} (maximum is {max})")]
    CapacityExceeded { capacity: u32, max: u32 },

    #[error("Screen capacity must be at least 1")]
    ZeroCapacity,

    #[error("Screen already exists: {0}")]
    DuplicateScreen(String),

    #[error("Film already exists: {0}")]
    DuplicateFilm(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(#[source] TimeError),

    #[error("Invalid start time: {0}")]
    InvalidStartTime(#[source] TimeError),

    #[error("Unknown film: {0}")]
    UnknownFilm(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error(transparent)]
    EndsAfterMidnight(#[from] EndsAfterMidnight),

    /// The candidate showing overlaps one already booked on the screen.
    #[error("Time unavailable: {screen} is showing {film} from {start} to {end}")]
    TimeUnavailable {
        screen: String,
        film: String,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

/// Convenience alias used throughout cinema-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
