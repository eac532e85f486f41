//! `H:MM` parsing and the minutes-since-midnight representation.
//!
//! Parsing yields an [`HoursMinutes`] pair exactly as written. Callers that need a
//! scalar normalise it with [`HoursMinutes::total_minutes`] (`hours * 60 + minutes`).

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// Number of minutes in a day; every [`TimeOfDay`] is strictly below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// An (hours, minutes) pair as parsed, not yet normalised.
///
/// Used both for wall-clock start times and for film durations. Minutes may be 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoursMinutes {
    pub hours: u32,
    pub minutes: u32,
}

impl HoursMinutes {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// `hours * 60 + minutes`.
    pub const fn total_minutes(self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for HoursMinutes {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

/// A point within a single day, stored as minutes since midnight in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Returns `None` when `minutes` does not fall within a single day.
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Normalises an hour/minute pair with `hours * 60 + minutes`.
    pub const fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        Self::from_minutes(hours.saturating_mul(60).saturating_add(minutes))
    }

    pub const fn minutes_since_midnight(self) -> u32 {
        self.0
    }

    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    pub const fn minute(self) -> u32 {
        self.0 % 60
    }
}

/// Displays as `H:MM`: hours unpadded, minutes always two digits.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

/// Parse an `H:MM` or `HH:MM` string.
///
/// Hours are one or two ASCII digits and must be at least 1. Minutes are exactly
/// two ASCII digits and may be at most **60**: `"10:60"` is accepted and
/// normalises to 11:00. There is no upper bound on hours here; a start time such
/// as `"25:00"` parses and is rejected later as ending after midnight.
///
/// # Errors
/// Returns [`TimeError::Malformed`] if the text does not have the expected shape
/// and [`TimeError::OutOfRange`] if hours are zero or minutes exceed 60.
pub fn parse_time(text: &str) -> Result<HoursMinutes, TimeError> {
    let malformed = || TimeError::Malformed(text.to_string());

    let (hours_text, minutes_text) = text.split_once(':').ok_or_else(malformed)?;
    if !(1..=2).contains(&hours_text.len()) || minutes_text.len() != 2 {
        return Err(malformed());
    }
    let hours = ascii_number(hours_text).ok_or_else(malformed)?;
    let minutes = ascii_number(minutes_text).ok_or_else(malformed)?;

    if hours == 0 || minutes > 60 {
        return Err(TimeError::OutOfRange { hours, minutes });
    }

    Ok(HoursMinutes { hours, minutes })
}

/// Decimal value of a short run of ASCII digits; `None` if any byte is not a digit.
fn ascii_number(digits: &str) -> Option<u32> {
    digits.bytes().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

