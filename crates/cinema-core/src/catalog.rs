//! Films, screens and the showings booked on them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::overlap::Interval;
use crate::time::{HoursMinutes, TimeOfDay};

/// Largest audience a single screen may seat.
pub const MAX_SCREEN_CAPACITY: u32 = 100;

/// Age classification of a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "U")]
    Universal,
    #[serde(rename = "PG")]
    ParentalGuidance,
    #[serde(rename = "12")]
    Twelve,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "18")]
    Eighteen,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::Universal,
        Rating::ParentalGuidance,
        Rating::Twelve,
        Rating::Fifteen,
        Rating::Eighteen,
    ];

    /// The certificate as printed on a listing.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rating::Universal => "U",
            Rating::ParentalGuidance => "PG",
            Rating::Twelve => "12",
            Rating::Fifteen => "15",
            Rating::Eighteen => "18",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the certificate codes.
impl FromStr for Rating {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or_else(|| ScheduleError::InvalidRating(s.to_string()))
    }
}

/// A film in the catalog. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub name: String,
    pub rating: Rating,
    /// Running time, excluding the cleaning buffer.
    pub duration: HoursMinutes,
}

/// A booked screening of a film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showing {
    pub film: Arc<Film>,
    pub start: TimeOfDay,
    /// End of the screen's occupancy, cleaning buffer included.
    pub end: TimeOfDay,
}

impl Showing {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// `"<screen> <film> (<rating>) <start> - <end>"`.
    pub fn display_line(&self, screen_name: &str) -> String {
        format!(
            "{} {} ({}) {} - {}",
            screen_name, self.film.name, self.film.rating, self.start, self.end
        )
    }
}

/// An auditorium and the showings booked on it, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    name: String,
    capacity: u32,
    showings: Vec<Showing>,
}

impl Screen {
    pub(crate) fn new(name: String, capacity: u32) -> Self {
        Self {
            name,
            capacity,
            showings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn showings(&self) -> &[Showing] {
        &self.showings
    }

    pub(crate) fn push_showing(&mut self, showing: Showing) {
        self.showings.push(showing);
    }
}
