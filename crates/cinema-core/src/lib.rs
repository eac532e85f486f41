//! # cinema-core
//!
//! Showtime scheduling for a single cinema.
//!
//! Films are booked onto screens at `H:MM` start times. Each booking occupies the
//! screen for the film's running time plus a 20-minute cleaning buffer, must finish
//! before midnight, and may not overlap another booking on the same screen.
//! Back-to-back bookings are allowed.
//!
//! ## Quick start
//!
//! ```rust
//! use cinema_core::{Cinema, ScheduleError};
//!
//! let mut cinema = Cinema::new();
//! cinema.add_screen("Screen #1", 50).unwrap();
//! cinema.add_film("Dune", "12", "2:30").unwrap();
//!
//! let showing = cinema.add_showing("Dune", "Screen #1", "12:40").unwrap();
//! assert_eq!(showing.end.to_string(), "15:30");
//!
//! let again = cinema.add_showing("Dune", "Screen #1", "12:40");
//! assert!(matches!(again, Err(ScheduleError::TimeUnavailable { .. })));
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `H:MM` parsing and minutes-since-midnight values
//! - [`showtime`] — end-time computation with the cleaning buffer
//! - [`overlap`] — half-open interval conflict detection
//! - [`catalog`] — films, ratings, screens and showings
//! - [`store`] — the [`Cinema`] schedule store
//! - [`listing`] — showings grouped by film
//! - [`shared`] — a lock-guarded store for multi-threaded callers
//! - [`error`] — Error types

pub mod catalog;
pub mod error;
pub mod listing;
pub mod overlap;
pub mod shared;
pub mod showtime;
pub mod store;
pub mod time;

pub use catalog::{Film, Rating, Screen, Showing, MAX_SCREEN_CAPACITY};
pub use error::{EndsAfterMidnight, ScheduleError, TimeError};
pub use listing::Listing;
pub use overlap::{first_conflict, overlaps, Interval};
pub use shared::SharedCinema;
pub use showtime::{compute_end, showing_interval, CLEANING_BUFFER_MINUTES};
pub use store::Cinema;
pub use time::{parse_time, HoursMinutes, TimeOfDay, MINUTES_PER_DAY};
