//! The schedule store: film catalog, screens and their showings.
//!
//! [`Cinema`] is an explicit value owned by whoever serves requests. Films and
//! screens are append-only and looked up by exact name. Every mutating call either
//! succeeds completely or returns an error and leaves the store untouched.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Film, Rating, Screen, Showing, MAX_SCREEN_CAPACITY};
use crate::error::{Result, ScheduleError};
use crate::listing::Listing;
use crate::overlap::first_conflict;
use crate::showtime::showing_interval;
use crate::time::parse_time;

/// A single cinema's films, screens and bookings.
#[derive(Debug, Clone, Default)]
pub struct Cinema {
    films: Vec<Arc<Film>>,
    film_index: HashMap<String, usize>,
    screens: Vec<Screen>,
    screen_index: HashMap<String, usize>,
}

impl Cinema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a screen with no showings.
    ///
    /// # Errors
    /// [`ScheduleError::CapacityExceeded`] above [`MAX_SCREEN_CAPACITY`],
    /// [`ScheduleError::ZeroCapacity`] for an empty screen, then
    /// [`ScheduleError::DuplicateScreen`] if the name is taken.
    pub fn add_screen(&mut self, name: &str, capacity: u32) -> Result<()> {
        if capacity > MAX_SCREEN_CAPACITY {
            return Err(rejected(ScheduleError::CapacityExceeded {
                capacity,
                max: MAX_SCREEN_CAPACITY,
            }));
        }
        if capacity == 0 {
            return Err(rejected(ScheduleError::ZeroCapacity));
        }
        if self.screen_index.contains_key(name) {
            return Err(rejected(ScheduleError::DuplicateScreen(name.to_string())));
        }

        self.screen_index.insert(name.to_string(), self.screens.len());
        self.screens.push(Screen::new(name.to_string(), capacity));
        debug!(screen = name, capacity, "screen added");
        Ok(())
    }

    /// Add a film to the catalog.
    ///
    /// `duration` uses the same `H:MM` syntax and bounds as a start time.
    ///
    /// # Errors
    /// [`ScheduleError::DuplicateFilm`], [`ScheduleError::InvalidRating`] or
    /// [`ScheduleError::InvalidDuration`], checked in that order.
    pub fn add_film(&mut self, name: &str, rating: &str, duration: &str) -> Result<()> {
        if self.film_index.contains_key(name) {
            return Err(rejected(ScheduleError::DuplicateFilm(name.to_string())));
        }
        let rating: Rating = rating.parse().map_err(rejected)?;
        let duration = parse_time(duration)
            .map_err(|e| rejected(ScheduleError::InvalidDuration(e)))?;

        self.film_index.insert(name.to_string(), self.films.len());
        self.films.push(Arc::new(Film {
            name: name.to_string(),
            rating,
            duration,
        }));
        debug!(film = name, %rating, %duration, "film added");
        Ok(())
    }

    /// Book `film_name` on `screen_name` starting at `start`.
    ///
    /// The end time is the film's duration plus the cleaning buffer. The new
    /// showing is checked against every showing already on the screen.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidStartTime`], [`ScheduleError::UnknownFilm`],
    /// [`ScheduleError::EndsAfterMidnight`], [`ScheduleError::UnknownScreen`] or
    /// [`ScheduleError::TimeUnavailable`], checked in that order.
    pub fn add_showing(
        &mut self,
        film_name: &str,
        screen_name: &str,
        start: &str,
    ) -> Result<Showing> {
        let start =
            parse_time(start).map_err(|e| rejected(ScheduleError::InvalidStartTime(e)))?;
        let film = self
            .film(film_name)
            .cloned()
            .ok_or_else(|| rejected(ScheduleError::UnknownFilm(film_name.to_string())))?;
        let interval = showing_interval(start, film.duration).map_err(|e| rejected(e.into()))?;
        let screen_pos = *self
            .screen_index
            .get(screen_name)
            .ok_or_else(|| rejected(ScheduleError::UnknownScreen(screen_name.to_string())))?;
        let screen = &mut self.screens[screen_pos];

        let booked = screen.showings().iter().map(Showing::interval);
        if let Some(pos) = first_conflict(interval, booked) {
            let clash = &screen.showings()[pos];
            return Err(rejected(ScheduleError::TimeUnavailable {
                screen: screen_name.to_string(),
                film: clash.film.name.clone(),
                start: clash.start,
                end: clash.end,
            }));
        }

        let showing = Showing {
            film,
            start: interval.start,
            end: interval.end,
        };
        screen.push_showing(showing.clone());
        debug!(
            film = film_name,
            screen = screen_name,
            start = %showing.start,
            end = %showing.end,
            "showing added"
        );
        Ok(showing)
    }

    /// Every showing as a display line, grouped by film.
    ///
    /// See [`Listing`] for the ordering guarantees.
    pub fn list_showings(&self) -> Listing {
        let mut listing = Listing::new();
        for screen in &self.screens {
            for showing in screen.showings() {
                listing.push(&showing.film.name, showing.display_line(screen.name()));
            }
        }
        listing
    }

    pub fn film(&self, name: &str) -> Option<&Arc<Film>> {
        self.film_index.get(name).map(|&i| &self.films[i])
    }

    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.screen_index.get(name).map(|&i| &self.screens[i])
    }

    /// Films in the order they were added.
    pub fn films(&self) -> impl Iterator<Item = &Film> {
        self.films.iter().map(Arc::as_ref)
    }

    /// Screens in the order they were added.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }
}

fn rejected(err: ScheduleError) -> ScheduleError {
    debug!(%err, "operation rejected");
    err
}
