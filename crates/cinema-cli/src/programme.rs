//! A programme: the screens, films and showings to load into a cinema, read as JSON.
//!
//! ```json
//! {
//!   "screens":  [{ "name": "Screen #1", "capacity": 50 }],
//!   "films":    [{ "name": "Dune", "rating": "12", "duration": "2:30" }],
//!   "showings": [{ "film": "Dune", "screen": "Screen #1", "start": "12:40" }]
//! }
//! ```
//!
//! Ratings, durations and start times stay as raw strings; the store validates them.

use cinema_core::{Cinema, ScheduleError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Programme {
    #[serde(default)]
    pub screens: Vec<ScreenEntry>,
    #[serde(default)]
    pub films: Vec<FilmEntry>,
    #[serde(default)]
    pub showings: Vec<ShowingEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenEntry {
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilmEntry {
    pub name: String,
    pub rating: String,
    pub duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowingEntry {
    pub film: String,
    pub screen: String,
    pub start: String,
}

/// The result of applying one programme entry.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn from_result(operation: String, result: Result<Option<String>, ScheduleError>) -> Self {
        match result {
            Ok(booked) => Self {
                operation,
                booked,
                error: None,
            },
            Err(err) => Self {
                operation,
                booked: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl Programme {
    /// Screens, then films, then showings. A rejected entry is recorded and the
    /// rest of the programme still runs.
    pub fn apply(&self, cinema: &mut Cinema) -> Vec<Outcome> {
        let mut outcomes = Vec::new();

        for screen in &self.screens {
            outcomes.push(Outcome::from_result(
                format!("add screen {:?} capacity {}", screen.name, screen.capacity),
                cinema.add_screen(&screen.name, screen.capacity).map(|()| None),
            ));
        }
        for film in &self.films {
            outcomes.push(Outcome::from_result(
                format!(
                    "add film {:?} rated {} running {}",
                    film.name, film.rating, film.duration
                ),
                cinema
                    .add_film(&film.name, &film.rating, &film.duration)
                    .map(|()| None),
            ));
        }
        for showing in &self.showings {
            outcomes.push(Outcome::from_result(
                format!(
                    "add showing {:?} on {:?} at {}",
                    showing.film, showing.screen, showing.start
                ),
                cinema
                    .add_showing(&showing.film, &showing.screen, &showing.start)
                    .map(|booked| Some(booked.interval().to_string())),
            ));
        }

        outcomes
    }

    /// Two screens, two films, and three attempts to book Dune on Screen #1, the
    /// last of which runs past midnight.
    pub fn demo() -> Self {
        let screen = |name: &str, capacity| ScreenEntry {
            name: name.to_string(),
            capacity,
        };
        let film = |name: &str, rating: &str, duration: &str| FilmEntry {
            name: name.to_string(),
            rating: rating.to_string(),
            duration: duration.to_string(),
        };
        let showing = |start: &str| ShowingEntry {
            film: "Dune".to_string(),
            screen: "Screen #1".to_string(),
            start: start.to_string(),
        };

        Self {
            screens: vec![screen("Screen #1", 50), screen("Screen #2", 100)],
            films: vec![
                film("Dune", "12", "2:30"),
                film("The Alpinist", "15", "1:15"),
            ],
            showings: vec![showing("12:40"), showing("19:40"), showing("23:40")],
        }
    }
}
