//! A [`Cinema`] that can be handed to several threads.
//!
//! Every mutating call holds the write lock across the whole check-then-append, so
//! two bookings racing for the same slot cannot both pass the overlap check. Reads
//! share the lock with each other but never observe a half-applied write.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Showing;
use crate::error::Result;
use crate::listing::Listing;
use crate::store::Cinema;

/// Cheaply cloneable handle to one cinema's schedule.
#[derive(Debug, Clone, Default)]
pub struct SharedCinema {
    inner: Arc<RwLock<Cinema>>,
}

impl SharedCinema {
    pub fn new(cinema: Cinema) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cinema)),
        }
    }

    pub fn add_screen(&self, name: &str, capacity: u32) -> Result<()> {
        self.write().add_screen(name, capacity)
    }

    pub fn add_film(&self, name: &str, rating: &str, duration: &str) -> Result<()> {
        self.write().add_film(name, rating, duration)
    }

    pub fn add_showing(
        &self,
        film_name: &str,
        screen_name: &str,
        start: &str,
    ) -> Result<Showing> {
        self.write().add_showing(film_name, screen_name, start)
    }

    pub fn list_showings(&self) -> Listing {
        self.read().list_showings()
    }

    /// Run `f` against a consistent view of the store.
    pub fn with_cinema<R>(&self, f: impl FnOnce(&Cinema) -> R) -> R {
        f(&self.read())
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Cinema {
        self.read().clone()
    }

    // Store methods validate before they mutate, so a panic under the lock cannot
    // leave a partial write behind and a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Cinema> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cinema> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Cinema> for SharedCinema {
    fn from(cinema: Cinema) -> Self {
        Self::new(cinema)
    }
}
