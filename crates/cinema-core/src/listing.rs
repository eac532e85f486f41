//! The "what's on" report: every showing, grouped by film.
//!
//! Groups appear in the order their film is first encountered while walking
//! screens in creation order and each screen's showings in booking order. Lines
//! within a group keep that same order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Display lines keyed by film name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    groups: Vec<(String, Vec<String>)>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` to the group for `film`, opening the group if needed.
    pub fn push(&mut self, film: &str, line: String) {
        match self.groups.iter_mut().find(|(name, _)| name == film) {
            Some((_, lines)) => lines.push(line),
            None => self.groups.push((film.to_string(), vec![line])),
        }
    }

    /// Lines for one film, or `None` if it has no showings.
    pub fn get(&self, film: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(name, _)| name == film)
            .map(|(_, lines)| lines.as_slice())
    }

    pub fn films(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Number of films with at least one showing.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Serialises as a map from film name to lines, keeping group order.
impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (film, lines) in &self.groups {
            map.serialize_entry(film, lines)?;
        }
        map.end()
    }
}
