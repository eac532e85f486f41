//! Detect overlapping showings on a single screen.
//!
//! Intervals are half-open `[start, end)`. Back-to-back showings, where one ends
//! exactly when the next starts, are NOT conflicts.

use std::fmt;

use crate::time::TimeOfDay;

/// The half-open span of a day a showing occupies a screen, cleaning included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end
            .minutes_since_midnight()
            .saturating_sub(self.start.minutes_since_midnight())
    }

    /// Minutes shared by both intervals; zero when they do not overlap.
    pub fn overlap_minutes(&self, other: &Interval) -> u32 {
        let start = self.start.max(other.start).minutes_since_midnight();
        let end = self.end.min(other.end).minutes_since_midnight();
        end.saturating_sub(start)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Whether `candidate` conflicts with an `existing` booking.
///
/// With existing `[s1, e1)` and candidate `[s2, e2)` this rejects a candidate
/// that starts strictly inside the existing interval, ends strictly inside it,
/// contains it, or is contained by it (identical intervals included). All of
/// those reduce to `s2 < e1 && s1 < e2`, which leaves `s2 == e1` and `e2 == s1`
/// admissible.
pub fn overlaps(candidate: Interval, existing: Interval) -> bool {
    candidate.start < existing.end && existing.start < candidate.end
}

/// Position of the first `existing` interval that conflicts with `candidate`.
///
/// Whether a conflict exists does not depend on the order of `existing`; only
/// which conflict is reported does.
pub fn first_conflict<I>(candidate: Interval, existing: I) -> Option<usize>
where
    I: IntoIterator<Item = Interval>,
{
    existing
        .into_iter()
        .position(|booked| overlaps(candidate, booked))
}
