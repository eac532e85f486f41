//! End-time computation for a showing.
//!
//! A screen is occupied for the film's running time plus a fixed cleaning buffer.
//! Everything is integer arithmetic on hours and minutes; a showing may not run
//! past midnight.

use crate::error::EndsAfterMidnight;
use crate::overlap::Interval;
use crate::time::{HoursMinutes, TimeOfDay};

/// Minutes reserved after every showing to clean the screen.
pub const CLEANING_BUFFER_MINUTES: u32 = 20;

/// Compute the end of a showing, cleaning buffer included.
///
/// Minutes are carried into hours so the returned end minutes are always in
/// `[0, 60)`. The end hour is `start_hours + duration_hours + carry`.
///
/// # Errors
/// Returns [`EndsAfterMidnight`] if the end hour is 24 or later.
pub fn compute_end(
    start_hours: u32,
    start_minutes: u32,
    duration_hours: u32,
    duration_minutes: u32,
) -> Result<(u32, u32), EndsAfterMidnight> {
    let minutes = start_minutes + duration_minutes + CLEANING_BUFFER_MINUTES;
    let end_hours = start_hours + duration_hours + minutes / 60;
    let end_minutes = minutes % 60;

    if end_hours >= 24 {
        return Err(EndsAfterMidnight {
            end_hours,
            end_minutes,
        });
    }

    Ok((end_hours, end_minutes))
}

/// The interval a showing occupies when started at `start` with a film of length `duration`.
///
/// # Errors
/// Returns [`EndsAfterMidnight`] under the same conditions as [`compute_end`].
pub fn showing_interval(
    start: HoursMinutes,
    duration: HoursMinutes,
) -> Result<Interval, EndsAfterMidnight> {
    let (end_hours, end_minutes) =
        compute_end(start.hours, start.minutes, duration.hours, duration.minutes)?;

    // compute_end keeps the end below 24:00, and the start is strictly before the end.
    let past_midnight = EndsAfterMidnight {
        end_hours,
        end_minutes,
    };
    let start = TimeOfDay::from_minutes(start.total_minutes()).ok_or(past_midnight)?;
    let end = TimeOfDay::from_hm(end_hours, end_minutes).ok_or(past_midnight)?;

    Ok(Interval::new(start, end))
}
