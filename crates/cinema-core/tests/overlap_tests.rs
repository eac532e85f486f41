//! Tests for half-open interval conflict detection.

use cinema_core::overlap::{first_conflict, overlaps, Interval};
use cinema_core::TimeOfDay;

/// Helper to build an interval from hour/minute pairs.
fn interval(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Interval {
    Interval::new(
        TimeOfDay::from_hm(start_hour, start_min).unwrap(),
        TimeOfDay::from_hm(end_hour, end_min).unwrap(),
    )
}

#[test]
fn back_to_back_after_is_not_a_conflict() {
    // Existing 12:40-15:30, candidate 15:30-18:00
    let existing = interval(12, 40, 15, 30);
    assert!(!overlaps(interval(15, 30, 18, 0), existing));
}

#[test]
fn back_to_back_before_is_not_a_conflict() {
    // Candidate ends exactly when the existing showing starts.
    let existing = interval(12, 40, 15, 30);
    assert!(!overlaps(interval(10, 0, 12, 40), existing));
}

#[test]
fn start_inside_existing_conflicts() {
    let existing = interval(12, 40, 15, 30);
    assert!(overlaps(interval(15, 0, 16, 0), existing));
}

#[test]
fn end_inside_existing_conflicts() {
    let existing = interval(12, 40, 15, 30);
    assert!(overlaps(interval(10, 0, 13, 0), existing));
}

#[test]
fn candidate_containing_existing_conflicts() {
    let existing = interval(12, 40, 15, 30);
    assert!(overlaps(interval(12, 0, 16, 0), existing));
}

#[test]
fn existing_containing_candidate_conflicts() {
    let existing = interval(12, 40, 15, 30);
    assert!(overlaps(interval(13, 0, 14, 0), existing));
}

#[test]
fn identical_intervals_conflict() {
    let existing = interval(12, 40, 15, 30);
    assert!(overlaps(existing, existing));
}

#[test]
fn shared_start_or_shared_end_conflicts() {
    let existing = interval(12, 40, 15, 30);
    assert!(overlaps(interval(12, 40, 13, 30), existing));
    assert!(overlaps(interval(14, 0, 15, 30), existing));
    assert!(overlaps(interval(12, 40, 16, 0), existing));
    assert!(overlaps(interval(12, 0, 15, 30), existing));
}

#[test]
fn disjoint_intervals_do_not_conflict() {
    let existing = interval(12, 40, 15, 30);
    assert!(!overlaps(interval(9, 0, 10, 0), existing));
    assert!(!overlaps(interval(18, 0, 20, 0), existing));
}

#[test]
fn overlap_is_symmetric() {
    let a = interval(12, 40, 15, 30);
    for b in [
        interval(15, 0, 16, 0),
        interval(10, 0, 13, 0),
        interval(13, 0, 14, 0),
        interval(15, 30, 18, 0),
        interval(9, 0, 10, 0),
    ] {
        assert_eq!(overlaps(a, b), overlaps(b, a), "asymmetric for {b}");
    }
}

#[test]
fn overlap_minutes_measures_the_shared_span() {
    let existing = interval(12, 40, 15, 30);
    assert_eq!(interval(15, 0, 16, 0).overlap_minutes(&existing), 30);
    assert_eq!(interval(13, 0, 14, 0).overlap_minutes(&existing), 60);
    assert_eq!(interval(15, 30, 18, 0).overlap_minutes(&existing), 0);
}

#[test]
fn first_conflict_reports_earliest_position() {
    let booked = vec![
        interval(9, 0, 11, 0),
        interval(12, 40, 15, 30),
        interval(15, 30, 18, 0),
    ];
    assert_eq!(first_conflict(interval(15, 0, 16, 0), booked.clone()), Some(1));
    assert_eq!(first_conflict(interval(11, 0, 12, 40), booked.clone()), None);
    assert_eq!(first_conflict(interval(10, 0, 20, 0), booked), Some(0));
}

#[test]
fn first_conflict_on_empty_screen_is_none() {
    assert_eq!(first_conflict(interval(9, 0, 10, 0), Vec::new()), None);
}

#[test]
fn conflict_outcome_does_not_depend_on_order() {
    let mut booked = vec![
        interval(9, 0, 11, 0),
        interval(12, 40, 15, 30),
        interval(18, 0, 20, 0),
    ];
    let candidate = interval(14, 0, 19, 0);
    let forward = first_conflict(candidate, booked.clone()).is_some();
    booked.reverse();
    let backward = first_conflict(candidate, booked).is_some();
    assert!(forward);
    assert_eq!(forward, backward);
}

#[test]
fn interval_display_uses_clock_format() {
    assert_eq!(interval(9, 5, 11, 35).to_string(), "9:05 - 11:35");
}
