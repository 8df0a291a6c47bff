//! Booking conflict detection.
//!
//! Half-open interval semantics throughout: a booking ending exactly when a
//! candidate starts is NOT a conflict, and neither is one starting exactly
//! when the candidate ends.

use chrono::NaiveDateTime;

use crate::types::Booking;

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`
/// overlap iff `a_start < b_end && b_start < a_end`.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Business-level conflict check: does any occupying booking overlap the
/// candidate window?
///
/// Cancelled, completed and no-show bookings never conflict. The caller is
/// expected to pass bookings already scoped to one business.
pub fn has_conflict(bookings: &[Booking], start: NaiveDateTime, end: NaiveDateTime) -> bool {
    bookings
        .iter()
        .filter(|b| b.status.occupies_slot())
        .any(|b| overlaps(b.start_dt(), b.end_dt(), start, end))
}

/// Staff-scoped conflict check against an already-materialized list of
/// occupied intervals (the slot search maintains one per staff member,
/// including slots it has claimed during the current pass).
pub fn staff_is_booked(
    occupied: &[(NaiveDateTime, NaiveDateTime)],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> bool {
    occupied
        .iter()
        .any(|&(busy_start, busy_end)| overlaps(busy_start, busy_end, start, end))
}
