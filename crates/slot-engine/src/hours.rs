//! Business opening hours and the within-hours test.
//!
//! Hours come from the [`crate::source::ScheduleSource`] collaborator; the
//! static fallback here (09:00–17:00 Monday–Friday, closed weekends) is what
//! a business gets until it configures real hours.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One open interval of a business day. Intervals for a weekday never
/// overlap; an empty interval list means closed all day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl HoursInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        HoursInterval { start, end }
    }
}

/// End-of-day sentinel: an interval ending at or after 23:59 is treated as
/// extending to midnight for midnight-crossing windows.
pub(crate) fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).expect("valid constant time")
}

/// The static fallback hours: 09:00–17:00 Monday through Friday, closed on
/// weekends.
pub fn static_hours(weekday: Weekday) -> Vec<HoursInterval> {
    match weekday {
        Weekday::Sat | Weekday::Sun => Vec::new(),
        _ => vec![HoursInterval::new(
            NaiveTime::from_hms_opt(9, 0, 0).expect("valid constant time"),
            NaiveTime::from_hms_opt(17, 0, 0).expect("valid constant time"),
        )],
    }
}

/// Whether `[start, end)` falls within one of the open intervals.
///
/// A window with `end <= start` crosses midnight. Such a window is accepted
/// only when its start lies within an interval that extends to end-of-day
/// (23:59 or later); there is no cross-day continuation into the next day's
/// hours.
pub fn covers(intervals: &[HoursInterval], start: NaiveTime, end: NaiveTime) -> bool {
    intervals.iter().any(|hours| {
        if end > start {
            start >= hours.start && end <= hours.end
        } else {
            start >= hours.start && hours.end >= end_of_day()
        }
    })
}
