//! Slot-grid generation for the availability search.
//!
//! The search walks a fixed working window (09:00–17:00) in 30-minute
//! steps. When searching today, the window start is pushed forward past the
//! current time, rounded up to the next half-hour boundary.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Grid step between candidate slot starts. Independent of the appointment
/// duration.
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

fn work_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid constant time")
}

fn work_day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("valid constant time")
}

/// Round a time up to the next half-hour boundary. `None` past 23:30,
/// where the next boundary would fall on the following day.
pub fn round_up_to_half_hour(t: NaiveTime) -> Option<NaiveTime> {
    if t.minute() < 30 {
        NaiveTime::from_hms_opt(t.hour(), 30, 0)
    } else {
        NaiveTime::from_hms_opt(t.hour() + 1, 0, 0)
    }
}

/// The working window for `date`: 09:00–17:00, with the start pushed
/// forward when `date` is today and the day is already underway. `None`
/// when nothing of the window remains.
pub fn working_window(date: NaiveDate, now: NaiveDateTime) -> Option<(NaiveTime, NaiveTime)> {
    let mut start = work_day_start();
    let end = work_day_end();

    if date == now.date() && now.time() > start {
        start = round_up_to_half_hour(now.time())?;
    }

    if start < end {
        Some((start, end))
    } else {
        None
    }
}

/// Candidate windows `[t, t + duration)` stepping through the working
/// window at the grid interval. A candidate is generated only while its end
/// stays within the window.
pub fn candidate_windows(
    date: NaiveDate,
    window: (NaiveTime, NaiveTime),
    duration_minutes: u32,
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let window_end = NaiveDateTime::new(date, window.1);
    let duration = Duration::minutes(duration_minutes as i64);
    let step = Duration::minutes(SLOT_INTERVAL_MINUTES);

    let mut candidates = Vec::new();
    let mut cursor = NaiveDateTime::new(date, window.0);
    while cursor + duration <= window_end {
        candidates.push((cursor, cursor + duration));
        cursor += step;
    }
    candidates
}
