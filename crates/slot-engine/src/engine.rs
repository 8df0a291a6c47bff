//! The engine facade: timeslot validation, slot search, and the
//! alternate-day fallback, composed over a [`ScheduleSource`].
//!
//! The engine is read-only and provides no locking. A successful
//! [`Engine::check_availability`] is a point-in-time observation, not a
//! reservation: the booking workflow must serialize "check, then create"
//! itself (re-validate inside the creating transaction, or enforce a
//! uniqueness constraint on staff-plus-window). Two concurrent unserialized
//! requests can both observe "available" and create overlapping bookings.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::conflict;
use crate::error::Result;
use crate::hours;
use crate::rules::{self, DefaultPolicy};
use crate::search;
use crate::source::{RuleQuery, ScheduleSource};
use crate::types::{Slot, SlotDecision};

/// Availability engine over an injected schedule source.
pub struct Engine<S: ScheduleSource> {
    source: S,
}

impl<S: ScheduleSource> Engine<S> {
    pub fn new(source: S) -> Self {
        Engine { source }
    }

    /// Whether one staff member is available for `[start, end)` on `date`.
    ///
    /// Specific-date rules shadow weekly rules entirely; see
    /// [`crate::rules::resolve`]. `policy` decides the outcome when the
    /// staff member has no rules for the day at all.
    ///
    /// A rule-lookup fault resolves to available (fail-open): a partial
    /// data problem must not spuriously block bookings. This is the
    /// opposite of the fail-closed stance in [`Self::check_availability`];
    /// both are deliberate.
    pub fn is_staff_available(
        &self,
        staff_id: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        policy: DefaultPolicy,
    ) -> bool {
        let mut day_rules = match self
            .source
            .availability_rules(staff_id, RuleQuery::SpecificDate(date))
        {
            Ok(rules) => rules,
            Err(_) => return true,
        };

        if day_rules.is_empty() {
            day_rules = match self
                .source
                .availability_rules(staff_id, RuleQuery::Weekly(date.weekday()))
            {
                Ok(rules) => rules,
                Err(_) => return true,
            };
        }

        rules::resolve(&day_rules, date, start, end, policy)
    }

    /// Can `business_id` take a booking starting at `start` for
    /// `duration_minutes`?
    ///
    /// Checks run in order and short-circuit: business hours, booking
    /// conflicts, then at-least-one-available-staff. `policy` is forwarded
    /// to the per-staff resolution; booking-time call sites use
    /// [`DefaultPolicy::StrictUnavailable`].
    ///
    /// This operation always returns a decision. Collaborator faults are
    /// converted into an unavailable decision with a generic reason rather
    /// than surfaced as errors, so the booking flow degrades to "try
    /// another time" instead of crashing.
    pub fn check_availability(
        &self,
        business_id: &str,
        start: NaiveDateTime,
        duration_minutes: u32,
        policy: DefaultPolicy,
    ) -> SlotDecision {
        let end = start + Duration::minutes(duration_minutes as i64);

        let open = match self
            .source
            .business_hours(business_id, start.date().weekday())
        {
            Ok(open) => open,
            Err(e) => {
                return SlotDecision::unavailable(format!("Error checking availability: {e}"))
            }
        };
        if open.is_empty() {
            return SlotDecision::unavailable("Business is closed on this day");
        }
        if !hours::covers(&open, start.time(), end.time()) {
            return SlotDecision::unavailable("Time is outside business hours");
        }

        let bookings = match self.source.occupying_bookings(business_id, start.date()) {
            Ok(bookings) => bookings,
            Err(_) => return SlotDecision::unavailable("Unable to check booking conflicts"),
        };
        if conflict::has_conflict(&bookings, start, end) {
            return SlotDecision::unavailable("Time slot conflicts with existing bookings");
        }

        let staff = match self.source.active_staff(business_id, None) {
            Ok(staff) => staff,
            Err(_) => return SlotDecision::unavailable("Unable to check staff availability"),
        };
        if staff.is_empty() {
            return SlotDecision::unavailable("No staff members found for this business");
        }

        let anyone_free = staff
            .iter()
            .any(|s| self.is_staff_available(&s.id, start.date(), start.time(), end.time(), policy));
        if !anyone_free {
            return SlotDecision::unavailable("No staff available at this time");
        }

        SlotDecision::available()
    }

    /// Open slots on `date`, chronological, at most `max_slots`.
    ///
    /// Walks the working window in 30-minute steps. Each candidate window
    /// is claimed by the first staff member (in roster order) who has no
    /// overlapping booking and passes rule resolution under
    /// [`DefaultPolicy::StrictUnavailable`]. A claim also occupies that
    /// staff member's calendar for the rest of the pass, so one person is
    /// never offered twice for overlapping windows. At most one slot is
    /// emitted per distinct `(start, end)` pair.
    ///
    /// `now` shifts the window start when `date` is today. Source faults on
    /// the staff and booking loads propagate; a slot-listing failure is
    /// safe to surface, unlike a booking-time check.
    pub fn find_available_slots(
        &self,
        business_id: &str,
        date: NaiveDate,
        duration_minutes: u32,
        staff_filter: Option<&str>,
        max_slots: usize,
        now: NaiveDateTime,
    ) -> Result<Vec<Slot>> {
        let staff = self.source.active_staff(business_id, staff_filter)?;
        if staff.is_empty() {
            return Ok(Vec::new());
        }

        let bookings = self.source.occupying_bookings(business_id, date)?;
        let mut occupied: HashMap<&str, Vec<(NaiveDateTime, NaiveDateTime)>> =
            staff.iter().map(|s| (s.id.as_str(), Vec::new())).collect();
        for booking in &bookings {
            for staff_id in &booking.staff_ids {
                if let Some(intervals) = occupied.get_mut(staff_id.as_str()) {
                    intervals.push((booking.start_dt(), booking.end_dt()));
                }
            }
        }

        let Some(window) = search::working_window(date, now) else {
            return Ok(Vec::new());
        };

        let mut slots: Vec<Slot> = Vec::new();
        let mut emitted: HashSet<(NaiveTime, NaiveTime)> = HashSet::new();

        for (slot_start, slot_end) in search::candidate_windows(date, window, duration_minutes) {
            if slots.len() >= max_slots {
                break;
            }
            let key = (slot_start.time(), slot_end.time());
            if emitted.contains(&key) {
                continue;
            }

            for member in &staff {
                let busy = occupied
                    .get(member.id.as_str())
                    .map(|intervals| intervals.as_slice())
                    .unwrap_or(&[]);
                if conflict::staff_is_booked(busy, slot_start, slot_end) {
                    continue;
                }
                if !self.is_staff_available(
                    &member.id,
                    date,
                    key.0,
                    key.1,
                    DefaultPolicy::StrictUnavailable,
                ) {
                    continue;
                }

                slots.push(Slot {
                    date,
                    start: key.0,
                    end: key.1,
                    staff_id: member.id.clone(),
                    staff_name: member.name.clone(),
                });
                emitted.insert(key);
                if let Some(intervals) = occupied.get_mut(member.id.as_str()) {
                    intervals.push((slot_start, slot_end));
                }
                break;
            }
        }

        Ok(slots)
    }

    /// Widening fallback when a requested day comes up short: search `date`,
    /// then `date + 1`, then `date + 2`, each day asking only for the
    /// remaining shortfall, concatenated in day order. Never looks further
    /// than two days ahead.
    pub fn alternate_slots(
        &self,
        business_id: &str,
        date: NaiveDate,
        duration_minutes: u32,
        staff_filter: Option<&str>,
        target_count: usize,
        now: NaiveDateTime,
    ) -> Result<Vec<Slot>> {
        let mut slots: Vec<Slot> = Vec::new();

        for offset in 0..3 {
            if slots.len() >= target_count {
                break;
            }
            let day = date + Duration::days(offset);
            let mut day_slots = self.find_available_slots(
                business_id,
                day,
                duration_minutes,
                staff_filter,
                target_count - slots.len(),
                now,
            )?;
            slots.append(&mut day_slots);
        }

        Ok(slots)
    }
}
