//! The read-only data boundary between the engine and the rest of the
//! system.
//!
//! Implementations are injected explicitly (strategy objects, never a
//! process-wide registry) and wrap whatever actually holds the data — a
//! database, a cache, or the in-memory store below. The engine never writes
//! through this trait.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};

use crate::error::Result;
use crate::hours::{self, HoursInterval};
use crate::types::{AvailabilityRule, Booking, RuleScope, StaffMember};

/// Selects which tier of availability rules to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleQuery {
    SpecificDate(NaiveDate),
    Weekly(Weekday),
}

/// Read interfaces the engine requires from its collaborators.
///
/// All methods are reads; the engine performs no writes and provides no
/// locking. A caller that creates a booking after a successful availability
/// check must serialize "check, then create" itself (for example by
/// re-validating inside the same transaction, or via a uniqueness
/// constraint on staff-plus-window) — two unserialized concurrent requests
/// can both see "available" and double-book.
pub trait ScheduleSource {
    /// Open intervals for `business_id` on `weekday`. The default is the
    /// static fallback (09:00–17:00 Monday–Friday); real implementations
    /// override this with configured hours.
    fn business_hours(&self, business_id: &str, weekday: Weekday) -> Result<Vec<HoursInterval>> {
        let _ = business_id;
        Ok(hours::static_hours(weekday))
    }

    /// Active staff for the business, in a stable order. When
    /// `staff_filter` is set, at most that one staff member is returned.
    fn active_staff(
        &self,
        business_id: &str,
        staff_filter: Option<&str>,
    ) -> Result<Vec<StaffMember>>;

    /// Availability rules for one staff member, one tier at a time.
    fn availability_rules(
        &self,
        staff_id: &str,
        query: RuleQuery,
    ) -> Result<Vec<AvailabilityRule>>;

    /// Bookings on `date` whose status occupies a slot, ordered by start
    /// time, with their staff assignments.
    fn occupying_bookings(&self, business_id: &str, date: NaiveDate) -> Result<Vec<Booking>>;
}

/// A `Vec`-backed [`ScheduleSource`] for tests and for callers that already
/// hold the schedule data in memory.
///
/// Hours behave like the real provider: a business with no configured hours
/// at all gets the static fallback; once any hours are configured, weekdays
/// without an entry are closed.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchedule {
    staff: Vec<StaffMember>,
    rules: Vec<AvailabilityRule>,
    bookings: Vec<Booking>,
    hours: HashMap<(String, Weekday), Vec<HoursInterval>>,
}

impl InMemorySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_staff(&mut self, staff: StaffMember) {
        self.staff.push(staff);
    }

    pub fn add_rule(&mut self, rule: AvailabilityRule) {
        self.rules.push(rule);
    }

    pub fn add_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    pub fn set_hours(&mut self, business_id: &str, weekday: Weekday, intervals: Vec<HoursInterval>) {
        self.hours
            .insert((business_id.to_string(), weekday), intervals);
    }
}

impl ScheduleSource for InMemorySchedule {
    fn business_hours(&self, business_id: &str, weekday: Weekday) -> Result<Vec<HoursInterval>> {
        if let Some(intervals) = self.hours.get(&(business_id.to_string(), weekday)) {
            return Ok(intervals.clone());
        }
        let configured = self.hours.keys().any(|(b, _)| b == business_id);
        if configured {
            Ok(Vec::new())
        } else {
            Ok(hours::static_hours(weekday))
        }
    }

    fn active_staff(
        &self,
        business_id: &str,
        staff_filter: Option<&str>,
    ) -> Result<Vec<StaffMember>> {
        Ok(self
            .staff
            .iter()
            .filter(|s| s.business_id == business_id && s.active)
            .filter(|s| staff_filter.is_none_or(|id| s.id == id))
            .cloned()
            .collect())
    }

    fn availability_rules(
        &self,
        staff_id: &str,
        query: RuleQuery,
    ) -> Result<Vec<AvailabilityRule>> {
        let scope = match query {
            RuleQuery::SpecificDate(date) => RuleScope::SpecificDate(date),
            RuleQuery::Weekly(weekday) => RuleScope::Weekly(weekday),
        };
        Ok(self
            .rules
            .iter()
            .filter(|r| r.staff_id == staff_id && r.scope == scope)
            .cloned()
            .collect())
    }

    fn occupying_bookings(&self, business_id: &str, date: NaiveDate) -> Result<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| {
                b.business_id == business_id && b.date == date && b.status.occupies_slot()
            })
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start);
        Ok(bookings)
    }
}
