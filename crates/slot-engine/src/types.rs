//! Domain types shared across the engine.
//!
//! Everything here is plain data: configuration read from the business
//! (availability rules, staff roster), booking records the engine only ever
//! reads, and the ephemeral values the engine produces (`Slot`,
//! `SlotDecision`). All times are business-local naive times; parsing and
//! timezone handling happen in the caller.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// What an availability rule applies to: every occurrence of a weekday, or
/// one calendar date.
///
/// Specific-date rules take total precedence: if any exist for a staff member
/// on a date, weekly rules are not consulted for that date at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleScope {
    Weekly(Weekday),
    SpecificDate(NaiveDate),
}

/// A single availability rule for one staff member.
///
/// `off_day = true` marks the staff member explicitly unavailable during
/// `[start, end)`; `off_day = false` marks them explicitly available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub staff_id: String,
    pub scope: RuleScope,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub off_day: bool,
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rescheduled,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    /// Whether a booking in this status counts toward conflict detection.
    ///
    /// Cancelled, completed and no-show bookings do not block new bookings.
    pub fn occupies_slot(&self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::Rescheduled
        )
    }
}

/// An existing booking record. The engine only reads these; creation and
/// rescheduling live in the booking workflow outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub business_id: String,
    /// Staff members assigned to this booking. May be empty.
    pub staff_ids: Vec<String>,
    pub service_id: Option<String>,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: BookingStatus,
}

impl Booking {
    pub fn start_dt(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.start)
    }

    pub fn end_dt(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.end)
    }
}

/// A staff member of a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub active: bool,
}

/// A bookable candidate slot produced by the search. Ephemeral — never
/// persisted; holding one confers no reservation (see [`crate::engine`] on
/// the caller's serialization obligation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub staff_id: String,
    pub staff_name: String,
}

/// The outcome of a timeslot availability check: a yes/no plus a
/// human-readable reason suitable for showing to the booking customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDecision {
    pub is_available: bool,
    pub reason: String,
}

impl SlotDecision {
    pub fn available() -> Self {
        SlotDecision {
            is_available: true,
            reason: "Available".to_string(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        SlotDecision {
            is_available: false,
            reason: reason.into(),
        }
    }
}
