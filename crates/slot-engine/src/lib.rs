//! # slot-engine
//!
//! Appointment availability resolution for service-business scheduling:
//! given a staff roster, per-staff availability rules (weekly recurring
//! plus date-specific overrides) and existing bookings, decide whether a
//! requested time slot can be fulfilled, and when it cannot, enumerate
//! alternative slots on the same day or the two following days.
//!
//! The crate is a pure library surface over an injected read-only
//! [`source::ScheduleSource`]; it performs no writes, no I/O and no locking
//! (see [`engine`] for the caller's check-then-create obligation).
//!
//! ## Modules
//!
//! - [`engine`] — timeslot validation, slot search, alternate-day fallback
//! - [`rules`] — staff availability rule resolution (two-tier override model)
//! - [`conflict`] — half-open interval conflict detection against bookings
//! - [`hours`] — business opening hours and the within-hours test
//! - [`search`] — slot-grid generation for the availability search
//! - [`source`] — the read-only collaborator boundary + in-memory impl
//! - [`types`] — domain types
//! - [`error`] — error types

pub mod conflict;
pub mod engine;
pub mod error;
pub mod hours;
pub mod rules;
pub mod search;
pub mod source;
pub mod types;

pub use engine::Engine;
pub use error::EngineError;
pub use hours::HoursInterval;
pub use rules::DefaultPolicy;
pub use source::{InMemorySchedule, RuleQuery, ScheduleSource};
pub use types::{
    AvailabilityRule, Booking, BookingStatus, RuleScope, Slot, SlotDecision, StaffMember,
};
