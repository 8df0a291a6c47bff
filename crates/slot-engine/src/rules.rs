//! Staff availability rule resolution.
//!
//! Two-tier override model: specific-date rules totally shadow weekly
//! recurring rules. Within a tier, off-day rules are exclusionary and win
//! over available rules; an available rule must fully contain the window to
//! grant it; a tier that exists but grants nothing denies the window.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::hours::end_of_day;
use crate::types::{AvailabilityRule, RuleScope};

/// What "no rules at all for the day" means.
///
/// Both behaviors exist in production call sites and are deliberately kept
/// as separate named policies rather than unified: slot search and
/// booking-time validation treat unconfigured staff as not bookable, while
/// the legacy general validity check treats them as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DefaultPolicy {
    /// No rules for the day means unavailable.
    #[default]
    StrictUnavailable,
    /// No rules for the day means available.
    PermissiveAvailable,
}

/// Resolve whether the window `[start, end)` on `date` is granted by the
/// given rule set.
///
/// Rules whose scope matches neither `date` nor `date.weekday()` are
/// ignored. If any specific-date rule exists for `date`, only those are
/// consulted; otherwise weekly rules for the weekday; otherwise the policy
/// default.
pub fn resolve(
    rules: &[AvailabilityRule],
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    policy: DefaultPolicy,
) -> bool {
    let specific: Vec<&AvailabilityRule> = rules
        .iter()
        .filter(|r| r.scope == RuleScope::SpecificDate(date))
        .collect();

    if !specific.is_empty() {
        return tier_grants(&specific, start, end);
    }

    let weekly: Vec<&AvailabilityRule> = rules
        .iter()
        .filter(|r| r.scope == RuleScope::Weekly(date.weekday()))
        .collect();

    if !weekly.is_empty() {
        return tier_grants(&weekly, start, end);
    }

    policy == DefaultPolicy::PermissiveAvailable
}

/// Apply one tier of rules to the window. Off-day rules are exclusionary
/// and checked first: any overlap denies regardless of available rules in
/// the same tier. Then any available rule fully containing the window
/// grants it. A tier that grants nothing denies.
fn tier_grants(tier: &[&AvailabilityRule], start: NaiveTime, end: NaiveTime) -> bool {
    if tier
        .iter()
        .filter(|r| r.off_day)
        .any(|r| start < r.end && end > r.start)
    {
        return false;
    }
    tier.iter()
        .filter(|r| !r.off_day)
        .any(|r| contains_window(r, start, end))
}

/// Whether an available rule fully contains `[start, end)`.
///
/// A window with `end < start` crosses midnight; it is contained only when
/// the rule starts at or before the window and extends to end-of-day. There
/// is no continuation into the next day's rules.
fn contains_window(rule: &AvailabilityRule, start: NaiveTime, end: NaiveTime) -> bool {
    if end < start {
        start >= rule.start && rule.end >= end_of_day()
    } else {
        start >= rule.start && end <= rule.end
    }
}
