//! Tests for staff availability rule resolution.

use chrono::{NaiveDate, NaiveTime, Weekday};
use slot_engine::rules::{resolve, DefaultPolicy};
use slot_engine::types::{AvailabilityRule, RuleScope};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn weekly(weekday: Weekday, start: NaiveTime, end: NaiveTime, off_day: bool) -> AvailabilityRule {
    AvailabilityRule {
        staff_id: "staff-a".to_string(),
        scope: RuleScope::Weekly(weekday),
        start,
        end,
        off_day,
    }
}

fn on_date(date: NaiveDate, start: NaiveTime, end: NaiveTime, off_day: bool) -> AvailabilityRule {
    AvailabilityRule {
        staff_id: "staff-a".to_string(),
        scope: RuleScope::SpecificDate(date),
        start,
        end,
        off_day,
    }
}

/// 2025-06-09 is a Monday.
fn monday() -> NaiveDate {
    d(2025, 6, 9)
}

// ── Weekly rules ────────────────────────────────────────────────────────────

#[test]
fn weekly_available_rule_grants_contained_window() {
    let rules = vec![weekly(Weekday::Mon, t(9, 0), t(17, 0), false)];

    assert!(resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn weekly_rule_present_but_window_outside_denies() {
    let rules = vec![weekly(Weekday::Mon, t(9, 0), t(12, 0), false)];

    // Window extends past the available period — not fully contained.
    assert!(!resolve(
        &rules,
        monday(),
        t(11, 30),
        t(12, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn weekly_off_day_overlapping_window_denies() {
    let rules = vec![
        weekly(Weekday::Mon, t(9, 0), t(17, 0), false),
        weekly(Weekday::Mon, t(12, 0), t(13, 0), true),
    ];

    assert!(!resolve(
        &rules,
        monday(),
        t(12, 30),
        t(13, 30),
        DefaultPolicy::StrictUnavailable
    ));
    // Outside the off window the available rule still grants.
    assert!(resolve(
        &rules,
        monday(),
        t(14, 0),
        t(15, 0),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn off_day_adjacency_is_half_open() {
    let rules = vec![
        weekly(Weekday::Mon, t(9, 0), t(17, 0), false),
        weekly(Weekday::Mon, t(9, 0), t(10, 0), true),
    ];

    // Window starting exactly when the off period ends does not overlap it.
    assert!(resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn weekly_rules_for_other_weekdays_are_ignored() {
    let rules = vec![weekly(Weekday::Tue, t(9, 0), t(17, 0), false)];

    // No rules apply to Monday at all — policy decides.
    assert!(!resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
    assert!(resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::PermissiveAvailable
    ));
}

// ── Specific-date precedence ────────────────────────────────────────────────

#[test]
fn specific_date_off_day_overrides_weekly_available() {
    let rules = vec![
        weekly(Weekday::Mon, t(9, 0), t(17, 0), false),
        on_date(monday(), t(9, 0), t(17, 0), true),
    ];

    assert!(!resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn specific_date_rules_shadow_weekly_entirely() {
    // Weekly would grant 10:00-10:30, but a specific-date rule exists for
    // the date covering only the afternoon — weekly must not be consulted.
    let rules = vec![
        weekly(Weekday::Mon, t(9, 0), t(17, 0), false),
        on_date(monday(), t(13, 0), t(17, 0), false),
    ];

    assert!(!resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
    assert!(resolve(
        &rules,
        monday(),
        t(13, 0),
        t(13, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn specific_date_rule_for_other_date_is_ignored() {
    let rules = vec![
        weekly(Weekday::Mon, t(9, 0), t(17, 0), false),
        on_date(d(2025, 6, 16), t(9, 0), t(17, 0), true),
    ];

    // The off-day applies to the following Monday, not this one.
    assert!(resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn specific_off_day_morning_denies_afternoon_too_when_nothing_grants_it() {
    // 2025-06-10: off 09:00-12:00, no other rules. The morning is denied by
    // the off rule; the afternoon is denied because specific-date rules
    // exist but none grants it.
    let date = d(2025, 6, 10);
    let rules = vec![on_date(date, t(9, 0), t(12, 0), true)];

    assert!(!resolve(
        &rules,
        date,
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
    assert!(!resolve(
        &rules,
        date,
        t(13, 0),
        t(13, 30),
        DefaultPolicy::StrictUnavailable
    ));
}

// ── Default policy ──────────────────────────────────────────────────────────

#[test]
fn no_rules_at_all_follows_policy() {
    let rules: Vec<AvailabilityRule> = Vec::new();

    assert!(!resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::StrictUnavailable
    ));
    assert!(resolve(
        &rules,
        monday(),
        t(10, 0),
        t(10, 30),
        DefaultPolicy::PermissiveAvailable
    ));
}

// ── Midnight-crossing windows ───────────────────────────────────────────────

#[test]
fn midnight_crossing_window_granted_when_rule_extends_to_end_of_day() {
    let rules = vec![weekly(Weekday::Mon, t(18, 0), t(23, 59), false)];

    // 22:00 → 02:00 next day: granted because the rule reaches 23:59.
    assert!(resolve(
        &rules,
        monday(),
        t(22, 0),
        t(2, 0),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn midnight_crossing_window_denied_when_rule_stops_early() {
    let rules = vec![weekly(Weekday::Mon, t(18, 0), t(23, 0), false)];

    assert!(!resolve(
        &rules,
        monday(),
        t(22, 0),
        t(2, 0),
        DefaultPolicy::StrictUnavailable
    ));
}

#[test]
fn midnight_crossing_window_denied_when_start_precedes_rule() {
    let rules = vec![weekly(Weekday::Mon, t(18, 0), t(23, 59), false)];

    assert!(!resolve(
        &rules,
        monday(),
        t(17, 0),
        t(2, 0),
        DefaultPolicy::StrictUnavailable
    ));
}
