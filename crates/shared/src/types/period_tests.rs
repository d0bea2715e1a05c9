use rstest::rstest;

use crate::types::period::{FiscalWindow, Month, PeriodBound, PeriodParseError};

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

fn bound(s: &str) -> PeriodBound {
    s.parse().unwrap()
}

#[rstest]
#[case("2025-01", 2025, 1)]
#[case("2025-12", 2025, 12)]
#[case("0999-06", 999, 6)]
fn test_month_parse(#[case] input: &str, #[case] year: u16, #[case] m: u8) {
    let parsed = month(input);
    assert_eq!(parsed.year(), year);
    assert_eq!(parsed.month(), m);
    assert_eq!(parsed.to_string(), input);
}

#[rstest]
#[case("2025")]
#[case("2025-13")]
#[case("2025-00")]
#[case("25-01")]
#[case("2025/01")]
#[case("")]
fn test_month_parse_rejects(#[case] input: &str) {
    assert!(input.parse::<Month>().is_err());
}

#[test]
fn test_month_out_of_range() {
    assert_eq!(Month::new(2025, 13), Err(PeriodParseError::MonthOutOfRange(13)));
}

#[test]
fn test_month_ordering_matches_string_ordering() {
    let months = ["2024-12", "2025-01", "2025-02", "2025-11"];
    for pair in months.windows(2) {
        assert!(month(pair[0]) < month(pair[1]));
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_month_next_rolls_over_year() {
    assert_eq!(month("2025-12").next(), month("2026-01"));
    assert_eq!(month("2025-03").next(), month("2025-04"));
}

#[test]
fn test_month_range_inclusive() {
    let collected: Vec<String> = month("2025-11")
        .through(month("2026-02"))
        .map(|m| m.to_string())
        .collect();
    assert_eq!(collected, vec!["2025-11", "2025-12", "2026-01", "2026-02"]);
}

#[test]
fn test_month_range_empty_when_reversed() {
    assert_eq!(month("2025-02").through(month("2025-01")).count(), 0);
}

#[test]
fn test_month_range_single() {
    let collected: Vec<Month> = month("2025-06").through(month("2025-06")).collect();
    assert_eq!(collected, vec![month("2025-06")]);
}

#[rstest]
#[case("2024", None)]
#[case("2024-06", Some(6))]
fn test_bound_parse(#[case] input: &str, #[case] m: Option<u8>) {
    let parsed = bound(input);
    assert_eq!(parsed.month(), m);
    assert_eq!(parsed.to_string(), input);
}

#[rstest]
#[case("24")]
#[case("2024-")]
#[case("2024-1")]
#[case("abcd")]
fn test_bound_parse_rejects(#[case] input: &str) {
    assert!(input.parse::<PeriodBound>().is_err());
}

/// A year-only bound must sort exactly like its string form: before
/// every month of its own year, after every month of the prior year.
#[test]
fn test_year_bound_lexicographic_position() {
    let b = bound("2024");
    assert!(b.at_or_before(month("2024-01")));
    assert!(b.at_or_before(month("2024-12")));
    assert!(!b.at_or_after(month("2024-01")));
    assert!(b.at_or_after(month("2023-12")));
}

#[test]
fn test_month_bound_inclusive_comparisons() {
    let b = bound("2024-06");
    assert!(b.at_or_before(month("2024-06")));
    assert!(b.at_or_after(month("2024-06")));
    assert!(!b.at_or_before(month("2024-05")));
    assert!(!b.at_or_after(month("2024-07")));
}

#[test]
fn test_bound_ordering() {
    assert!(bound("2024") < bound("2024-01"));
    assert!(bound("2024-12") < bound("2025"));
    assert_eq!(bound("2024-06"), PeriodBound::from(month("2024-06")));
}

#[test]
fn test_last_covered_month() {
    assert_eq!(bound("2024-06").last_covered_month(), month("2024-06"));
    // Year-only end bound covers nothing in its own year.
    assert_eq!(bound("2026").last_covered_month(), month("2025-12"));
}

#[test]
fn test_fiscal_window_contains() {
    let window = FiscalWindow { start: bound("2025-01"), end: bound("2025-12") };
    assert!(window.contains(month("2025-01")));
    assert!(window.contains(month("2025-12")));
    assert!(!window.contains(month("2024-12")));
    assert!(!window.contains(month("2026-01")));
}

#[test]
fn test_fiscal_window_year_only_bounds() {
    // "2025".."2026": every month of 2025 is covered (start sorts before
    // January), no month of 2026 is (end sorts before January too).
    let window = FiscalWindow { start: bound("2025"), end: bound("2026") };
    assert!(window.contains(month("2025-01")));
    assert!(window.contains(month("2025-12")));
    assert!(!window.contains(month("2026-01")));
}

#[test]
fn test_serde_round_trip() {
    let m = month("2025-07");
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "\"2025-07\"");
    assert_eq!(serde_json::from_str::<Month>(&json).unwrap(), m);

    let b = bound("2024");
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, "\"2024\"");
    assert_eq!(serde_json::from_str::<PeriodBound>(&json).unwrap(), b);
}

#[test]
fn test_from_date() {
    let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
    assert_eq!(Month::from_date(date), month("2025-03"));
}
