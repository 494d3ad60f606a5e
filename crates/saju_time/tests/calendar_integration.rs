//! Day-count integration tests across long spans.

use saju_time::{CivilDate, EPOCH_JDN, calendar_to_jdn, is_leap_year};

#[test]
fn walking_days_matches_jdn_difference() {
    let start = CivilDate::new(1899, 12, 1).unwrap();
    let mut d = start;
    for n in 1..=1500i64 {
        d = d.succ().unwrap();
        assert_eq!(d.jdn() - start.jdn(), n, "at {d}");
    }
}

#[test]
fn year_lengths_from_jdn() {
    for y in 1890..2110 {
        let len = calendar_to_jdn(y + 1, 1, 1) - calendar_to_jdn(y, 1, 1);
        let expected = if is_leap_year(y) { 366 } else { 365 };
        assert_eq!(len, expected, "year {y}");
    }
}

#[test]
fn ninety_years_after_epoch() {
    // 90 * 365 + 22 leap days (1904..=1988)
    let d = CivilDate::new(1990, 1, 1).unwrap();
    assert_eq!(d.days_since_epoch(), 32_872);
    assert_eq!(d.jdn(), EPOCH_JDN + 32_872);
}

#[test]
fn first_supported_day() {
    let d = CivilDate::new(1, 1, 1).unwrap();
    assert_eq!(d.jdn(), 1_721_426);
}
