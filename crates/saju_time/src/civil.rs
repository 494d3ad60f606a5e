//! Proleptic Gregorian civil dates.
//!
//! `CivilDate` can only be built through [`CivilDate::new`], so every value
//! in circulation is a real calendar day. Day arithmetic goes through the
//! integer Julian Day Number (Fliegel & Van Flandern).

use crate::error::TimeError;

/// First supported year.
pub const MIN_YEAR: i32 = 1;

/// Last supported year.
pub const MAX_YEAR: i32 = 9999;

/// Epoch for sexagenary day counting: 1900-01-01.
pub const EPOCH_YEAR: i32 = 1900;

/// Julian Day Number of 1900-01-01.
pub const EPOCH_JDN: i64 = 2_415_021;

/// Days before the first of each month in a common year.
pub const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of `month` in `year`, or `None` if the month is out of range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(DAYS_IN_MONTH[(month - 1) as usize])
    }
}

/// Integer Julian Day Number for a Gregorian date.
///
/// No validation; callers pass dates that [`CivilDate::new`] accepted.
pub fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Check a (month, day) pair without a year. Feb 29 is accepted.
pub fn validate_month_day(month: u32, day: u32) -> Result<(), TimeError> {
    // 2000 is a leap year, so Feb 29 passes.
    match days_in_month(2000, month) {
        Some(n) if (1..=n).contains(&day) => Ok(()),
        _ => Err(TimeError::InvalidDate {
            year: 0,
            month,
            day,
        }),
    }
}

/// A validated proleptic Gregorian date in `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Validate and build a date. Never clamps.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let invalid = TimeError::InvalidDate { year, month, day };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid);
        }
        match days_in_month(year, month) {
            Some(n) if (1..=n).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(invalid),
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Signed day count from 1900-01-01 (negative before the epoch).
    pub fn days_since_epoch(self) -> i64 {
        self.jdn() - EPOCH_JDN
    }

    /// The following calendar day, or `None` past `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        let len = days_in_month(self.year, self.month)?;
        if self.day < len {
            Some(Self {
                day: self.day + 1,
                ..self
            })
        } else if self.month < 12 {
            Some(Self {
                month: self.month + 1,
                day: 1,
                ..self
            })
        } else if self.year < MAX_YEAR {
            Some(Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
