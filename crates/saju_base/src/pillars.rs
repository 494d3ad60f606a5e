//! Four Pillars (사주) resolution from a Gregorian birth moment.
//!
//! All four pillars come from closed-form modular arithmetic against the
//! 1900-01-01 epoch. The year and month pillars follow the Gregorian year
//! and month directly (no solar-term boundaries).

use saju_time::{BirthTime, EPOCH_YEAR};

use crate::element::Element;
use crate::error::BaseError;
use crate::ganji::{Branch, Pillar, Stem};

/// Year-stem index of the epoch year 1900 (庚).
pub const YEAR_STEM_OFFSET: i64 = 6;

/// Day-branch index of the epoch day 1900-01-01 (戌).
pub const DAY_BRANCH_OFFSET: i64 = 10;

/// Stem index of the second month, keyed by year-stem index.
pub const MONTH_STEM_START: [u8; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];

/// Stem index of the 子 hour, keyed by day-stem index.
pub const HOUR_STEM_START: [u8; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

/// Pillar slot within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Hour,
    Day,
    Month,
    Year,
}

/// Chart slots in conventional right-to-left reading order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Hour,
    PillarPosition::Day,
    PillarPosition::Month,
    PillarPosition::Year,
];

impl PillarPosition {
    /// Index into [`ALL_POSITIONS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Hour => 0,
            Self::Day => 1,
            Self::Month => 2,
            Self::Year => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chart {
    pub hour: Pillar,
    pub day: Pillar,
    pub month: Pillar,
    pub year: Pillar,
}

impl Chart {
    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Hour => self.hour,
            PillarPosition::Day => self.day,
            PillarPosition::Month => self.month,
            PillarPosition::Year => self.year,
        }
    }

    /// Slots paired with their pillars, hour first.
    pub fn pillars(&self) -> [(PillarPosition, Pillar); 4] {
        ALL_POSITIONS.map(|p| (p, self.pillar(p)))
    }

    /// The day stem (일간), reference point for every relation.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Element of the day stem.
    pub fn self_element(&self) -> Element {
        self.day.stem.element()
    }
}

/// Year pillar for a Gregorian year.
pub fn year_pillar(year: i32) -> Pillar {
    let n = (year - EPOCH_YEAR) as i64;
    Pillar::from_indices(YEAR_STEM_OFFSET + n, n)
}

/// Month pillar for a Gregorian month (1..=12) under the given year stem.
pub fn month_pillar(year_stem: Stem, month: u32) -> Pillar {
    let start = MONTH_STEM_START[year_stem.index() as usize] as i64;
    let m = month as i64;
    Pillar::from_indices(start + m - 2, m + 1)
}

/// Day pillar for a signed day count from 1900-01-01.
pub fn day_pillar(days_since_epoch: i64) -> Pillar {
    Pillar::from_indices(days_since_epoch, days_since_epoch + DAY_BRANCH_OFFSET)
}

/// Two-hour block branch; 23:00 and 00:00 both fall in 子.
pub fn hour_branch(hour: u32) -> Branch {
    Branch::from_index(((hour + 1) / 2) as i64)
}

/// Hour pillar for a clock hour (0..=23) under the given day stem.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = hour_branch(hour);
    let start = HOUR_STEM_START[day_stem.index() as usize] as i64;
    Pillar {
        stem: Stem::from_index(start + branch.index() as i64),
        branch,
    }
}

/// Resolve all four pillars. Total for every validated birth moment.
pub fn resolve_chart(birth: &BirthTime) -> Chart {
    let date = birth.date();
    let year = year_pillar(date.year());
    let month = month_pillar(year.stem, date.month());
    let day = day_pillar(date.days_since_epoch());
    let hour = hour_pillar(day.stem, birth.hour());
    Chart {
        hour,
        day,
        month,
        year,
    }
}

/// Validate raw calendar fields, then resolve the chart.
pub fn chart_from_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> Result<Chart, BaseError> {
    let birth = BirthTime::new(year, month, day, hour)?;
    Ok(resolve_chart(&birth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_year_is_gyeong_ja() {
        let p = year_pillar(1900);
        assert_eq!(p.stem, Stem::Gyeong);
        assert_eq!(p.branch, Branch::Ja);
    }

    #[test]
    fn year_before_epoch_wraps() {
        let p = year_pillar(1899);
        assert_eq!(p.stem, Stem::Gi);
        assert_eq!(p.branch, Branch::Hae);
    }

    #[test]
    fn epoch_day_is_gap_sul() {
        let p = day_pillar(0);
        assert_eq!(p.stem, Stem::Gap);
        assert_eq!(p.branch, Branch::Sul);
    }

    #[test]
    fn day_before_epoch_wraps() {
        let p = day_pillar(-1);
        assert_eq!(p.stem, Stem::Gye);
        assert_eq!(p.branch, Branch::Yu);
    }

    #[test]
    fn january_wraps_month_stem() {
        // Year stem 甲 → start 2; January gives 2 + 1 - 2 = 1
        assert_eq!(month_pillar(Stem::Gap, 1).stem, Stem::Eul);
        // Year stem 戊 → start 0; January gives -1 → 9
        assert_eq!(month_pillar(Stem::Mu, 1).stem, Stem::Gye);
    }

    #[test]
    fn month_branch_offset() {
        assert_eq!(month_pillar(Stem::Gap, 1).branch, Branch::In);
        assert_eq!(month_pillar(Stem::Gap, 11).branch, Branch::Ja);
        assert_eq!(month_pillar(Stem::Gap, 12).branch, Branch::Chuk);
    }

    #[test]
    fn hour_blocks() {
        assert_eq!(hour_branch(23), Branch::Ja);
        assert_eq!(hour_branch(0), Branch::Ja);
        assert_eq!(hour_branch(1), Branch::Chuk);
        assert_eq!(hour_branch(2), Branch::Chuk);
        assert_eq!(hour_branch(11), Branch::O);
        assert_eq!(hour_branch(12), Branch::O);
        assert_eq!(hour_branch(22), Branch::Hae);
    }

    #[test]
    fn hour_stem_start_for_gap_day() {
        assert_eq!(hour_pillar(Stem::Gap, 0).stem, Stem::Gap);
        assert_eq!(hour_pillar(Stem::Gi, 0).stem, Stem::Gap);
        assert_eq!(hour_pillar(Stem::Eul, 0).stem, Stem::Byeong);
    }

    #[test]
    fn chart_accessors() {
        let chart = chart_from_calendar(1990, 1, 15, 14).unwrap();
        assert_eq!(chart.day_master(), chart.day.stem);
        assert_eq!(chart.self_element(), chart.day.stem.element());
        let positions: Vec<_> = chart.pillars().iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, ALL_POSITIONS.to_vec());
        assert_eq!(chart.pillar(PillarPosition::Year), chart.year);
    }

    #[test]
    fn chart_from_calendar_rejects_bad_input() {
        assert!(chart_from_calendar(2023, 2, 29, 0).is_err());
        assert!(chart_from_calendar(2023, 1, 1, 24).is_err());
    }
}
