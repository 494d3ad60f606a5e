//! Birth moment at whole-hour resolution.

use crate::civil::CivilDate;
use crate::error::TimeError;

/// A validated Gregorian birth date with a clock hour (0..=23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthTime {
    date: CivilDate,
    hour: u32,
}

impl BirthTime {
    /// Validate all four components.
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, TimeError> {
        let date = CivilDate::new(year, month, day)?;
        Self::from_date(date, hour)
    }

    /// Attach an hour to an already-validated date.
    pub fn from_date(date: CivilDate, hour: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        Ok(Self { date, hour })
    }

    pub const fn date(&self) -> CivilDate {
        self.date
    }

    /// Clock hour, 0..=23.
    pub const fn hour(&self) -> u32 {
        self.hour
    }
}

impl std::fmt::Display for BirthTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:00", self.date, self.hour)
    }
}
