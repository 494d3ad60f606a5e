//! Raw birth input and the lunar calendar seam.

use std::convert::Infallible;
use std::error::Error;

/// Calendar the input date is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarSystem {
    #[default]
    Solar,
    Lunar {
        /// The date falls in an intercalary month.
        leap_month: bool,
    },
}

/// Unvalidated birth details as a caller collects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthInput {
    pub name: String,
    /// Gender token, e.g. `male`, `f`, `남자`.
    pub gender: String,
    pub calendar: CalendarSystem,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Clock hour, 0..=23.
    pub hour: u32,
}

impl BirthInput {
    /// Solar-calendar input.
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            calendar: CalendarSystem::Solar,
            year,
            month,
            day,
            hour,
        }
    }

    /// Reinterpret the date as lunar.
    pub fn lunar(mut self, leap_month: bool) -> Self {
        self.calendar = CalendarSystem::Lunar { leap_month };
        self
    }
}

/// A lunar date as given by the caller, kept alongside the converted
/// Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap_month: bool,
}

/// Converts Korean lunar dates to Gregorian (year, month, day).
pub trait LunarConverter {
    type Error: Error + Send + Sync + 'static;

    /// Whether this converter handles lunar input at all.
    fn is_available(&self) -> bool {
        true
    }

    fn to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Result<(i32, u32, u32), Self::Error>;
}

/// Converter used when none is configured; never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarConverter;

impl LunarConverter for NoLunarConverter {
    type Error = Infallible;

    fn is_available(&self) -> bool {
        false
    }

    fn to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        _leap_month: bool,
    ) -> Result<(i32, u32, u32), Self::Error> {
        Ok((year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_solar() {
        let input = BirthInput::new("Kim", "male", 1990, 1, 15, 14);
        assert_eq!(input.calendar, CalendarSystem::Solar);
        let lunar = input.lunar(true);
        assert_eq!(lunar.calendar, CalendarSystem::Lunar { leap_month: true });
    }

    #[test]
    fn no_converter_is_unavailable() {
        assert!(!NoLunarConverter.is_available());
    }
}
