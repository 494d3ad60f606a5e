//! Error types for civil date and birth-hour validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating calendar input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12, day outside the month, or year out of range.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
        }
    }
}

impl Error for TimeError {}
