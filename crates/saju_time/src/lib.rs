//! Civil calendar primitives for the saju engine.
//!
//! This crate provides:
//! - Proleptic Gregorian date validation (`CivilDate`)
//! - Julian Day Numbers and day counts from the 1900-01-01 epoch
//! - Whole-hour birth moments (`BirthTime`)

pub mod birth_time;
pub mod civil;
pub mod error;

pub use birth_time::BirthTime;
pub use civil::{
    CUMULATIVE_DAYS, CivilDate, EPOCH_JDN, EPOCH_YEAR, MAX_YEAR, MIN_YEAR, calendar_to_jdn,
    days_in_month, is_leap_year, validate_month_day,
};
pub use error::TimeError;
