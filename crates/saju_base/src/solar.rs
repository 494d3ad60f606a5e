//! Linear sun-longitude approximation for radial chart placement.
//!
//! This is NOT an ephemeris: the Sun is assumed to move a constant
//! 360/365 degrees per day from 0 deg at the March 20 equinox. The result
//! only positions a marker on a 12-segment wheel.

use saju_time::{CUMULATIVE_DAYS, CivilDate, validate_month_day};

use crate::error::BaseError;
use crate::util::normalize_360;
use crate::zodiac::ZodiacSign;

/// Day-of-year of March 20 in a common year.
pub const VERNAL_EQUINOX_ORDINAL: u32 = 79;

/// Days in the reference (common) year.
pub const REFERENCE_YEAR_DAYS: u32 = 365;

/// Mean daily motion used by the approximation.
pub const DEGREES_PER_DAY: f64 = 360.0 / REFERENCE_YEAR_DAYS as f64;

/// Angular width of one chart segment.
pub const SEGMENT_SPAN_DEG: f64 = 30.0;

/// Day-of-year in a common year. Feb 29 shares Mar 1's ordinal.
///
/// Callers pass a validated (month, day) pair.
pub fn reference_ordinal(month: u32, day: u32) -> u32 {
    CUMULATIVE_DAYS[(month - 1) as usize] + day
}

fn longitude_for_ordinal(ordinal: u32) -> f64 {
    let days = (ordinal as i64 - VERNAL_EQUINOX_ORDINAL as i64)
        .rem_euclid(REFERENCE_YEAR_DAYS as i64);
    normalize_360(days as f64 * DEGREES_PER_DAY)
}

/// Approximate tropical sun longitude in [0, 360) for a (month, day) pair.
pub fn approximate_sun_longitude(month: u32, day: u32) -> Result<f64, BaseError> {
    validate_month_day(month, day)?;
    Ok(longitude_for_ordinal(reference_ordinal(month, day)))
}

/// Approximate sun longitude for a validated date; the year is ignored.
pub fn sun_longitude_for_date(date: &CivilDate) -> f64 {
    longitude_for_ordinal(reference_ordinal(date.month(), date.day()))
}

/// Where a reading lands on the 12-segment radial chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialPlacement {
    /// Highlighted sign.
    pub sign: ZodiacSign,
    /// Segment index, 0 = Aries.
    pub segment_index: u8,
    /// Centre of the highlighted segment in degrees.
    pub segment_center_deg: f64,
    /// Sun marker angle in degrees, [0, 360).
    pub sun_marker_deg: f64,
}

/// Place a sign's segment and the sun marker on the chart wheel.
pub fn radial_placement(sign: ZodiacSign, sun_longitude_deg: f64) -> RadialPlacement {
    let segment_index = sign.index();
    RadialPlacement {
        sign,
        segment_index,
        segment_center_deg: segment_index as f64 * SEGMENT_SPAN_DEG + SEGMENT_SPAN_DEG / 2.0,
        sun_marker_deg: normalize_360(sun_longitude_deg),
    }
}
