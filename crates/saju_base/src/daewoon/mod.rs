//! Daewoon (대운): ten-year luck pillars stepped from the month pillar.
//!
//! Direction follows the year stem's polarity against gender: yang-year
//! males and yin-year females walk forward through the cycles, everyone
//! else walks backward. Each entry covers one decade starting at age 4.

pub mod sequence;
pub mod types;

pub use sequence::{daewoon_direction, daewoon_for_chart, daewoon_sequence};
pub use types::{
    DECADE_YEARS, DaewoonConfig, DaewoonEntry, DaewoonLength, DaewoonSequence, Direction,
    FIRST_AGE, Gender,
};
