//! Convenience layer over `saju_base`.
//!
//! Takes raw birth details (name, gender token, calendar, date, hour),
//! validates them and assembles a complete [`Reading`]: chart, relations,
//! Daewoon sequence, zodiac sign and radial-chart placement.
//!
//! # Quick start
//!
//! ```rust
//! use saju_rs::*;
//!
//! let input = BirthInput::new("Kim", "male", 1990, 1, 15, 14);
//! let r = reading(&input, &ReadingConfig::default()).unwrap();
//! assert_eq!(r.chart.year.to_string(), "庚午");
//! assert_eq!(r.zodiac, ZodiacSign::Capricorn);
//! ```

pub mod error;
pub mod input;
pub mod reading;

pub use error::SajuError;
pub use input::{BirthInput, CalendarSystem, LunarConverter, LunarDate, NoLunarConverter};
pub use reading::{Reading, ReadingConfig, reading, reading_with_converter};

// Re-export core types so callers don't need to depend on saju_base directly.
pub use saju_base::{
    BaseError, BirthTime, Branch, Chart, ChartRelations, CivilDate, DaewoonConfig, DaewoonEntry,
    DaewoonLength, DaewoonSequence, Direction, Element, Gender, Pillar, PillarPosition,
    PillarRelations, RadialPlacement, RelationClass, SlotRelation, Stem, TenGod, TimeError,
    ZodiacSign,
};
