//! Four Pillars (사주) derivations from a Gregorian birth moment.
//!
//! This crate provides:
//! - Stem/branch/element tables and the four-pillar resolver
//! - Ten Relations classification against the day master
//! - Daewoon (decade luck) sequences
//! - Western sun-sign lookup and a linear sun-longitude approximation
//!
//! Everything here is pure table lookup and modular arithmetic over
//! constant data; no function performs I/O or holds state.

pub mod daewoon;
pub mod element;
pub mod error;
pub mod ganji;
pub mod pillars;
pub mod relation;
pub mod solar;
pub mod util;
pub mod zodiac;

pub use daewoon::{
    DECADE_YEARS, DaewoonConfig, DaewoonEntry, DaewoonLength, DaewoonSequence, Direction,
    FIRST_AGE, Gender, daewoon_direction, daewoon_for_chart, daewoon_sequence,
};
pub use element::{ALL_ELEMENTS, Element, ElementColors};
pub use error::BaseError;
pub use ganji::{ALL_BRANCHES, ALL_STEMS, Branch, Pillar, Stem};
pub use pillars::{
    ALL_POSITIONS, Chart, DAY_BRANCH_OFFSET, HOUR_STEM_START, MONTH_STEM_START, PillarPosition,
    YEAR_STEM_OFFSET, chart_from_calendar, day_pillar, hour_branch, hour_pillar, month_pillar,
    resolve_chart, year_pillar,
};
pub use relation::{
    ALL_RELATION_CLASSES, ChartRelations, PillarRelations, RelationClass, SlotRelation, TenGod,
    branch_relation, chart_relations, classify, stem_relation,
};
pub use solar::{
    DEGREES_PER_DAY, RadialPlacement, VERNAL_EQUINOX_ORDINAL, approximate_sun_longitude,
    radial_placement, reference_ordinal, sun_longitude_for_date,
};
pub use util::normalize_360;
pub use zodiac::{
    ALL_SIGNS, ZODIAC_RANGES, ZodiacRange, ZodiacSign, matching_range_count, zodiac_sign,
    zodiac_sign_for_date,
};

// Re-export the time types callers need to build inputs.
pub use saju_time::{BirthTime, CivilDate, TimeError};
