//! Core types for Daewoon sequences.

use std::str::FromStr;

use crate::error::BaseError;
use crate::ganji::Pillar;

/// Age label of the first entry.
pub const FIRST_AGE: u16 = 4;

/// Span of one entry in years.
pub const DECADE_YEARS: u16 = 10;

/// Gender as it enters the direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = BaseError;

    /// Accepts English and Korean tokens, ASCII case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남자" | "남" => Ok(Self::Male),
            "female" | "f" | "여자" | "여" => Ok(Self::Female),
            _ => Err(BaseError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Walk direction through the stem/branch cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed step per entry.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Number of entries to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DaewoonLength {
    /// 8 entries (ages 4..=74).
    Compact,
    /// 9 entries (ages 4..=84).
    #[default]
    Full,
}

impl DaewoonLength {
    pub const fn count(self) -> usize {
        match self {
            Self::Compact => 8,
            Self::Full => 9,
        }
    }
}

/// Configurable parameters for Daewoon generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaewoonConfig {
    /// Sequence length. Default: [`DaewoonLength::Full`].
    pub length: DaewoonLength,
}

impl DaewoonConfig {
    pub const fn compact() -> Self {
        Self {
            length: DaewoonLength::Compact,
        }
    }
}

/// One decade of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaewoonEntry {
    /// 1-indexed position.
    pub order: u16,
    /// Age at which the decade begins.
    pub start_age: u16,
    pub pillar: Pillar,
}

impl DaewoonEntry {
    /// Whether `age` falls in `[start_age, start_age + 10)`.
    pub const fn contains_age(&self, age: u16) -> bool {
        age >= self.start_age && age < self.start_age + DECADE_YEARS
    }
}

/// A complete Daewoon sequence for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaewoonSequence {
    pub direction: Direction,
    pub entries: Vec<DaewoonEntry>,
}

impl DaewoonSequence {
    /// Entry covering `age`, if the sequence reaches it.
    pub fn active_entry(&self, age: u16) -> Option<&DaewoonEntry> {
        self.entries.iter().find(|e| e.contains_age(age))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
