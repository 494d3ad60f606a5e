//! Western sun-sign lookup by calendar date.
//!
//! Signs are fixed (month, day) ranges, not longitudes. Each sign runs from
//! its start date up to the next sign's start; Capricorn wraps the year end.
//! Note that Capricorn starts on Dec 25 here, so Dec 22-24 stay Sagittarius.

use saju_time::{CivilDate, validate_month_day};

use crate::error::BaseError;

/// The 12 signs, Aries first (chart segment order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in segment order (0 = Aries).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Start of one sign's date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacRange {
    pub start_month: u32,
    pub start_day: u32,
    pub sign: ZodiacSign,
}

impl ZodiacRange {
    pub const fn new(start_month: u32, start_day: u32, sign: ZodiacSign) -> Self {
        Self {
            start_month,
            start_day,
            sign,
        }
    }

    /// Start as `month * 100 + day`.
    pub const fn start_key(&self) -> u32 {
        self.start_month * 100 + self.start_day
    }
}

/// Range starts in calendar order.
pub const ZODIAC_RANGES: [ZodiacRange; 12] = [
    ZodiacRange::new(1, 20, ZodiacSign::Aquarius),
    ZodiacRange::new(2, 19, ZodiacSign::Pisces),
    ZodiacRange::new(3, 21, ZodiacSign::Aries),
    ZodiacRange::new(4, 20, ZodiacSign::Taurus),
    ZodiacRange::new(5, 21, ZodiacSign::Gemini),
    ZodiacRange::new(6, 22, ZodiacSign::Cancer),
    ZodiacRange::new(7, 23, ZodiacSign::Leo),
    ZodiacRange::new(8, 23, ZodiacSign::Virgo),
    ZodiacRange::new(9, 24, ZodiacSign::Libra),
    ZodiacRange::new(10, 23, ZodiacSign::Scorpio),
    ZodiacRange::new(11, 23, ZodiacSign::Sagittarius),
    ZodiacRange::new(12, 25, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Aries => "양자리",
            Self::Taurus => "황소자리",
            Self::Gemini => "쌍둥이자리",
            Self::Cancer => "게자리",
            Self::Leo => "사자자리",
            Self::Virgo => "처녀자리",
            Self::Libra => "천칭자리",
            Self::Scorpio => "전갈자리",
            Self::Sagittarius => "사수자리",
            Self::Capricorn => "염소자리",
            Self::Aquarius => "물병자리",
            Self::Pisces => "물고기자리",
        }
    }

    /// One-word character keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Aries => "Pioneer",
            Self::Taurus => "Stabilizer",
            Self::Gemini => "Communicator",
            Self::Cancer => "Protector",
            Self::Leo => "King",
            Self::Virgo => "Analyst",
            Self::Libra => "Mediator",
            Self::Scorpio => "Strategist",
            Self::Sagittarius => "Adventurer",
            Self::Capricorn => "Ambitious",
            Self::Aquarius => "Innovator",
            Self::Pisces => "Artist",
        }
    }

    /// 0-based segment index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `key` (`month * 100 + day`) falls in range `i` of [`ZODIAC_RANGES`].
fn range_contains(i: usize, key: u32) -> bool {
    let range = &ZODIAC_RANGES[i];
    if range.sign == ZodiacSign::Capricorn {
        return key >= 1225 || key <= 119;
    }
    let next = &ZODIAC_RANGES[(i + 1) % ZODIAC_RANGES.len()];
    range.start_key() <= key && key < next.start_key()
}

/// Number of ranges containing `(month, day)`. Exactly one for valid input.
pub fn matching_range_count(month: u32, day: u32) -> usize {
    let key = month * 100 + day;
    (0..ZODIAC_RANGES.len())
        .filter(|&i| range_contains(i, key))
        .count()
}

fn sign_for_key(key: u32) -> ZodiacSign {
    (0..ZODIAC_RANGES.len())
        .find(|&i| range_contains(i, key))
        .map(|i| ZODIAC_RANGES[i].sign)
        .unwrap_or(ZodiacSign::Capricorn)
}

/// Sun sign for a (month, day) pair. Feb 29 is accepted.
pub fn zodiac_sign(month: u32, day: u32) -> Result<ZodiacSign, BaseError> {
    validate_month_day(month, day)?;
    Ok(sign_for_key(month * 100 + day))
}

/// Sun sign for a validated date.
pub fn zodiac_sign_for_date(date: &CivilDate) -> ZodiacSign {
    sign_for_key(date.month() * 100 + date.day())
}
