//! Heavenly stems (천간), earthly branches (지지) and stem/branch pillars.
//!
//! Index 0 of each cycle is 甲 / 子. Even indices are yang, odd are yin.
//! Stems pair up by element (甲乙 Wood, 丙丁 Fire, ...); branches map to
//! elements through a fixed, uneven table.

use crate::element::Element;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

impl Stem {
    /// Stem at `index` taken modulo 10 (negative values wrap).
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    pub fn element(self) -> Element {
        STEM_ELEMENTS[self.index() as usize]
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Move `delta` places along the 10-cycle.
    pub fn step(self, delta: i64) -> Self {
        Self::from_index(self.index() as i64 + delta)
    }
}

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// Branch at `index` taken modulo 12 (negative values wrap).
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Move `delta` places along the 12-cycle.
    pub fn step(self, delta: i64) -> Self {
        Self::from_index(self.index() as i64 + delta)
    }
}

/// One stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Build from raw indices, each reduced modulo its cycle.
    pub fn from_indices(stem: i64, branch: i64) -> Self {
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }

    /// Position in the 60-pair cycle (甲子=0 .. 癸亥=59).
    ///
    /// `None` when stem and branch polarity differ; such pairs do not occur
    /// in the sexagenary cycle, although the month formula can produce them.
    pub fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Advance both cycles together by `delta` steps.
    pub fn step(self, delta: i64) -> Self {
        Self {
            stem: self.stem.step(delta),
            branch: self.branch.step(delta),
        }
    }

    /// Two-character hanja form, e.g. `庚午`.
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Two-syllable Korean form, e.g. `경오`.
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}
