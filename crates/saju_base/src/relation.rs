//! Ten Relations (십신): how each chart symbol relates to the day master.
//!
//! The coarse class is the forward distance between the day master's
//! element and the other symbol's element on the five-element cycle.
//! Each class then splits in two by yin/yang polarity relative to the day
//! stem, giving the ten finer labels.

use crate::element::Element;
use crate::ganji::{Branch, Stem};
use crate::pillars::{ALL_POSITIONS, Chart, PillarPosition};

/// Five relation classes, indexed by cycle offset from the self element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationClass {
    /// Same element (비견/겁재).
    Peer,
    /// Element the self generates (식신/상관).
    Output,
    /// Element the self controls (편재/정재).
    Wealth,
    /// Element that controls the self (편관/정관).
    Authority,
    /// Element that generates the self (편인/정인).
    Resource,
}

/// All 5 classes in cycle-offset order (offset 0 = Peer).
pub const ALL_RELATION_CLASSES: [RelationClass; 5] = [
    RelationClass::Peer,
    RelationClass::Output,
    RelationClass::Wealth,
    RelationClass::Authority,
    RelationClass::Resource,
];

impl RelationClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Peer",
            Self::Output => "Output",
            Self::Wealth => "Wealth",
            Self::Authority => "Authority",
            Self::Resource => "Resource",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Authority => "관성",
            Self::Resource => "인성",
        }
    }
}

/// Classify `other` relative to `self_element`.
pub fn classify(self_element: Element, other: Element) -> RelationClass {
    ALL_RELATION_CLASSES[self_element.offset_to(other) as usize]
}

/// The ten finer relation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

impl TenGod {
    /// Split a class by polarity. `same_polarity` picks the 편/비/식 side.
    pub const fn from_class(class: RelationClass, same_polarity: bool) -> Self {
        match (class, same_polarity) {
            (RelationClass::Peer, true) => Self::Bigyeon,
            (RelationClass::Peer, false) => Self::Geopjae,
            (RelationClass::Output, true) => Self::Siksin,
            (RelationClass::Output, false) => Self::Sanggwan,
            (RelationClass::Wealth, true) => Self::Pyeonjae,
            (RelationClass::Wealth, false) => Self::Jeongjae,
            (RelationClass::Authority, true) => Self::Pyeongwan,
            (RelationClass::Authority, false) => Self::Jeonggwan,
            (RelationClass::Resource, true) => Self::Pyeonin,
            (RelationClass::Resource, false) => Self::Jeongin,
        }
    }

    pub const fn class(self) -> RelationClass {
        match self {
            Self::Bigyeon | Self::Geopjae => RelationClass::Peer,
            Self::Siksin | Self::Sanggwan => RelationClass::Output,
            Self::Pyeonjae | Self::Jeongjae => RelationClass::Wealth,
            Self::Pyeongwan | Self::Jeonggwan => RelationClass::Authority,
            Self::Pyeonin | Self::Jeongin => RelationClass::Resource,
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }

    /// Short English gloss.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bigyeon => "Self/Friend",
            Self::Geopjae => "Competitor",
            Self::Siksin => "Talent/Food",
            Self::Sanggwan => "Genius/Rebel",
            Self::Pyeonjae => "Big Wealth",
            Self::Jeongjae => "Stable Wealth",
            Self::Pyeongwan => "Power/Stress",
            Self::Jeonggwan => "Honor/Job",
            Self::Pyeonin => "Intuition",
            Self::Jeongin => "Study/Doc",
        }
    }
}

/// Relation of one chart symbol to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRelation {
    /// The day stem itself (일간).
    DayMaster,
    /// Any other stem or branch.
    Related { class: RelationClass, ten_god: TenGod },
}

impl SlotRelation {
    /// Coarse class; the day master counts as its own peer.
    pub const fn class(self) -> RelationClass {
        match self {
            Self::DayMaster => RelationClass::Peer,
            Self::Related { class, .. } => class,
        }
    }

    pub const fn ten_god(self) -> Option<TenGod> {
        match self {
            Self::DayMaster => None,
            Self::Related { ten_god, .. } => Some(ten_god),
        }
    }

    /// English label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::DayMaster => "The Self",
            Self::Related { ten_god, .. } => ten_god.description(),
        }
    }

    /// Korean label.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::DayMaster => "일간",
            Self::Related { ten_god, .. } => ten_god.korean(),
        }
    }
}

fn related(day_master: Stem, element: Element, is_yang: bool) -> SlotRelation {
    let class = classify(day_master.element(), element);
    SlotRelation::Related {
        class,
        ten_god: TenGod::from_class(class, is_yang == day_master.is_yang()),
    }
}

/// Relation of a stem in a non-day slot.
pub fn stem_relation(day_master: Stem, stem: Stem) -> SlotRelation {
    related(day_master, stem.element(), stem.is_yang())
}

/// Relation of a branch in any slot.
pub fn branch_relation(day_master: Stem, branch: Branch) -> SlotRelation {
    related(day_master, branch.element(), branch.is_yang())
}

/// Stem and branch relations of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarRelations {
    pub position: PillarPosition,
    pub stem: SlotRelation,
    pub branch: SlotRelation,
}

/// Relations for all four pillars, hour first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRelations {
    pub pillars: [PillarRelations; 4],
}

impl ChartRelations {
    pub fn get(&self, position: PillarPosition) -> PillarRelations {
        self.pillars[position.index() as usize]
    }
}

/// Classify every slot of a chart against its day master.
pub fn chart_relations(chart: &Chart) -> ChartRelations {
    let dm = chart.day_master();
    let pillars = ALL_POSITIONS.map(|position| {
        let pillar = chart.pillar(position);
        let stem = if position == PillarPosition::Day {
            SlotRelation::DayMaster
        } else {
            stem_relation(dm, pillar.stem)
        };
        PillarRelations {
            position,
            stem,
            branch: branch_relation(dm, pillar.branch),
        }
    });
    ChartRelations { pillars }
}
