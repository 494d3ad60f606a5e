//! The five elements (오행) and their display attributes.
//!
//! Element order is cyclic: Wood → Fire → Earth → Metal → Water → Wood.
//! Relation classes are computed from the forward distance on this cycle.

/// The five elements in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in cycle order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Background and foreground colours used when an element is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementColors {
    /// Fill colour, `#RRGGBB`.
    pub background: &'static str,
    /// Text colour drawn on top of `background`.
    pub text: &'static str,
}

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Single-character hanja.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// 0-based cycle position (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Forward distance from `self` to `other` on the cycle, in 0..5.
    pub const fn offset_to(self, other: Element) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }

    /// Display colours for chart cells.
    pub const fn colors(self) -> ElementColors {
        match self {
            Self::Wood => ElementColors {
                background: "#00C73C",
                text: "white",
            },
            Self::Fire => ElementColors {
                background: "#FF4444",
                text: "white",
            },
            Self::Earth => ElementColors {
                background: "#E6B800",
                text: "black",
            },
            Self::Metal => ElementColors {
                background: "#DDDDDD",
                text: "black",
            },
            Self::Water => ElementColors {
                background: "#333333",
                text: "white",
            },
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
