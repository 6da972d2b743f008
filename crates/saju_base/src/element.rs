//! Five elements and yin/yang polarity.

use serde::{Deserialize, Serialize};

/// The five elements in generating-cycle order (Wood feeds Fire feeds Earth ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based position in the generating cycle (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_ELEMENTS.len() {
            Some(ALL_ELEMENTS[index as usize])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Uppercase code used in chart documents (`WOOD`, `FIRE`, ...).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Wood => "WOOD",
            Self::Fire => "FIRE",
            Self::Earth => "EARTH",
            Self::Metal => "METAL",
            Self::Water => "WATER",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls.
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even table indices are yang, odd are yin. Holds for stems and branches alike.
    pub const fn of_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Yang => "YANG",
            Self::Yin => "YIN",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}
