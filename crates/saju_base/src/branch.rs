//! The twelve earthly branches (지지).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::glyph::GlyphInfo;

/// The 12 branches, starting from 子 (Ja).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
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

/// All 12 branches in order (0 = 子, 11 = 亥).
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

const fn info(hangul: &'static str, hanja: &'static str, element: Element, index: u8) -> GlyphInfo {
    GlyphInfo {
        hangul,
        hanja,
        element,
        polarity: Polarity::of_index(index),
    }
}

/// Glyphs, element and polarity per branch, indexed by [`Branch::index`].
///
/// Branch elements do not split 2:1 like stems; the four Earth branches sit
/// between the seasons.
pub const BRANCH_TABLE: [GlyphInfo; 12] = [
    info("자", "子", Element::Water, 0),
    info("축", "丑", Element::Earth, 1),
    info("인", "寅", Element::Wood, 2),
    info("묘", "卯", Element::Wood, 3),
    info("진", "辰", Element::Earth, 4),
    info("사", "巳", Element::Fire, 5),
    info("오", "午", Element::Fire, 6),
    info("미", "未", Element::Earth, 7),
    info("신", "申", Element::Metal, 8),
    info("유", "酉", Element::Metal, 9),
    info("술", "戌", Element::Earth, 10),
    info("해", "亥", Element::Water, 11),
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
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

    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_BRANCHES.len() {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch at `value` mod 12.
    pub const fn wrapping(value: i64) -> Self {
        ALL_BRANCHES[crate::util::cyclic(value, 12) as usize]
    }

    pub const fn info(self) -> &'static GlyphInfo {
        &BRANCH_TABLE[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        self.info().hangul
    }

    pub const fn hanja(self) -> &'static str {
        self.info().hanja
    }

    pub const fn element(self) -> Element {
        self.info().element
    }

    pub const fn polarity(self) -> Polarity {
        self.info().polarity
    }

    /// Romanized name.
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

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }
}

impl From<Branch> for u8 {
    fn from(b: Branch) -> Self {
        b.index()
    }
}

impl TryFrom<u8> for Branch {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or_else(|| format!("branch index out of range: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), Some(*b));
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn element_table() {
        let expected = [4, 2, 0, 0, 2, 1, 1, 2, 3, 3, 2, 4];
        for (b, e) in ALL_BRANCHES.iter().zip(expected) {
            assert_eq!(b.element().index(), e, "{b:?}");
        }
    }

    #[test]
    fn wrapping_negative() {
        assert_eq!(Branch::wrapping(-1), Branch::Hae);
        assert_eq!(Branch::wrapping(26), Branch::In);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Branch::O.hanja(), "午");
        assert_eq!(Branch::Hae.hangul(), "해");
        assert_eq!(Branch::In.animal(), "Tiger");
    }
}
