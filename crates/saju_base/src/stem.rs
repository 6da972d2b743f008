//! The ten heavenly stems (천간).
//!
//! Stems alternate yang/yin and pair up per element: 甲乙 Wood, 丙丁 Fire,
//! 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::glyph::GlyphInfo;

/// The 10 stems, starting from 甲 (Gap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
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

/// All 10 stems in order (0 = 甲, 9 = 癸).
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

const fn info(hangul: &'static str, hanja: &'static str, element: Element, index: u8) -> GlyphInfo {
    GlyphInfo {
        hangul,
        hanja,
        element,
        polarity: Polarity::of_index(index),
    }
}

/// Glyphs, element and polarity per stem, indexed by [`Stem::index`].
pub const STEM_TABLE: [GlyphInfo; 10] = [
    info("갑", "甲", Element::Wood, 0),
    info("을", "乙", Element::Wood, 1),
    info("병", "丙", Element::Fire, 2),
    info("정", "丁", Element::Fire, 3),
    info("무", "戊", Element::Earth, 4),
    info("기", "己", Element::Earth, 5),
    info("경", "庚", Element::Metal, 6),
    info("신", "辛", Element::Metal, 7),
    info("임", "壬", Element::Water, 8),
    info("계", "癸", Element::Water, 9),
];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
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

    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_STEMS.len() {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Stem at `value` mod 10.
    pub const fn wrapping(value: i64) -> Self {
        ALL_STEMS[crate::util::cyclic(value, 10) as usize]
    }

    pub const fn info(self) -> &'static GlyphInfo {
        &STEM_TABLE[self.index() as usize]
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
}

impl From<Stem> for u8 {
    fn from(s: Stem) -> Self {
        s.index()
    }
}

impl TryFrom<u8> for Stem {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or_else(|| format!("stem index out of range: {value}"))
    }
}
