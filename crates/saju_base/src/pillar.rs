//! Pillars: one stem+branch pair per calendar slot.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::glyph::{resolve_branch, resolve_stem, split_pair};
use crate::stem::Stem;
use crate::util::checked_index;

/// A resolved stem/branch pair. Absence is modelled as `Option<Pillar>`, never as a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Build from untrusted integers; `None` unless both are in range.
    pub fn from_indices(stem: i64, branch: i64) -> Option<Self> {
        let s = Stem::from_index(checked_index(stem, 10)?)?;
        let b = Branch::from_index(checked_index(branch, 12)?)?;
        Some(Self::new(s, b))
    }

    /// Build from separate glyphs in either script.
    pub fn from_glyphs(stem: &str, branch: &str) -> Option<Self> {
        Some(Self::new(resolve_stem(stem)?, resolve_branch(branch)?))
    }

    /// Parse a two-glyph pair such as "甲子" or "갑자".
    pub fn parse(pair: &str) -> Option<Self> {
        let (s, b) = split_pair(pair)?;
        Self::from_glyphs(s, b)
    }

    pub fn hangul(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// Calendar slot of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PillarSlot {
    #[serde(rename = "y")]
    Year,
    #[serde(rename = "m")]
    Month,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "h")]
    Hour,
}

/// Calendar order: year, month, day, hour.
pub const ALL_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

/// Traditional right-to-left chart order: hour, day, month, year.
pub const DISPLAY_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Hour,
    PillarSlot::Day,
    PillarSlot::Month,
    PillarSlot::Year,
];

impl PillarSlot {
    /// Single-letter key used in documents (`y`, `m`, `d`, `h`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "m",
            Self::Day => "d",
            Self::Hour => "h",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL_SLOTS.iter().copied().find(|s| s.code() == code)
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Year => "년",
            Self::Month => "월",
            Self::Day => "일",
            Self::Hour => "시",
        }
    }

    /// Label of the slot's pillar (년주, 월주, ...).
    pub const fn pillar_label(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }

    /// Label of the slot's branch (년지, 월지, ...).
    pub const fn branch_label(self) -> &'static str {
        match self {
            Self::Year => "년지",
            Self::Month => "월지",
            Self::Day => "일지",
            Self::Hour => "시지",
        }
    }
}

/// The four pillars of a chart or oracle result; any slot may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Option<Pillar>,
    pub month: Option<Pillar>,
    pub day: Option<Pillar>,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    pub const fn get(&self, slot: PillarSlot) -> Option<Pillar> {
        match slot {
            PillarSlot::Year => self.year,
            PillarSlot::Month => self.month,
            PillarSlot::Day => self.day,
            PillarSlot::Hour => self.hour,
        }
    }

    pub fn set(&mut self, slot: PillarSlot, pillar: Option<Pillar>) {
        match slot {
            PillarSlot::Year => self.year = pillar,
            PillarSlot::Month => self.month = pillar,
            PillarSlot::Day => self.day = pillar,
            PillarSlot::Hour => self.hour = pillar,
        }
    }

    /// Slots in calendar order with their pillars.
    pub fn iter(&self) -> impl Iterator<Item = (PillarSlot, Option<Pillar>)> + '_ {
        ALL_SLOTS.iter().map(move |s| (*s, self.get(*s)))
    }

    /// Present pillars in calendar order.
    pub fn present(&self) -> impl Iterator<Item = (PillarSlot, Pillar)> + '_ {
        self.iter().filter_map(|(s, p)| p.map(|p| (s, p)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_indices_rejects_out_of_range() {
        assert_eq!(
            Pillar::from_indices(0, 0),
            Some(Pillar::new(Stem::Gap, Branch::Ja))
        );
        assert_eq!(Pillar::from_indices(10, 0), None);
        assert_eq!(Pillar::from_indices(0, 12), None);
        assert_eq!(Pillar::from_indices(-1, 3), None);
    }

    #[test]
    fn parse_both_scripts() {
        let p = Pillar::new(Stem::Mu, Branch::O);
        assert_eq!(Pillar::parse("戊午"), Some(p));
        assert_eq!(Pillar::parse("무오"), Some(p));
        assert_eq!(Pillar::parse("戊"), None);
        assert_eq!(Pillar::parse("午戊"), None);
    }

    #[test]
    fn text_forms() {
        let p = Pillar::new(Stem::Gap, Branch::Jin);
        assert_eq!(p.hangul(), "갑진");
        assert_eq!(p.hanja(), "甲辰");
        assert_eq!(p.to_string(), "甲辰");
    }

    #[test]
    fn slot_codes() {
        for s in ALL_SLOTS {
            assert_eq!(PillarSlot::from_code(s.code()), Some(s));
        }
        assert_eq!(PillarSlot::from_code("x"), None);
    }

    #[test]
    fn four_pillars_get_set() {
        let mut fp = FourPillars::default();
        assert!(fp.is_empty());
        fp.set(PillarSlot::Day, Pillar::parse("甲子"));
        assert_eq!(fp.get(PillarSlot::Day), Pillar::parse("甲子"));
        assert_eq!(fp.present().count(), 1);
        assert!(!fp.is_empty());
    }
}
