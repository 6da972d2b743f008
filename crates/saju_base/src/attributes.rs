//! Display-ready attribute bundles for a pillar.
//!
//! Renderers consume these instead of re-deriving from raw indices. Every
//! relational field is `None` when the day master is unknown.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::hidden_stem::{AnnotatedHiddenStem, annotated_hidden_stems};
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::ten_god::{TenGod, branch_ten_god, stem_ten_god};
use crate::twelve_fate::{TwelveFate, twelve_fate};

/// One glyph (stem or branch) with its fixed and relational attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphAttributes {
    pub index: u8,
    pub hangul: &'static str,
    pub hanja: &'static str,
    pub element: Element,
    pub polarity: Polarity,
    pub ten_god: Option<TenGod>,
}

impl GlyphAttributes {
    pub fn of_stem(stem: Stem, day_master: Option<Stem>) -> Self {
        Self {
            index: stem.index(),
            hangul: stem.hangul(),
            hanja: stem.hanja(),
            element: stem.element(),
            polarity: stem.polarity(),
            ten_god: day_master.map(|d| stem_ten_god(d, stem)),
        }
    }

    pub fn of_branch(branch: Branch, day_master: Option<Stem>) -> Self {
        Self {
            index: branch.index(),
            hangul: branch.hangul(),
            hanja: branch.hanja(),
            element: branch.element(),
            polarity: branch.polarity(),
            ten_god: day_master.map(|d| branch_ten_god(d, branch)),
        }
    }
}

/// Everything a renderer shows for one pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanjiAttributes {
    pub pillar: Pillar,
    pub ganji_hangul: String,
    pub ganji_hanja: String,
    pub stem: GlyphAttributes,
    pub branch: GlyphAttributes,
    pub twelve_fate: Option<TwelveFate>,
    pub hidden_stems: Vec<AnnotatedHiddenStem>,
    pub nayin: Option<&'static str>,
    pub void_branches: Option<[Branch; 2]>,
}

pub fn ganji_attributes(pillar: Pillar, day_master: Option<Stem>) -> GanjiAttributes {
    GanjiAttributes {
        pillar,
        ganji_hangul: pillar.hangul(),
        ganji_hanja: pillar.hanja(),
        stem: GlyphAttributes::of_stem(pillar.stem, day_master),
        branch: GlyphAttributes::of_branch(pillar.branch, day_master),
        twelve_fate: day_master.map(|d| twelve_fate(d, pillar.branch)),
        hidden_stems: annotated_hidden_stems(pillar.branch, day_master),
        nayin: pillar.nayin(),
        void_branches: pillar.void_branches(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_day_master_leaves_relations_empty() {
        let a = ganji_attributes(Pillar::new(Stem::Gap, Branch::In), None);
        assert_eq!(a.stem.ten_god, None);
        assert_eq!(a.branch.ten_god, None);
        assert_eq!(a.twelve_fate, None);
        assert!(a.hidden_stems.iter().all(|h| h.ten_god.is_none()));
        assert_eq!(a.ganji_hangul, "갑인");
        assert_eq!(a.nayin, Some("大溪水"));
    }

    #[test]
    fn known_day_master_fills_relations() {
        let a = ganji_attributes(Pillar::new(Stem::Gap, Branch::In), Some(Stem::Gap));
        assert_eq!(a.stem.ten_god, Some(TenGod::Bigyeon));
        assert_eq!(a.branch.ten_god, Some(TenGod::Bigyeon));
        assert_eq!(a.twelve_fate, Some(TwelveFate::Geonrok));
        assert_eq!(a.stem.element, Element::Wood);
        assert_eq!(a.branch.polarity, Polarity::Yang);
    }
}
