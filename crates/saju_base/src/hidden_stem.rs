//! Hidden stems (지장간): stems latently present inside each branch.
//!
//! Entries are ordered by descending weight; weights per branch sum to 100.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;
use crate::ten_god::{TenGod, stem_ten_god};

/// One hidden stem and its weight within the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenStemEntry {
    pub stem: Stem,
    pub ratio_percent: u8,
}

/// A hidden stem with its Ten God against a day master, when one is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedHiddenStem {
    pub stem: Stem,
    pub ratio_percent: u8,
    pub ten_god: Option<TenGod>,
}

const fn e(stem: Stem, ratio_percent: u8) -> HiddenStemEntry {
    HiddenStemEntry {
        stem,
        ratio_percent,
    }
}

const JA: [HiddenStemEntry; 1] = [e(Stem::Gye, 100)];
const CHUK: [HiddenStemEntry; 3] = [e(Stem::Gi, 60), e(Stem::Gye, 30), e(Stem::Sin, 10)];
const IN: [HiddenStemEntry; 3] = [e(Stem::Gap, 60), e(Stem::Byeong, 30), e(Stem::Mu, 10)];
const MYO: [HiddenStemEntry; 1] = [e(Stem::Eul, 100)];
const JIN: [HiddenStemEntry; 3] = [e(Stem::Mu, 60), e(Stem::Eul, 30), e(Stem::Gye, 10)];
const SA: [HiddenStemEntry; 3] = [e(Stem::Byeong, 60), e(Stem::Mu, 30), e(Stem::Gyeong, 10)];
const O: [HiddenStemEntry; 2] = [e(Stem::Jeong, 70), e(Stem::Gi, 30)];
const MI: [HiddenStemEntry; 3] = [e(Stem::Gi, 60), e(Stem::Jeong, 30), e(Stem::Eul, 10)];
const SIN: [HiddenStemEntry; 3] = [e(Stem::Gyeong, 60), e(Stem::Im, 30), e(Stem::Mu, 10)];
const YU: [HiddenStemEntry; 1] = [e(Stem::Sin, 100)];
const SUL: [HiddenStemEntry; 3] = [e(Stem::Mu, 60), e(Stem::Sin, 30), e(Stem::Jeong, 10)];
const HAE: [HiddenStemEntry; 2] = [e(Stem::Im, 70), e(Stem::Gap, 30)];

/// Composition per branch, indexed by [`Branch::index`].
pub const HIDDEN_STEM_TABLE: [&[HiddenStemEntry]; 12] =
    [&JA, &CHUK, &IN, &MYO, &JIN, &SA, &O, &MI, &SIN, &YU, &SUL, &HAE];

/// Hidden stems of `branch`, heaviest first.
pub const fn hidden_stems(branch: Branch) -> &'static [HiddenStemEntry] {
    HIDDEN_STEM_TABLE[branch.index() as usize]
}

/// Hidden stems annotated with their Ten God relative to `day_master`.
pub fn annotated_hidden_stems(branch: Branch, day_master: Option<Stem>) -> Vec<AnnotatedHiddenStem> {
    hidden_stems(branch)
        .iter()
        .map(|h| AnnotatedHiddenStem {
            stem: h.stem,
            ratio_percent: h.ratio_percent,
            ten_god: day_master.map(|d| stem_ten_god(d, h.stem)),
        })
        .collect()
}

/// The heaviest hidden stem (본기).
pub fn principal_hidden_stem(branch: Branch) -> Stem {
    // Every row is non-empty and sorted.
    hidden_stems(branch)[0].stem
}
