//! Twelve Fates (십이운성): life-cycle stage of a branch relative to the day stem.
//!
//! Each day stem starts its cycle (장생) at a fixed branch. Yang stems walk the
//! branches forward, yin stems walk them backward.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;
use crate::util::cyclic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TwelveFate {
    Jangsaeng,
    Mokyok,
    Gwandae,
    Geonrok,
    Jewang,
    Swoe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

/// Stages in cyclic order, starting from birth.
pub const ALL_TWELVE_FATES: [TwelveFate; 12] = [
    TwelveFate::Jangsaeng,
    TwelveFate::Mokyok,
    TwelveFate::Gwandae,
    TwelveFate::Geonrok,
    TwelveFate::Jewang,
    TwelveFate::Swoe,
    TwelveFate::Byeong,
    TwelveFate::Sa,
    TwelveFate::Myo,
    TwelveFate::Jeol,
    TwelveFate::Tae,
    TwelveFate::Yang,
];

/// Branch index of the 장생 stage, per day-stem index.
const START_BRANCH: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

impl TwelveFate {
    pub const fn index(self) -> u8 {
        match self {
            Self::Jangsaeng => 0,
            Self::Mokyok => 1,
            Self::Gwandae => 2,
            Self::Geonrok => 3,
            Self::Jewang => 4,
            Self::Swoe => 5,
            Self::Byeong => 6,
            Self::Sa => 7,
            Self::Myo => 8,
            Self::Jeol => 9,
            Self::Tae => 10,
            Self::Yang => 11,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Jangsaeng => "JANGSAENG",
            Self::Mokyok => "MOKYOK",
            Self::Gwandae => "GWANDAE",
            Self::Geonrok => "GEONROK",
            Self::Jewang => "JEWANG",
            Self::Swoe => "SWOE",
            Self::Byeong => "BYEONG",
            Self::Sa => "SA",
            Self::Myo => "MYO",
            Self::Jeol => "JEOL",
            Self::Tae => "TAE",
            Self::Yang => "YANG",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Jangsaeng => "장생",
            Self::Mokyok => "목욕",
            Self::Gwandae => "관대",
            Self::Geonrok => "건록",
            Self::Jewang => "제왕",
            Self::Swoe => "쇠",
            Self::Byeong => "병",
            Self::Sa => "사",
            Self::Myo => "묘",
            Self::Jeol => "절",
            Self::Tae => "태",
            Self::Yang => "양",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Jangsaeng => "長生",
            Self::Mokyok => "沐浴",
            Self::Gwandae => "冠帶",
            Self::Geonrok => "建祿",
            Self::Jewang => "帝旺",
            Self::Swoe => "衰",
            Self::Byeong => "病",
            Self::Sa => "死",
            Self::Myo => "墓",
            Self::Jeol => "絶",
            Self::Tae => "胎",
            Self::Yang => "養",
        }
    }
}

/// Branch where `day` enters the 장생 stage.
pub const fn fate_start(day: Stem) -> Branch {
    Branch::wrapping(START_BRANCH[day.index() as usize] as i64)
}

/// Stage of `branch` for day stem `day`.
pub const fn twelve_fate(day: Stem, branch: Branch) -> TwelveFate {
    let start = START_BRANCH[day.index() as usize] as i64;
    let dir: i64 = if day.polarity().is_yang() { 1 } else { -1 };
    let step = cyclic((branch.index() as i64 - start) * dir, 12);
    ALL_TWELVE_FATES[step as usize]
}
