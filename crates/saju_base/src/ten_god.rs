//! Ten Gods (십성): the relation of any stem or branch to the day master.
//!
//! The element distance `(target - day) mod 5` picks one of five pairs
//! (peer, output, wealth, officer, resource). Same polarity picks the first
//! member of the pair, opposite polarity the second.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::stem::Stem;
use crate::util::cyclic;

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenGod {
    Bigyeon,
    Geobjae,
    Sikshin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geobjae,
    TenGod::Sikshin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

/// (same polarity, opposite polarity) per element distance.
const TEN_GOD_PAIRS: [(TenGod, TenGod); 5] = [
    (TenGod::Bigyeon, TenGod::Geobjae),
    (TenGod::Sikshin, TenGod::Sanggwan),
    (TenGod::Pyeonjae, TenGod::Jeongjae),
    (TenGod::Pyeongwan, TenGod::Jeonggwan),
    (TenGod::Pyeonin, TenGod::Jeongin),
];

/// The five pair groups, ordered by element distance from the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGodGroup {
    /// Same element.
    Peer,
    /// Element the day master generates.
    Output,
    /// Element the day master controls.
    Wealth,
    /// Element controlling the day master.
    Officer,
    /// Element generating the day master.
    Resource,
}

impl TenGodGroup {
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Peer => "비겁",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Officer => "관성",
            Self::Resource => "인성",
        }
    }
}

impl TenGod {
    /// Uppercase code used in chart documents.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bigyeon => "BIGYEON",
            Self::Geobjae => "GEOBJAE",
            Self::Sikshin => "SIKSHIN",
            Self::Sanggwan => "SANGGWAN",
            Self::Pyeonjae => "PYEONJAE",
            Self::Jeongjae => "JEONGJAE",
            Self::Pyeongwan => "PYEONGWAN",
            Self::Jeonggwan => "JEONGGWAN",
            Self::Pyeonin => "PYEONIN",
            Self::Jeongin => "JEONGIN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL_TEN_GODS.iter().copied().find(|t| t.code() == code)
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geobjae => "겁재",
            Self::Sikshin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geobjae => "劫財",
            Self::Sikshin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Bigyeon => "Companion",
            Self::Geobjae => "Rob Wealth",
            Self::Sikshin => "Eating God",
            Self::Sanggwan => "Hurting Officer",
            Self::Pyeonjae => "Indirect Wealth",
            Self::Jeongjae => "Direct Wealth",
            Self::Pyeongwan => "Seven Killings",
            Self::Jeonggwan => "Direct Officer",
            Self::Pyeonin => "Indirect Resource",
            Self::Jeongin => "Direct Resource",
        }
    }

    pub const fn group(self) -> TenGodGroup {
        match self {
            Self::Bigyeon | Self::Geobjae => TenGodGroup::Peer,
            Self::Sikshin | Self::Sanggwan => TenGodGroup::Output,
            Self::Pyeonjae | Self::Jeongjae => TenGodGroup::Wealth,
            Self::Pyeongwan | Self::Jeonggwan => TenGodGroup::Officer,
            Self::Pyeonin | Self::Jeongin => TenGodGroup::Resource,
        }
    }
}

/// Ten God of a target with the given element and polarity.
pub const fn ten_god_by_target(day: Stem, target: Element, polarity: Polarity) -> TenGod {
    let diff = cyclic(target.index() as i64 - day.element().index() as i64, 5);
    let pair = TEN_GOD_PAIRS[diff as usize];
    if day.polarity().is_yang() == polarity.is_yang() {
        pair.0
    } else {
        pair.1
    }
}

pub const fn stem_ten_god(day: Stem, stem: Stem) -> TenGod {
    ten_god_by_target(day, stem.element(), stem.polarity())
}

/// Uses the branch's own element and index parity.
pub const fn branch_ten_god(day: Stem, branch: Branch) -> TenGod {
    ten_god_by_target(day, branch.element(), branch.polarity())
}
