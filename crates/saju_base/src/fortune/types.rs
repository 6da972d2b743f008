//! Fortune period value types.

use serde::{Deserialize, Serialize};

use crate::attributes::{GanjiAttributes, ganji_attributes};
use crate::document::{ChartDocument, RawFortunePeriod};
use crate::pillar::{Pillar, PillarSlot};
use crate::stem::Stem;

/// Level of a fortune period in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FortuneKind {
    /// 대운, ten-year luck.
    Decade,
    /// 세운
    Year,
    /// 월운
    Month,
    /// 일운
    Day,
}

pub const ALL_FORTUNE_KINDS: [FortuneKind; 4] = [
    FortuneKind::Decade,
    FortuneKind::Year,
    FortuneKind::Month,
    FortuneKind::Day,
];

impl FortuneKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Decade => "DAEUN",
            Self::Year => "SEUN",
            Self::Month => "WOLUN",
            Self::Day => "ILUN",
        }
    }

    /// Case-insensitive match on the document code.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_FORTUNE_KINDS
            .iter()
            .copied()
            .find(|k| k.code().eq_ignore_ascii_case(code.trim()))
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Decade => "대운",
            Self::Year => "세운",
            Self::Month => "월운",
            Self::Day => "일운",
        }
    }

    /// Oracle column a synthesized period of this kind takes its pillar from.
    pub const fn source_slot(self) -> PillarSlot {
        match self {
            Self::Decade | Self::Year => PillarSlot::Year,
            Self::Month => PillarSlot::Month,
            Self::Day => PillarSlot::Day,
        }
    }
}

impl std::fmt::Display for FortuneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One fortune period. Immutable; recomputed whenever its parent selection changes.
///
/// Numeric fields only ever hold positive values (months 1..=12, days 1..=31).
/// `pillar` is `None` when the source pillar was unresolvable or the oracle
/// failed for this candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortunePeriod {
    pub kind: FortuneKind,
    pub order: Option<u32>,
    pub pillar: Option<Pillar>,
    pub age_from: Option<i32>,
    pub age_to: Option<i32>,
    pub start_year: Option<i32>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

pub(crate) fn positive(v: Option<i64>) -> Option<i32> {
    v.filter(|x| *x > 0).and_then(|x| i32::try_from(x).ok())
}

fn in_range(v: Option<i64>, max: i64) -> Option<u32> {
    v.filter(|x| (1..=max).contains(x)).map(|x| x as u32)
}

impl FortunePeriod {
    /// An empty period of the given kind.
    pub const fn empty(kind: FortuneKind) -> Self {
        Self {
            kind,
            order: None,
            pillar: None,
            age_from: None,
            age_to: None,
            start_year: None,
            year: None,
            month: None,
            day: None,
        }
    }

    /// Normalize a document period. The pillar comes from the integer indices,
    /// else the separate glyphs, else the combined ganji text.
    pub fn from_raw(kind: FortuneKind, raw: &RawFortunePeriod) -> Self {
        let from_indices = match (raw.stem, raw.branch) {
            (Some(s), Some(b)) => Pillar::from_indices(s, b),
            _ => None,
        };
        let from_glyphs = || {
            let stem = raw.stem_hanja.as_deref().or(raw.stem_ko.as_deref())?;
            let branch = raw.branch_hanja.as_deref().or(raw.branch_ko.as_deref())?;
            Pillar::from_glyphs(stem, branch)
        };
        let from_ganji = || {
            raw.ganji_hanja
                .as_deref()
                .and_then(Pillar::parse)
                .or_else(|| raw.ganji_ko.as_deref().and_then(Pillar::parse))
        };
        let pillar = from_indices.or_else(from_glyphs).or_else(from_ganji);
        if pillar.is_none() && (raw.stem.is_some() || raw.ganji_hanja.is_some() || raw.ganji_ko.is_some()) {
            tracing::warn!(
                kind = kind.code(),
                stem = ?raw.stem,
                branch = ?raw.branch,
                "unresolvable fortune pillar"
            );
        }
        Self {
            kind,
            order: positive(raw.order).map(|o| o as u32),
            pillar,
            age_from: positive(raw.age_from),
            age_to: positive(raw.age_to),
            start_year: positive(raw.start_year),
            year: positive(raw.year),
            month: in_range(raw.month, 12),
            day: in_range(raw.day, 31),
        }
    }

    pub const fn is_resolved(&self) -> bool {
        self.pillar.is_some()
    }

    /// `year`, falling back to `start_year`.
    pub fn calendar_year(&self) -> Option<i32> {
        self.year.or(self.start_year)
    }

    /// Attribute bundle relative to the chart's day master.
    pub fn attributes(&self, day_master: Option<Stem>) -> Option<GanjiAttributes> {
        self.pillar.map(|p| ganji_attributes(p, day_master))
    }
}

impl From<&FortunePeriod> for RawFortunePeriod {
    /// Document form with both index and glyph fields filled.
    fn from(p: &FortunePeriod) -> Self {
        let wide = |v: Option<i32>| v.map(i64::from);
        let wide_u = |v: Option<u32>| v.map(i64::from);
        Self {
            kind: Some(p.kind.code().to_string()),
            order: wide_u(p.order),
            stem: p.pillar.map(|x| i64::from(x.stem.index())),
            branch: p.pillar.map(|x| i64::from(x.branch.index())),
            stem_ko: p.pillar.map(|x| x.stem.hangul().to_string()),
            stem_hanja: p.pillar.map(|x| x.stem.hanja().to_string()),
            branch_ko: p.pillar.map(|x| x.branch.hangul().to_string()),
            branch_hanja: p.pillar.map(|x| x.branch.hanja().to_string()),
            ganji_ko: p.pillar.map(|x| x.hangul()),
            ganji_hanja: p.pillar.map(|x| x.hanja()),
            age_from: wide(p.age_from),
            age_to: wide(p.age_to),
            start_year: wide(p.start_year),
            year: wide(p.year),
            month: wide_u(p.month),
            day: wide_u(p.day),
        }
    }
}

/// The "current" period per level, as stated by the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentPeriods {
    pub decade: Option<FortunePeriod>,
    pub year: Option<FortunePeriod>,
    pub month: Option<FortunePeriod>,
    pub day: Option<FortunePeriod>,
}

impl CurrentPeriods {
    pub fn get(&self, kind: FortuneKind) -> Option<&FortunePeriod> {
        match kind {
            FortuneKind::Decade => self.decade.as_ref(),
            FortuneKind::Year => self.year.as_ref(),
            FortuneKind::Month => self.month.as_ref(),
            FortuneKind::Day => self.day.as_ref(),
        }
    }
}

/// Everything the document says about fortune periods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FortuneSource {
    pub decades: Vec<FortunePeriod>,
    pub years: Vec<FortunePeriod>,
    pub months: Vec<FortunePeriod>,
    pub days: Vec<FortunePeriod>,
    pub current: CurrentPeriods,
}

impl FortuneSource {
    pub fn from_document(doc: &ChartDocument) -> Self {
        let list = |kind: FortuneKind, raw: &Option<Vec<RawFortunePeriod>>| -> Vec<FortunePeriod> {
            raw.as_deref()
                .unwrap_or_default()
                .iter()
                .map(|r| FortunePeriod::from_raw(kind, r))
                .collect()
        };
        let one = |kind: FortuneKind, raw: &Option<RawFortunePeriod>| {
            raw.as_ref().map(|r| FortunePeriod::from_raw(kind, r))
        };
        Self {
            decades: list(FortuneKind::Decade, &doc.daeun_list),
            years: list(FortuneKind::Year, &doc.seun_list),
            months: list(FortuneKind::Month, &doc.wolun_list),
            days: list(FortuneKind::Day, &doc.ilun_list),
            current: CurrentPeriods {
                decade: one(FortuneKind::Decade, &doc.daeun),
                year: one(FortuneKind::Year, &doc.seun),
                month: one(FortuneKind::Month, &doc.wolun),
                day: one(FortuneKind::Day, &doc.ilun),
            },
        }
    }

    /// Document-supplied list for a level (possibly empty).
    pub fn list(&self, kind: FortuneKind) -> &[FortunePeriod] {
        match kind {
            FortuneKind::Decade => &self.decades,
            FortuneKind::Year => &self.years,
            FortuneKind::Month => &self.months,
            FortuneKind::Day => &self.days,
        }
    }
}
