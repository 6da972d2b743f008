//! Chart assembly: normalize a document into four pillars and a day master.
//!
//! Documents carry pillars either as structured integer records or as a raw
//! glyph-pair record. Both end up as [`FourPillars`]. A pillar whose stem or
//! branch cannot be resolved is left absent rather than defaulted.

use serde::Serialize;
use tracing::warn;

use crate::attributes::{GanjiAttributes, ganji_attributes};
use crate::balance::ElementBalance;
use crate::document::{ChartDocument, GlyphPillars, RawFortunePeriod, RawPillar};
use crate::fortune::{FortunePeriod, FortuneSource};
use crate::glyph::{resolve_stem, split_pair};
use crate::pillar::{ALL_SLOTS, DISPLAY_SLOTS, FourPillars, Pillar, PillarSlot};
use crate::stem::Stem;
use crate::util::checked_index;

/// Day master: the explicit index when it is in `0..10`, else the day stem glyph.
///
/// `None` means unknown. Relational attributes then report unknown too; the
/// first stem is never substituted.
pub fn resolve_day_master(explicit: Option<i64>, day_stem_glyph: Option<&str>) -> Option<Stem> {
    explicit
        .and_then(|v| checked_index(v, 10))
        .and_then(Stem::from_index)
        .or_else(|| day_stem_glyph.and_then(resolve_stem))
}

impl GlyphPillars {
    pub fn get(&self, slot: PillarSlot) -> Option<&str> {
        match slot {
            PillarSlot::Year => self.y.as_deref(),
            PillarSlot::Month => self.m.as_deref(),
            PillarSlot::Day => self.d.as_deref(),
            PillarSlot::Hour => self.h.as_deref(),
        }
    }

    /// Resolve every slot; unparsable pairs stay absent.
    pub fn to_pillars(&self) -> FourPillars {
        let mut out = FourPillars::default();
        for slot in ALL_SLOTS {
            out.set(slot, self.get(slot).and_then(Pillar::parse));
        }
        out
    }
}

/// An assembled chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    pub pillars: FourPillars,
    pub day_master: Option<Stem>,
    pub birth_year: Option<i32>,
    pub fortunes: FortuneSource,
}

impl Chart {
    /// Assemble from a document.
    ///
    /// Structured pillars win; the glyph record only fills slots they leave
    /// empty. Slot keys are case-insensitive and a repeated key overwrites
    /// the earlier one.
    pub fn from_document(doc: &ChartDocument) -> Self {
        let mut pillars = FourPillars::default();
        for raw in doc.pillars.iter().flatten() {
            let Some(slot) = PillarSlot::from_code(&raw.k.trim().to_lowercase()) else {
                warn!(key = %raw.k, "unknown pillar key");
                continue;
            };
            let pillar = match (raw.stem, raw.branch) {
                (Some(s), Some(b)) => Pillar::from_indices(s, b),
                _ => None,
            };
            if pillar.is_none() {
                warn!(slot = slot.code(), stem = ?raw.stem, branch = ?raw.branch, "unresolvable pillar");
            }
            pillars.set(slot, pillar);
        }

        let day_glyph = doc
            .glyphs
            .as_ref()
            .and_then(|g| g.get(PillarSlot::Day))
            .and_then(split_pair)
            .map(|(s, _)| s);
        if let Some(glyphs) = &doc.glyphs {
            let parsed = glyphs.to_pillars();
            for slot in ALL_SLOTS {
                if pillars.get(slot).is_none() {
                    pillars.set(slot, parsed.get(slot));
                }
            }
        }

        let day_master = resolve_day_master(doc.day_master, day_glyph)
            .or_else(|| pillars.day.map(|p| p.stem));
        if doc.day_master.is_some_and(|v| checked_index(v, 10).is_none()) {
            warn!(day_master = ?doc.day_master, "day master index out of range");
        }

        Self {
            pillars,
            day_master,
            birth_year: doc.birth_year.filter(|y| *y > 0),
            fortunes: FortuneSource::from_document(doc),
        }
    }

    /// Assemble from a bare glyph record. The day master comes from the day pillar.
    pub fn from_glyphs(glyphs: &GlyphPillars) -> Self {
        let pillars = glyphs.to_pillars();
        Self {
            pillars,
            day_master: pillars.day.map(|p| p.stem),
            ..Self::default()
        }
    }

    /// Document form of the chart, readable by [`Chart::from_document`].
    ///
    /// Empty period lists are written as absent so readers synthesize them.
    pub fn to_document(&self) -> ChartDocument {
        let raw_list = |list: &[FortunePeriod]| -> Option<Vec<RawFortunePeriod>> {
            (!list.is_empty()).then(|| list.iter().map(RawFortunePeriod::from).collect())
        };
        let current = &self.fortunes.current;
        ChartDocument {
            day_master: self.day_master.map(|s| i64::from(s.index())),
            pillars: Some(
                self.pillars
                    .present()
                    .map(|(slot, p)| RawPillar {
                        k: slot.code().to_uppercase(),
                        stem: Some(i64::from(p.stem.index())),
                        branch: Some(i64::from(p.branch.index())),
                    })
                    .collect(),
            ),
            glyphs: None,
            birth_year: self.birth_year,
            daeun: current.decade.as_ref().map(RawFortunePeriod::from),
            seun: current.year.as_ref().map(RawFortunePeriod::from),
            wolun: current.month.as_ref().map(RawFortunePeriod::from),
            ilun: current.day.as_ref().map(RawFortunePeriod::from),
            daeun_list: raw_list(&self.fortunes.decades),
            seun_list: raw_list(&self.fortunes.years),
            wolun_list: raw_list(&self.fortunes.months),
            ilun_list: raw_list(&self.fortunes.days),
        }
    }

    pub fn balance(&self) -> ElementBalance {
        ElementBalance::from_pillars(&self.pillars)
    }

    /// One detail row per slot in `order`.
    pub fn details(&self, order: PillarOrder) -> Vec<PillarDetail> {
        order
            .slots()
            .iter()
            .map(|&slot| {
                let pillar = self.pillars.get(slot);
                PillarDetail {
                    slot,
                    pillar,
                    attributes: pillar.map(|p| ganji_attributes(p, self.day_master)),
                }
            })
            .collect()
    }
}

/// Display-ready row for one chart slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarDetail {
    pub slot: PillarSlot,
    pub pillar: Option<Pillar>,
    pub attributes: Option<GanjiAttributes>,
}

impl PillarDetail {
    /// `본원` for the day stem, else the stem's Ten God, else `-`.
    pub fn stem_role(&self) -> &'static str {
        if self.slot == PillarSlot::Day && self.pillar.is_some() {
            return "본원";
        }
        self.attributes
            .as_ref()
            .and_then(|a| a.stem.ten_god)
            .map_or("-", |t| t.hangul())
    }

    pub fn branch_role(&self) -> &'static str {
        self.attributes
            .as_ref()
            .and_then(|a| a.branch.ten_god)
            .map_or("-", |t| t.hangul())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PillarOrder {
    /// Year, month, day, hour.
    #[default]
    Calendar,
    /// Hour, day, month, year.
    Display,
}

impl PillarOrder {
    pub const fn slots(self) -> &'static [PillarSlot; 4] {
        match self {
            Self::Calendar => &ALL_SLOTS,
            Self::Display => &DISPLAY_SLOTS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Script {
    #[default]
    Hangul,
    Hanja,
}

/// `년 갑자 · 월 병인 · ...`, skipping absent pillars.
pub fn format_pillars_text(pillars: &FourPillars, order: PillarOrder, script: Script) -> String {
    order
        .slots()
        .iter()
        .filter_map(|&slot| {
            let p = pillars.get(slot)?;
            let text = match script {
                Script::Hangul => p.hangul(),
                Script::Hanja => p.hanja(),
            };
            Some(format!("{} {text}", slot.hangul()))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}
