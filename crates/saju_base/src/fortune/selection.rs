//! Four-level selection state with downstream reset.
//!
//! [`FortuneCascade`] owns the candidate lists and the selection. Choosing a
//! candidate at one level recomputes every deeper level and points each of
//! them at its first candidate (or at nothing when a level is empty).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cascade::CascadeGenerator;
use super::config::CascadeConfig;
use super::filter::{display_items, filter_days_by_month, filter_months_by_year, filter_years_by_decade};
use super::types::{FortuneKind, FortunePeriod, FortuneSource};
use crate::error::SajuError;
use crate::oracle::PillarOracle;
use crate::stem::Stem;

/// A cascade level, shallowest first.
pub type CascadeLevel = FortuneKind;

/// Selected index per level; `None` means the level has no candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeSelection {
    pub decade: Option<usize>,
    pub year: Option<usize>,
    pub month: Option<usize>,
    pub day: Option<usize>,
}

impl CascadeSelection {
    pub const fn get(&self, level: CascadeLevel) -> Option<usize> {
        match level {
            FortuneKind::Decade => self.decade,
            FortuneKind::Year => self.year,
            FortuneKind::Month => self.month,
            FortuneKind::Day => self.day,
        }
    }

    fn slot(&mut self, level: CascadeLevel) -> &mut Option<usize> {
        match level {
            FortuneKind::Decade => &mut self.decade,
            FortuneKind::Year => &mut self.year,
            FortuneKind::Month => &mut self.month,
            FortuneKind::Day => &mut self.day,
        }
    }
}

/// Keep a still-valid index, else point at the first candidate, else nothing.
fn normalize(sel: Option<usize>, len: usize) -> Option<usize> {
    match sel {
        _ if len == 0 => None,
        Some(i) if i < len => Some(i),
        _ => Some(0),
    }
}

/// Candidate lists and selection for one chart view.
pub struct FortuneCascade<'a, O: PillarOracle + ?Sized> {
    generator: CascadeGenerator<'a, O>,
    source: FortuneSource,
    selection: CascadeSelection,
    decades: Vec<FortunePeriod>,
    years: Vec<FortunePeriod>,
    months: Vec<FortunePeriod>,
    days: Vec<FortunePeriod>,
}

impl<'a, O: PillarOracle + ?Sized> FortuneCascade<'a, O> {
    /// Build every level from scratch; the first decade (if any) is selected.
    pub fn new(source: FortuneSource, oracle: &'a O, config: CascadeConfig) -> Self {
        let mut cascade = Self {
            generator: CascadeGenerator::new(oracle, config),
            source,
            selection: CascadeSelection::default(),
            decades: Vec::new(),
            years: Vec::new(),
            months: Vec::new(),
            days: Vec::new(),
        };
        cascade.rebuild();
        cascade
    }

    /// Replace the document behind the cascade. Full reset, nothing carried over.
    pub fn reset(&mut self, source: FortuneSource) {
        self.source = source;
        self.selection = CascadeSelection::default();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.decades = display_items(&self.source.decades, self.source.current.decade.as_ref());
        self.selection.decade = normalize(None, self.decades.len());
        self.refresh_years();
    }

    pub const fn selection(&self) -> CascadeSelection {
        self.selection
    }

    pub fn source(&self) -> &FortuneSource {
        &self.source
    }

    /// Current candidates at `level`.
    pub fn candidates(&self, level: CascadeLevel) -> &[FortunePeriod] {
        match level {
            FortuneKind::Decade => &self.decades,
            FortuneKind::Year => &self.years,
            FortuneKind::Month => &self.months,
            FortuneKind::Day => &self.days,
        }
    }

    /// The selected candidate at `level`.
    pub fn selected(&self, level: CascadeLevel) -> Option<&FortunePeriod> {
        self.selection
            .get(level)
            .and_then(|i| self.candidates(level).get(i))
    }

    pub fn select_decade(&mut self, index: usize) -> Result<(), SajuError> {
        self.select(FortuneKind::Decade, index)
    }

    pub fn select_year(&mut self, index: usize) -> Result<(), SajuError> {
        self.select(FortuneKind::Year, index)
    }

    pub fn select_month(&mut self, index: usize) -> Result<(), SajuError> {
        self.select(FortuneKind::Month, index)
    }

    pub fn select_day(&mut self, index: usize) -> Result<(), SajuError> {
        self.select(FortuneKind::Day, index)
    }

    /// Select `index` at `level`; deeper levels go back to their first candidate.
    pub fn select(&mut self, level: CascadeLevel, index: usize) -> Result<(), SajuError> {
        let len = self.candidates(level).len();
        if index >= len {
            return Err(SajuError::SelectionOutOfRange { level, index, len });
        }
        *self.selection.slot(level) = Some(index);
        debug!(%level, index, "cascade selection");
        match level {
            FortuneKind::Decade => {
                self.selection.year = Some(0);
                self.selection.month = Some(0);
                self.selection.day = Some(0);
                self.refresh_years();
            }
            FortuneKind::Year => {
                self.selection.month = Some(0);
                self.selection.day = Some(0);
                self.refresh_months();
            }
            FortuneKind::Month => {
                self.selection.day = Some(0);
                self.refresh_days();
            }
            FortuneKind::Day => {}
        }
        Ok(())
    }

    fn refresh_years(&mut self) {
        let decade = self.selected(FortuneKind::Decade).cloned();
        let supplied = &self.source.years;
        let base = if supplied.is_empty() {
            let generated = self.generator.years_for_decade(decade.as_ref(), &self.source.current);
            display_items(&generated, self.source.current.year.as_ref())
        } else {
            supplied.clone()
        };
        self.years = filter_years_by_decade(&base, decade.as_ref());
        self.selection.year = normalize(self.selection.year, self.years.len());
        debug!(count = self.years.len(), "year candidates");
        self.refresh_months();
    }

    fn refresh_months(&mut self) {
        let year = self.selected(FortuneKind::Year).cloned();
        let supplied = &self.source.months;
        let base = if supplied.is_empty() {
            let seed = year.as_ref().or(self.source.current.year.as_ref());
            let generated = self.generator.months_for_year(seed, &self.source.current);
            display_items(&generated, self.source.current.month.as_ref())
        } else {
            supplied.clone()
        };
        self.months = filter_months_by_year(&base, year.as_ref());
        self.selection.month = normalize(self.selection.month, self.months.len());
        debug!(count = self.months.len(), "month candidates");
        self.refresh_days();
    }

    fn refresh_days(&mut self) {
        let month = self.selected(FortuneKind::Month).cloned();
        let supplied = &self.source.days;
        let base = if supplied.is_empty() {
            let seed = month.as_ref().or(self.source.current.month.as_ref());
            let generated = self.generator.days_for_month(seed);
            display_items(&generated, self.source.current.day.as_ref())
        } else {
            supplied.clone()
        };
        self.days = filter_days_by_month(&base, month.as_ref());
        self.selection.day = normalize(self.selection.day, self.days.len());
        debug!(count = self.days.len(), "day candidates");
    }

    /// Attribute bundle of the selected period at `level`, relative to `day_master`.
    pub fn selected_attributes(
        &self,
        level: CascadeLevel,
        day_master: Option<Stem>,
    ) -> Option<crate::attributes::GanjiAttributes> {
        self.selected(level).and_then(|p| p.attributes(day_master))
    }
}
