//! Synthesis of year, month, and day periods through a pillar oracle.
//!
//! Each level issues one batched oracle call holding one seed per candidate.
//! A failed seed leaves its candidate unresolved (`pillar: None`) and the
//! rest of the list intact, so synthesized levels always have their full
//! length: `decade_years` years, 12 months, and up to `max_day_candidates` days.

use saju_time::{LocalDateTime, days_in_month};
use tracing::{debug, warn};

use super::config::CascadeConfig;
use super::types::{CurrentPeriods, FortuneKind, FortunePeriod};
use crate::oracle::PillarOracle;
use crate::pillar::Pillar;

/// Builds child period lists from a selected parent.
pub struct CascadeGenerator<'a, O: PillarOracle + ?Sized> {
    oracle: &'a O,
    config: CascadeConfig,
}

impl<'a, O: PillarOracle + ?Sized> CascadeGenerator<'a, O> {
    pub fn new(oracle: &'a O, config: CascadeConfig) -> Self {
        Self { oracle, config }
    }

    pub const fn config(&self) -> &CascadeConfig {
        &self.config
    }

    fn seed(&self, year: i32, month: u32, day: u32) -> LocalDateTime {
        LocalDateTime::new(year, month, day, self.config.seed_hour, self.config.seed_minute)
            .with_clamped_day()
    }

    /// First valid month among the candidates, else the configured fallback.
    fn month_hint(&self, candidates: &[Option<u32>]) -> u32 {
        candidates
            .iter()
            .flatten()
            .copied()
            .find(|m| (1..=12).contains(m))
            .unwrap_or(self.config.fallback_month)
    }

    fn day_hint(&self, candidate: Option<u32>) -> u32 {
        candidate
            .filter(|d| (1..=31).contains(d))
            .unwrap_or(self.config.fallback_day)
    }

    /// Run one batch and pull `kind`'s column out of each result.
    fn resolve(&self, kind: FortuneKind, seeds: &[LocalDateTime]) -> Vec<Option<Pillar>> {
        let slot = kind.source_slot();
        let mut results = self.oracle.compute_batch(seeds).into_iter();
        seeds
            .iter()
            .map(|seed| match results.next() {
                Some(Ok(r)) => r.get(slot),
                Some(Err(e)) => {
                    warn!(kind = kind.code(), %seed, error = %e, "oracle failed, candidate left unresolved");
                    None
                }
                None => {
                    warn!(kind = kind.code(), %seed, "oracle returned too few results");
                    None
                }
            })
            .collect()
    }

    /// Year periods for the decade starting at the decade's start year.
    ///
    /// The seed year comes from the decade (`start_year`, then `year`), else
    /// from the current year period. Seed month and day come from the finest
    /// current period that has them. Empty when no year can be found.
    pub fn years_for_decade(&self, decade: Option<&FortunePeriod>, current: &CurrentPeriods) -> Vec<FortunePeriod> {
        let start = decade
            .and_then(|d| d.start_year.or(d.year))
            .or_else(|| current.year.as_ref().and_then(|y| y.year));
        let Some(start) = start else {
            debug!("no seed year for year periods");
            return Vec::new();
        };
        let month = self.month_hint(&[
            current.month.as_ref().and_then(|p| p.month),
            current.day.as_ref().and_then(|p| p.month),
            current.year.as_ref().and_then(|p| p.month),
        ]);
        let day = self.day_hint(current.day.as_ref().and_then(|p| p.day));
        let age_base = decade.and_then(|d| d.age_from);

        // The list stops early rather than wrap past the last representable year.
        let n = i32::try_from(self.config.decade_years).unwrap_or(i32::MAX);
        let years: Vec<i32> = (0..n).map_while(|off| start.checked_add(off)).collect();
        let seeds: Vec<LocalDateTime> = years.iter().map(|&y| self.seed(y, month, day)).collect();
        let pillars = self.resolve(FortuneKind::Year, &seeds);
        debug!(start, count = pillars.len(), "synthesized year periods");

        years
            .into_iter()
            .zip(pillars)
            .zip(0i32..)
            .map(|((y, pillar), off)| {
                let age = age_base.and_then(|a| a.checked_add(off));
                FortunePeriod {
                    order: u32::try_from(off).ok().map(|o| o + 1),
                    pillar,
                    age_from: age,
                    age_to: age,
                    start_year: Some(y),
                    year: Some(y),
                    ..FortunePeriod::empty(FortuneKind::Year)
                }
            })
            .collect()
    }

    /// The 12 month periods of the year period's calendar year.
    pub fn months_for_year(&self, year: Option<&FortunePeriod>, current: &CurrentPeriods) -> Vec<FortunePeriod> {
        let Some(y) = year.and_then(FortunePeriod::calendar_year) else {
            debug!("no seed year for month periods");
            return Vec::new();
        };
        let day = self.day_hint(current.day.as_ref().and_then(|p| p.day));
        let seeds: Vec<LocalDateTime> = (1..=12).map(|m| self.seed(y, m, day)).collect();
        let pillars = self.resolve(FortuneKind::Month, &seeds);
        debug!(year = y, count = pillars.len(), "synthesized month periods");

        pillars
            .into_iter()
            .zip(1u32..)
            .map(|(pillar, m)| FortunePeriod {
                order: Some(m),
                pillar,
                start_year: Some(y),
                year: Some(y),
                month: Some(m),
                ..FortunePeriod::empty(FortuneKind::Month)
            })
            .collect()
    }

    /// Day periods of the month period's month, capped at `max_day_candidates`.
    pub fn days_for_month(&self, month: Option<&FortunePeriod>) -> Vec<FortunePeriod> {
        let Some(y) = month.and_then(FortunePeriod::calendar_year) else {
            debug!("no seed year for day periods");
            return Vec::new();
        };
        let m = self.month_hint(&[month.and_then(|p| p.month)]);
        let total = days_in_month(y, m).min(self.config.max_day_candidates).max(1);
        let seeds: Vec<LocalDateTime> = (1..=total).map(|d| self.seed(y, m, d)).collect();
        let pillars = self.resolve(FortuneKind::Day, &seeds);
        debug!(year = y, month = m, count = pillars.len(), "synthesized day periods");

        pillars
            .into_iter()
            .zip(1u32..)
            .map(|(pillar, d)| FortunePeriod {
                order: Some(d),
                pillar,
                start_year: Some(y),
                year: Some(y),
                month: Some(m),
                day: Some(d),
                ..FortunePeriod::empty(FortuneKind::Day)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;
    use crate::oracle::{FnOracle, OraclePillars};
    use crate::pillar::FourPillars;
    use crate::sexagenary::pillar_from_cycle;
    use std::cell::RefCell;

    /// Year column keyed by year, month column by month, day column by day.
    fn fake(seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        Ok(OraclePillars {
            local: *seed,
            pillars: FourPillars {
                year: Some(pillar_from_cycle(seed.year as i64 - 4)),
                month: Some(pillar_from_cycle(seed.month as i64)),
                day: Some(pillar_from_cycle(seed.day as i64)),
                hour: None,
            },
        })
    }

    fn decade(age_from: i32, start_year: i32) -> FortunePeriod {
        FortunePeriod {
            age_from: Some(age_from),
            age_to: Some(age_from + 9),
            start_year: Some(start_year),
            ..FortunePeriod::empty(FortuneKind::Decade)
        }
    }

    #[test]
    fn ten_years_from_decade() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let years = g.years_for_decade(Some(&decade(20, 2000)), &CurrentPeriods::default());
        assert_eq!(years.len(), 10);
        for (i, y) in years.iter().enumerate() {
            assert_eq!(y.age_from, Some(20 + i as i32));
            assert_eq!(y.age_to, y.age_from);
            assert_eq!(y.year, Some(2000 + i as i32));
            assert_eq!(y.start_year, y.year);
            assert_eq!(y.order, Some(i as u32 + 1));
            assert_eq!(y.pillar, Some(pillar_from_cycle(1996 + i as i64)));
        }
        assert_eq!(years[0].pillar, Pillar::parse("庚辰"));
    }

    #[test]
    fn year_seed_uses_finer_hints_at_noon() {
        let seen = RefCell::new(Vec::new());
        let oracle = FnOracle(|s: &LocalDateTime| {
            seen.borrow_mut().push(*s);
            fake(s)
        });
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let current = CurrentPeriods {
            month: Some(FortunePeriod {
                month: Some(2),
                ..FortunePeriod::empty(FortuneKind::Month)
            }),
            day: Some(FortunePeriod {
                day: Some(30),
                ..FortunePeriod::empty(FortuneKind::Day)
            }),
            ..CurrentPeriods::default()
        };
        g.years_for_decade(Some(&decade(1, 2023)), &current);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 10);
        // Feb 30 clamps per year.
        assert_eq!(seen[0], LocalDateTime::new(2023, 2, 28, 12, 0));
        assert_eq!(seen[1], LocalDateTime::new(2024, 2, 29, 12, 0));
    }

    #[test]
    fn year_falls_back_to_current_year() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let current = CurrentPeriods {
            year: Some(FortunePeriod {
                year: Some(2030),
                ..FortunePeriod::empty(FortuneKind::Year)
            }),
            ..CurrentPeriods::default()
        };
        let years = g.years_for_decade(None, &current);
        assert_eq!(years.len(), 10);
        assert_eq!(years[0].year, Some(2030));
        assert_eq!(years[0].age_from, None);
    }

    #[test]
    fn no_seed_year_gives_empty() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        assert!(g.years_for_decade(None, &CurrentPeriods::default()).is_empty());
        assert!(g.months_for_year(None, &CurrentPeriods::default()).is_empty());
        assert!(g.days_for_month(None).is_empty());
        let undated = FortunePeriod::empty(FortuneKind::Decade);
        assert!(g.years_for_decade(Some(&undated), &CurrentPeriods::default()).is_empty());
    }

    #[test]
    fn twelve_months_use_month_column() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let y = FortunePeriod {
            start_year: Some(2024),
            ..FortunePeriod::empty(FortuneKind::Year)
        };
        let months = g.months_for_year(Some(&y), &CurrentPeriods::default());
        assert_eq!(months.len(), 12);
        for (i, m) in months.iter().enumerate() {
            assert_eq!(m.month, Some(i as u32 + 1));
            assert_eq!(m.year, Some(2024));
            assert_eq!(m.pillar, Some(pillar_from_cycle(i as i64 + 1)));
        }
    }

    #[test]
    fn days_capped_and_clamped() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let month = |y, m| FortunePeriod {
            year: Some(y),
            month: Some(m),
            ..FortunePeriod::empty(FortuneKind::Month)
        };
        assert_eq!(g.days_for_month(Some(&month(2024, 1))).len(), 30);
        assert_eq!(g.days_for_month(Some(&month(2024, 2))).len(), 29);
        assert_eq!(g.days_for_month(Some(&month(2023, 2))).len(), 28);
        let days = g.days_for_month(Some(&month(2024, 4)));
        assert_eq!(days.len(), 30);
        assert_eq!(days[29].day, Some(30));
        assert_eq!(days[29].pillar, Some(pillar_from_cycle(30)));
    }

    #[test]
    fn day_month_defaults_to_january() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let y_only = FortunePeriod {
            year: Some(2023),
            ..FortunePeriod::empty(FortuneKind::Month)
        };
        let days = g.days_for_month(Some(&y_only));
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].month, Some(1));
    }

    #[test]
    fn year_list_stops_at_last_representable_year() {
        let oracle = FnOracle(fake);
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let years = g.years_for_decade(Some(&decade(1, i32::MAX - 2)), &CurrentPeriods::default());
        assert_eq!(years.len(), 3);
        assert_eq!(years[2].year, Some(i32::MAX));
        assert_eq!(years[2].age_from, Some(3));

        let old = FortunePeriod {
            age_from: Some(i32::MAX),
            ..decade(1, 2000)
        };
        let years = g.years_for_decade(Some(&old), &CurrentPeriods::default());
        assert_eq!(years.len(), 10);
        assert_eq!(years[0].age_from, Some(i32::MAX));
        assert_eq!(years[1].age_from, None);
    }

    #[test]
    fn failure_marks_single_candidate() {
        let oracle = FnOracle(|s: &LocalDateTime| {
            if s.year == 2003 {
                Err(OracleError::Unavailable("down".into()))
            } else {
                fake(s)
            }
        });
        let g = CascadeGenerator::new(&oracle, CascadeConfig::default());
        let years = g.years_for_decade(Some(&decade(20, 2000)), &CurrentPeriods::default());
        assert_eq!(years.len(), 10);
        assert!(!years[3].is_resolved());
        assert_eq!(years[3].year, Some(2003));
        assert_eq!(years.iter().filter(|y| y.is_resolved()).count(), 9);
    }
}
