//! Pillars from fixed term start days.
//!
//! - Year: changes at 立春 local midnight; before it the previous year's pillar applies.
//! - Month: branch of the latest month-opening term; stem from the year stem's 寅-month seed.
//! - Day: sexagenary day count from 1984-02-02 (甲子 minus two).
//! - Hour: two-hour branches starting at 23:00; stem from the day stem.

use saju_base::{
    Branch, FourPillars, OracleError, OraclePillars, Pillar, PillarOracle, Stem,
};
use saju_time::LocalDateTime;
use tracing::{debug, trace};

use crate::config::{OracleConfig, TimePrecision};
use crate::terms::{MONTH_TERMS, SPRING_TERM, TermTable};

/// Day-count origin.
const DAY_ANCHOR: LocalDateTime = LocalDateTime::new(1984, 2, 2, 0, 0);

/// Cycle position of [`DAY_ANCHOR`].
const DAY_CYCLE_OFFSET: i64 = 2;

/// Stem of the 寅 month, by year stem.
const MONTH_STEM_SEED: [u8; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];

/// Supported calendar years (one year of margin for the term search).
const MIN_YEAR: i32 = 2;
const MAX_YEAR: i32 = 9998;

/// Start times of the periods a result fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub spring_start: LocalDateTime,
    pub month_term_start: LocalDateTime,
    pub day_start: LocalDateTime,
}

#[derive(Debug, Clone)]
pub struct FixedTermOracle {
    config: OracleConfig,
    terms: TermTable,
}

impl FixedTermOracle {
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let terms = TermTable::new(&config.term_days)?;
        debug!(
            tz = %config.tz_offset,
            precision = ?config.time_precision,
            overrides = terms.len(),
            "fixed-term oracle ready"
        );
        Ok(Self { config, terms })
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn with_precision(mut self, precision: TimePrecision) -> Self {
        self.config.time_precision = precision;
        self
    }

    /// Year pillar and the 立春 start of `local`'s calendar year.
    pub fn year_pillar(&self, local: &LocalDateTime) -> (Pillar, LocalDateTime) {
        let spring = self.terms.start(local.year, &MONTH_TERMS[SPRING_TERM]);
        let cycle_year = if *local >= spring { local.year } else { local.year - 1 };
        let n = i64::from(cycle_year) - 4;
        (Pillar::new(Stem::wrapping(n), Branch::wrapping(n)), spring)
    }

    /// Month pillar for a year stem, and the start of its term.
    pub fn month_pillar(&self, local: &LocalDateTime, year_stem: Stem) -> (Pillar, LocalDateTime) {
        let (term, start) = self.terms.month_term_at(local);
        let order = (i64::from(term.branch.index()) - 2).rem_euclid(12);
        let seed = i64::from(MONTH_STEM_SEED[year_stem.index() as usize]);
        (Pillar::new(Stem::wrapping(seed + order), term.branch), start)
    }

    pub fn day_pillar(&self, local: &LocalDateTime) -> Result<Pillar, OracleError> {
        let n = local.days_since(&DAY_ANCHOR)? + DAY_CYCLE_OFFSET;
        Ok(Pillar::new(Stem::wrapping(n), Branch::wrapping(n)))
    }

    /// Hour pillar; 23:00 already belongs to the next 子 period of the same day.
    pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
        let branch = ((hour as i64 + 1) / 2).rem_euclid(12);
        let stem = day_stem.index() as i64 * 2 + branch;
        Pillar::new(Stem::wrapping(stem), Branch::wrapping(branch))
    }

    /// Pillars and period boundaries at a local moment.
    pub fn compute_detailed(&self, local: &LocalDateTime) -> Result<(OraclePillars, Boundaries), OracleError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&local.year) {
            return Err(OracleError::OutOfRange(local.to_string()));
        }
        local.to_naive()?;
        trace!(%local, "computing pillars");

        let (year, spring_start) = self.year_pillar(local);
        let (month, month_term_start) = self.month_pillar(local, year.stem);
        let day = self.day_pillar(local)?;
        let hour = self
            .config
            .time_precision
            .has_hour()
            .then(|| Self::hour_pillar(day.stem, local.hour));

        let pillars = OraclePillars {
            local: *local,
            pillars: FourPillars {
                year: Some(year),
                month: Some(month),
                day: Some(day),
                hour,
            },
        };
        let bounds = Boundaries {
            spring_start,
            month_term_start,
            day_start: local.start_of_day(),
        };
        Ok((pillars, bounds))
    }

    /// Pillars at a unix instant, read in the configured offset.
    pub fn compute_at_unix(&self, ts: i64) -> Result<OraclePillars, OracleError> {
        let local = LocalDateTime::from_unix_seconds(ts, self.config.tz_offset)?;
        self.compute_pillars(&local)
    }
}

impl PillarOracle for FixedTermOracle {
    fn compute_pillars(&self, seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        self.compute_detailed(seed).map(|(p, _)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> FixedTermOracle {
        FixedTermOracle::new(OracleConfig::default()).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> FourPillars {
        oracle()
            .compute_pillars(&LocalDateTime::new(y, m, d, h, 0))
            .unwrap()
            .pillars
    }

    fn p(s: &str) -> Option<Pillar> {
        Pillar::parse(s)
    }

    #[test]
    fn anchor_days() {
        assert_eq!(at(1984, 2, 2, 12).day, p("丙寅"));
        assert_eq!(at(1984, 1, 31, 12).day, p("甲子"));
        assert_eq!(at(2000, 1, 1, 12).day, p("戊午"));
    }

    #[test]
    fn year_turns_at_spring() {
        assert_eq!(at(2024, 2, 3, 23).year, p("癸卯"));
        assert_eq!(at(2024, 2, 4, 0).year, p("甲辰"));
        assert_eq!(at(2024, 2, 10, 12).year, p("甲辰"));
        assert_eq!(at(1984, 6, 1, 12).year, p("甲子"));
    }

    #[test]
    fn month_stems_follow_year_stem() {
        // 甲 and 己 years open with 丙寅.
        assert_eq!(at(2024, 2, 10, 12).month, p("丙寅"));
        assert_eq!(at(2029, 2, 10, 12).month, p("丙寅"));
        // 癸卯 year, 丑 month before spring 2024.
        assert_eq!(at(2024, 1, 20, 12).month, p("乙丑"));
        assert_eq!(at(2023, 12, 20, 12).month, p("甲子"));
        assert_eq!(at(2024, 3, 6, 0).month, p("丁卯"));
    }

    #[test]
    fn hour_pillars() {
        assert_eq!(FixedTermOracle::hour_pillar(Stem::Gap, 0), Pillar::new(Stem::Gap, Branch::Ja));
        assert_eq!(FixedTermOracle::hour_pillar(Stem::Gap, 1), Pillar::new(Stem::Eul, Branch::Chuk));
        assert_eq!(FixedTermOracle::hour_pillar(Stem::Gap, 12), Pillar::new(Stem::Gyeong, Branch::O));
        assert_eq!(FixedTermOracle::hour_pillar(Stem::Gap, 23), Pillar::new(Stem::Gap, Branch::Ja));
        assert_eq!(FixedTermOracle::hour_pillar(Stem::Mu, 12), Pillar::new(Stem::Mu, Branch::O));
    }

    #[test]
    fn unknown_precision_omits_hour() {
        let o = oracle().with_precision(TimePrecision::Unknown);
        let r = o.compute_pillars(&LocalDateTime::noon(2000, 1, 1)).unwrap();
        assert_eq!(r.pillars.hour, None);
        assert!(r.pillars.day.is_some());
    }

    #[test]
    fn invalid_dates_are_errors() {
        let o = oracle();
        assert!(matches!(
            o.compute_pillars(&LocalDateTime::noon(2023, 2, 30)),
            Err(OracleError::Time(_))
        ));
        assert!(matches!(
            o.compute_pillars(&LocalDateTime::noon(1, 6, 1)),
            Err(OracleError::OutOfRange(_))
        ));
    }

    #[test]
    fn unix_instants_use_configured_offset() {
        let o = oracle();
        // 2024-02-03 15:00 UTC is 2024-02-04 00:00 KST.
        let r = o.compute_at_unix(1_706_972_400).unwrap();
        assert_eq!(r.local, LocalDateTime::new(2024, 2, 4, 0, 0));
        assert_eq!(r.pillars.year, p("甲辰"));
        assert_eq!(r.pillars.month, p("丙寅"));
    }

    #[test]
    fn boundaries_reported() {
        let (_, b) = oracle()
            .compute_detailed(&LocalDateTime::new(2024, 5, 20, 15, 30))
            .unwrap();
        assert_eq!(b.spring_start, LocalDateTime::new(2024, 2, 4, 0, 0));
        assert_eq!(b.month_term_start, LocalDateTime::new(2024, 5, 6, 0, 0));
        assert_eq!(b.day_start, LocalDateTime::new(2024, 5, 20, 0, 0));
    }
}
