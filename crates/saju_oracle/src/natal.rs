//! Natal charts: base pillars plus decade and current fortune periods.
//!
//! Decades step from the month pillar, forward or backward through the
//! sexagenary cycle depending on the year stem's polarity and sex. Each
//! decade spans ten ages; the first begins at age 1.

use saju_base::{
    Chart, CurrentPeriods, FortuneKind, FortunePeriod, FortuneSource, OracleError, OraclePillars,
    Pillar, PillarOracle, Stem, pick_current_decade,
};
use saju_base::{Branch, Polarity};
use saju_time::{LocalDateTime, days_in_month};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_DECADE_COUNT: u32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Self::Male),
            "F" | "FEMALE" => Ok(Self::Female),
            "U" | "UNKNOWN" => Ok(Self::Unknown),
            other => Err(format!("unknown sex: {other}")),
        }
    }
}

/// Forward for a yang year with a male subject or a yin year with a female
/// subject. Unknown sex follows the year's polarity.
pub const fn is_forward(year_stem: Stem, sex: Sex) -> bool {
    let yang = matches!(year_stem.polarity(), Polarity::Yang);
    match sex {
        Sex::Male | Sex::Unknown => yang,
        Sex::Female => !yang,
    }
}

/// Decade periods stepping from `month` through the cycle.
///
/// The list ends early once an age or start year would leave `i32`.
pub fn decade_periods(
    year_stem: Stem,
    month: Pillar,
    sex: Sex,
    birth_year: i32,
    count: u32,
) -> Vec<FortunePeriod> {
    let dir: i64 = if is_forward(year_stem, sex) { 1 } else { -1 };
    (1..=count)
        .map_while(|order| {
            let shift = dir * i64::from(order);
            let age_from = i32::try_from(order - 1).ok()?.checked_mul(10)?.checked_add(1)?;
            let age_to = age_from.checked_add(9)?;
            let start_year = birth_year.checked_add(age_from)?;
            Some(FortunePeriod {
                order: Some(order),
                pillar: Some(Pillar::new(
                    Stem::wrapping(i64::from(month.stem.index()) + shift),
                    Branch::wrapping(i64::from(month.branch.index()) + shift),
                )),
                age_from: Some(age_from),
                age_to: Some(age_to),
                start_year: Some(start_year),
                year: Some(start_year),
                ..FortunePeriod::empty(FortuneKind::Decade)
            })
        })
        .collect()
}

/// Most years one request may list.
pub const MAX_YEAR_LIST: i32 = 30;

/// Explicit year, month, and day lists to compute alongside a natal chart.
///
/// Every field is optional; an empty request leaves those levels for the
/// cascade to synthesize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FortuneListRequest {
    /// First year of the year list. Alone, the list ends at the base year.
    pub years_from: Option<i32>,
    /// Last year of the year list. Alone, the list starts at the base year.
    pub years_to: Option<i32>,
    /// Year whose 12 months are listed.
    pub months_of: Option<i32>,
    /// Year and month whose days are listed. Both or neither.
    pub days_of_year: Option<i32>,
    pub days_of_month: Option<u32>,
}

impl FortuneListRequest {
    /// Inclusive year range, ordered and capped at [`MAX_YEAR_LIST`] years.
    pub fn year_range(&self, base_year: i32) -> Result<Option<(i32, i32)>, OracleError> {
        if self.years_from.is_none() && self.years_to.is_none() {
            return Ok(None);
        }
        let from = self.years_from.unwrap_or(base_year);
        let to = self.years_to.unwrap_or(base_year);
        if from <= 0 || to <= 0 {
            return Err(OracleError::InvalidRequest(format!(
                "year list bounds must be positive: {from}..{to}"
            )));
        }
        let (from, to) = if from > to { (to, from) } else { (from, to) };
        let to = if to - from >= MAX_YEAR_LIST { from + (MAX_YEAR_LIST - 1) } else { to };
        Ok(Some((from, to)))
    }

    pub fn month_year(&self) -> Result<Option<i32>, OracleError> {
        match self.months_of {
            Some(y) if y <= 0 => Err(OracleError::InvalidRequest(format!("month list year must be positive: {y}"))),
            other => Ok(other),
        }
    }

    pub fn day_month(&self) -> Result<Option<(i32, u32)>, OracleError> {
        match (self.days_of_year, self.days_of_month) {
            (None, None) => Ok(None),
            (Some(y), Some(m)) => {
                if y <= 0 {
                    return Err(OracleError::InvalidRequest(format!("day list year must be positive: {y}")));
                }
                if !(1..=12).contains(&m) {
                    return Err(OracleError::InvalidRequest(format!("day list month must be in 1..=12: {m}")));
                }
                Ok(Some((y, m)))
            }
            _ => Err(OracleError::InvalidRequest(
                "day list year and month are required together".into(),
            )),
        }
    }
}

/// Birth moment and options for [`natal_chart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NatalRequest {
    pub birth: LocalDateTime,
    pub sex: Sex,
    /// Reference moment for the current periods; the birth moment when absent.
    pub base: Option<LocalDateTime>,
    pub decade_count: u32,
    pub lists: FortuneListRequest,
}

impl NatalRequest {
    pub const fn new(birth: LocalDateTime) -> Self {
        Self {
            birth,
            sex: Sex::Unknown,
            base: None,
            decade_count: DEFAULT_DECADE_COUNT,
            lists: FortuneListRequest {
                years_from: None,
                years_to: None,
                months_of: None,
                days_of_year: None,
                days_of_month: None,
            },
        }
    }
}

fn current_periods(base: &OraclePillars, decade: Option<&FortunePeriod>) -> CurrentPeriods {
    let l = base.local;
    let period = |kind: FortuneKind, month: Option<u32>, day: Option<u32>| FortunePeriod {
        pillar: base.get(kind.source_slot()),
        start_year: Some(l.year),
        year: Some(l.year),
        month,
        day,
        ..FortunePeriod::empty(kind)
    };
    CurrentPeriods {
        decade: decade.cloned(),
        year: Some(period(FortuneKind::Year, None, None)),
        month: Some(period(FortuneKind::Month, Some(l.month), None)),
        day: Some(period(FortuneKind::Day, Some(l.month), Some(l.day))),
    }
}

/// One batch of seeds patched onto the base moment, keeping `kind`'s column.
///
/// A failed seed leaves its period unresolved.
fn listed_periods<O: PillarOracle + ?Sized>(
    oracle: &O,
    kind: FortuneKind,
    seeds: Vec<LocalDateTime>,
) -> Vec<FortunePeriod> {
    let slot = kind.source_slot();
    let mut results = oracle.compute_batch(&seeds).into_iter();
    seeds
        .into_iter()
        .map(|seed| {
            let pillar = match results.next() {
                Some(Ok(r)) => r.get(slot),
                Some(Err(e)) => {
                    warn!(kind = kind.code(), %seed, error = %e, "listed period left unresolved");
                    None
                }
                None => None,
            };
            FortunePeriod {
                pillar,
                start_year: Some(seed.year),
                year: Some(seed.year),
                ..FortunePeriod::empty(kind)
            }
        })
        .collect()
}

fn patched(base: &LocalDateTime, year: i32, month: u32, day: u32) -> LocalDateTime {
    LocalDateTime::new(year, month, day, base.hour, base.minute).with_clamped_day()
}

/// Chart for a birth moment with its decade list and current periods.
///
/// Year, month, and day lists are computed only when `req.lists` asks for
/// them; otherwise they stay empty for the cascade to synthesize. Each listed
/// seed keeps the base moment's fields that the list does not vary.
pub fn natal_chart<O: PillarOracle + ?Sized>(oracle: &O, req: &NatalRequest) -> Result<Chart, OracleError> {
    let month_year = req.lists.month_year()?;
    let day_month = req.lists.day_month()?;
    let birth = oracle.compute_pillars(&req.birth)?;
    let base = match req.base {
        Some(b) => oracle.compute_pillars(&b)?,
        None => birth,
    };
    let year_range = req.lists.year_range(base.local.year)?;
    let l = base.local;

    let years = match year_range {
        Some((from, to)) => {
            let seeds = (from..=to).map(|y| patched(&l, y, l.month, l.day)).collect();
            listed_periods(oracle, FortuneKind::Year, seeds)
        }
        None => Vec::new(),
    };
    let months = match month_year {
        Some(y) => {
            let seeds = (1..=12).map(|m| patched(&l, y, m, l.day)).collect();
            let mut list = listed_periods(oracle, FortuneKind::Month, seeds);
            for (p, m) in list.iter_mut().zip(1u32..) {
                p.month = Some(m);
            }
            list
        }
        None => Vec::new(),
    };
    let days = match day_month {
        Some((y, m)) => {
            let seeds = (1..=days_in_month(y, m)).map(|d| patched(&l, y, m, d)).collect();
            let mut list = listed_periods(oracle, FortuneKind::Day, seeds);
            for (p, d) in list.iter_mut().zip(1u32..) {
                p.month = Some(m);
                p.day = Some(d);
            }
            list
        }
        None => Vec::new(),
    };

    let decades = match (birth.pillars.year, birth.pillars.month) {
        (Some(y), Some(m)) => decade_periods(y.stem, m, req.sex, req.birth.year, req.decade_count),
        _ => {
            warn!(birth = %req.birth, "no year or month pillar, decades omitted");
            Vec::new()
        }
    };
    let current_decade = pick_current_decade(&decades, req.birth.year, base.local.year);
    debug!(
        decades = decades.len(),
        years = years.len(),
        months = months.len(),
        days = days.len(),
        current = ?current_decade.and_then(|d| d.order),
        "natal chart assembled"
    );
    let current = current_periods(&base, current_decade);

    Ok(Chart {
        pillars: birth.pillars,
        day_master: birth.day_stem(),
        birth_year: Some(req.birth.year),
        fortunes: FortuneSource {
            decades,
            years,
            months,
            days,
            current,
        },
    })
}
