//! Month-opening solar terms and their start days.

use std::collections::BTreeMap;

use saju_base::{Branch, OracleError};
use saju_time::{LocalDateTime, days_in_month};

use crate::config::TermDayOverride;

/// A month-opening term (절기): the calendar month it falls in, its usual
/// start day, and the month branch it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTerm {
    pub month: u32,
    pub day: u32,
    pub branch: Branch,
    pub hangul: &'static str,
    pub hanja: &'static str,
}

const fn term(month: u32, day: u32, branch: Branch, hangul: &'static str, hanja: &'static str) -> MonthTerm {
    MonthTerm {
        month,
        day,
        branch,
        hangul,
        hanja,
    }
}

/// The twelve month-opening terms in calendar order.
pub const MONTH_TERMS: [MonthTerm; 12] = [
    term(1, 6, Branch::Chuk, "소한", "小寒"),
    term(2, 4, Branch::In, "입춘", "立春"),
    term(3, 6, Branch::Myo, "경칩", "驚蟄"),
    term(4, 5, Branch::Jin, "청명", "淸明"),
    term(5, 6, Branch::Sa, "입하", "立夏"),
    term(6, 6, Branch::O, "망종", "芒種"),
    term(7, 7, Branch::Mi, "소서", "小暑"),
    term(8, 8, Branch::Sin, "입추", "立秋"),
    term(9, 8, Branch::Yu, "백로", "白露"),
    term(10, 8, Branch::Sul, "한로", "寒露"),
    term(11, 7, Branch::Hae, "입동", "立冬"),
    term(12, 7, Branch::Ja, "대설", "大雪"),
];

/// Index of 立春 in [`MONTH_TERMS`].
pub const SPRING_TERM: usize = 1;

/// Term start days: the fixed table plus validated per-year overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTable {
    overrides: BTreeMap<i32, [u32; 12]>,
}

impl TermTable {
    /// Build from overrides. Later rows for the same year replace earlier ones.
    pub fn new(overrides: &[TermDayOverride]) -> Result<Self, OracleError> {
        let mut map = BTreeMap::new();
        for row in overrides {
            for (i, &day) in row.days.iter().enumerate() {
                let month = i as u32 + 1;
                if day == 0 || day > days_in_month(row.year, month) {
                    return Err(OracleError::OutOfRange(format!(
                        "term day {day} for {}-{month:02}",
                        row.year
                    )));
                }
            }
            map.insert(row.year, row.days);
        }
        Ok(Self { overrides: map })
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Start day of `term` in `year`.
    pub fn start_day(&self, year: i32, term: &MonthTerm) -> u32 {
        self.overrides
            .get(&year)
            .map_or(term.day, |days| days[term.month as usize - 1])
    }

    /// Local midnight at which `term` begins in `year`.
    pub fn start(&self, year: i32, term: &MonthTerm) -> LocalDateTime {
        LocalDateTime::new(year, term.month, self.start_day(year, term), 0, 0)
    }

    /// The latest term start at or before `local`, with its start time.
    ///
    /// Searches the previous, current, and next year; before every candidate
    /// the earliest one is returned.
    pub fn month_term_at(&self, local: &LocalDateTime) -> (&'static MonthTerm, LocalDateTime) {
        let mut found = (&MONTH_TERMS[0], self.start(local.year - 1, &MONTH_TERMS[0]));
        for year in [local.year - 1, local.year, local.year + 1] {
            for t in &MONTH_TERMS {
                let start = self.start(year, t);
                if start <= *local {
                    found = (t, start);
                } else {
                    return found;
                }
            }
        }
        found
    }
}
