//! Local civil date/time at minute precision.
//!
//! `LocalDateTime` carries no zone; it is interpreted against a [`TzOffset`]
//! only when converted to or from unix seconds.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::clamp_day;
use crate::error::TimeError;
use crate::offset::TzOffset;

const PARSE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Local calendar date and wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalDateTime {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// 12:00 on the given date.
    pub const fn noon(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 12, 0)
    }

    /// Same instant with the day pulled into the month's valid range.
    pub const fn with_clamped_day(self) -> Self {
        Self {
            day: clamp_day(self.year, self.month, self.day),
            ..self
        }
    }

    /// Midnight of the same date.
    pub const fn start_of_day(self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            ..self
        }
    }

    /// Parse `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm`, or a bare `YYYY-MM-DD` (midnight).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        for fmt in PARSE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self::from_naive(dt));
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Ok(Self::new(d.year(), d.month(), d.day(), 0, 0)),
            Err(e) => Err(TimeError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .ok_or(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
                hour: self.hour,
                minute: self.minute,
            })
    }

    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }

    /// Unix seconds of this wall-clock time in the given offset.
    pub fn to_unix_seconds(&self, offset: TzOffset) -> Result<i64, TimeError> {
        Ok(self.to_naive()?.and_utc().timestamp() - offset.seconds())
    }

    /// Wall-clock time in the given offset at unix second `ts`.
    pub fn from_unix_seconds(ts: i64, offset: TzOffset) -> Result<Self, TimeError> {
        let shifted = ts
            .checked_add(offset.seconds())
            .ok_or(TimeError::TimestampOutOfRange(ts))?;
        chrono::DateTime::from_timestamp(shifted, 0)
            .map(|dt| Self::from_naive(dt.naive_utc()))
            .ok_or(TimeError::TimestampOutOfRange(ts))
    }

    /// Whole calendar days from `other`'s date to this date (time of day ignored).
    pub fn days_since(&self, other: &Self) -> Result<i64, TimeError> {
        let a = self.to_naive()?.date();
        let b = other.to_naive()?.date();
        Ok(a.signed_duration_since(b).num_days())
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_forms() {
        let a = LocalDateTime::parse("2024-03-05T07:30").unwrap();
        let b = LocalDateTime::parse("2024-03-05 07:30").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, LocalDateTime::new(2024, 3, 5, 7, 30));
        let c = LocalDateTime::parse("2024-03-05").unwrap();
        assert_eq!(c, LocalDateTime::new(2024, 3, 5, 0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            LocalDateTime::parse("yesterday"),
            Err(TimeError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_date_is_error() {
        let t = LocalDateTime::new(2023, 2, 30, 12, 0);
        assert!(matches!(t.to_naive(), Err(TimeError::InvalidDate { .. })));
        assert_eq!(t.with_clamped_day().day, 28);
    }

    #[test]
    fn unix_round_trip_kst() {
        let t = LocalDateTime::new(2024, 2, 4, 0, 0);
        let ts = t.to_unix_seconds(TzOffset::KST).unwrap();
        // 2024-02-03T15:00:00Z
        assert_eq!(ts, 1_706_972_400);
        assert_eq!(LocalDateTime::from_unix_seconds(ts, TzOffset::KST).unwrap(), t);
    }

    #[test]
    fn days_since_ignores_time() {
        let a = LocalDateTime::new(2000, 1, 1, 23, 59);
        let b = LocalDateTime::new(1999, 12, 31, 0, 0);
        assert_eq!(a.days_since(&b).unwrap(), 1);
    }

    #[test]
    fn display_format() {
        assert_eq!(
            LocalDateTime::noon(2024, 3, 5).to_string(),
            "2024-03-05 12:00"
        );
    }
}
