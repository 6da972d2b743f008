//! Oracle configuration.

use saju_time::TzOffset;
use serde::{Deserialize, Serialize};

/// How precisely the birth time is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimePrecision {
    #[default]
    Minute,
    Hour,
    /// Time of day unknown: no hour pillar.
    Unknown,
}

impl TimePrecision {
    pub const fn has_hour(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::str::FromStr for TimePrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown time precision: {other}")),
        }
    }
}

/// Term start days (1-based day of month, January first) for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDayOverride {
    pub year: i32,
    pub days: [u32; 12],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Offset used to turn unix instants into local time, in minutes east of UTC.
    #[serde(rename = "tz_offset_minutes")]
    pub tz_offset: TzOffset,
    pub time_precision: TimePrecision,
    pub term_days: Vec<TermDayOverride>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            tz_offset: TzOffset::KST,
            time_precision: TimePrecision::Minute,
            term_days: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_kst_minute() {
        let c: OracleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, OracleConfig::default());
        assert_eq!(c.tz_offset.minutes(), 540);
        assert!(c.time_precision.has_hour());
    }

    #[test]
    fn offset_is_validated_on_load() {
        let ok: OracleConfig =
            serde_json::from_str(r#"{"tz_offset_minutes": -300, "time_precision": "UNKNOWN"}"#).unwrap();
        assert_eq!(ok.tz_offset.minutes(), -300);
        assert!(!ok.time_precision.has_hour());
        assert!(serde_json::from_str::<OracleConfig>(r#"{"tz_offset_minutes": 1200}"#).is_err());
    }

    #[test]
    fn precision_from_str() {
        assert_eq!("HOUR".parse::<TimePrecision>(), Ok(TimePrecision::Hour));
        assert!("second".parse::<TimePrecision>().is_err());
    }
}
