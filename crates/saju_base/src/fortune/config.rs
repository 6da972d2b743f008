//! Cascade tuning knobs.

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Longest year list one decade may synthesize.
pub const MAX_DECADE_YEARS: u32 = 100;

/// Parameters for synthesizing year, month, and day periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Year candidates generated under one decade.
    pub decade_years: u32,
    /// Upper bound on day candidates per month.
    pub max_day_candidates: u32,
    /// Local wall-clock time used for every seed date.
    pub seed_hour: u32,
    pub seed_minute: u32,
    /// Month used for year seeds when no finer period supplies one.
    pub fallback_month: u32,
    /// Day used for year and month seeds when no day period supplies one.
    pub fallback_day: u32,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            decade_years: 10,
            max_day_candidates: 30,
            seed_hour: 12,
            seed_minute: 0,
            fallback_month: 1,
            fallback_day: 1,
        }
    }
}

impl CascadeConfig {
    /// Reject values the generator would have to clamp or could not seed.
    pub fn validate(&self) -> Result<(), SajuError> {
        if !(1..=MAX_DECADE_YEARS).contains(&self.decade_years) {
            return Err(SajuError::InvalidConfig("decade_years must be in 1..=100"));
        }
        if !(1..=31).contains(&self.max_day_candidates) {
            return Err(SajuError::InvalidConfig("max_day_candidates must be in 1..=31"));
        }
        if self.seed_hour > 23 || self.seed_minute > 59 {
            return Err(SajuError::InvalidConfig("seed_hour/seed_minute must be a wall-clock time"));
        }
        if !(1..=12).contains(&self.fallback_month) {
            return Err(SajuError::InvalidConfig("fallback_month must be in 1..=12"));
        }
        if !(1..=31).contains(&self.fallback_day) {
            return Err(SajuError::InvalidConfig("fallback_day must be in 1..=31"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = CascadeConfig::default();
        assert_eq!(c.decade_years, 10);
        assert_eq!(c.max_day_candidates, 30);
        assert_eq!(c.seed_hour, 12);
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(CascadeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn out_of_range_values_rejected() {
        let bad = [
            CascadeConfig { decade_years: 0, ..CascadeConfig::default() },
            CascadeConfig { decade_years: u32::MAX, ..CascadeConfig::default() },
            CascadeConfig { max_day_candidates: 0, ..CascadeConfig::default() },
            CascadeConfig { seed_hour: 24, ..CascadeConfig::default() },
            CascadeConfig { seed_minute: 60, ..CascadeConfig::default() },
            CascadeConfig { fallback_month: 13, ..CascadeConfig::default() },
            CascadeConfig { fallback_day: 0, ..CascadeConfig::default() },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(SajuError::InvalidConfig(_))), "{c:?}");
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: CascadeConfig = serde_json::from_str(r#"{"seed_hour": 6}"#).unwrap();
        assert_eq!(c.seed_hour, 6);
        assert_eq!(c.decade_years, 10);
    }
}
