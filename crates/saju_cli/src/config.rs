//! `saju.toml` loading.
//!
//! ```toml
//! [cascade]
//! max_day_candidates = 30
//!
//! [oracle]
//! tz_offset_minutes = 540
//! time_precision = "MINUTE"
//!
//! [[oracle.term_days]]
//! year = 2024
//! days = [6, 4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6]
//! ```

use std::path::{Path, PathBuf};

use saju_base::CascadeConfig;
use saju_oracle::OracleConfig;
use serde::Deserialize;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_PATH: &str = "saju.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub cascade: CascadeConfig,
    pub oracle: OracleConfig,
}

impl CliConfig {
    /// Parse and validate; oracle settings are checked when the oracle is built.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(text).map_err(|e| e.to_string())?;
        config.cascade.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Read `path`, or `saju.toml` when present. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        if !explicit && !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let config = Self::from_toml(&text).map_err(|e| format!("{}: {e}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_oracle::TimePrecision;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_tables() {
        let c = CliConfig::from_toml(
            r#"
            [cascade]
            max_day_candidates = 15

            [oracle]
            tz_offset_minutes = 480
            time_precision = "UNKNOWN"

            [[oracle.term_days]]
            year = 2024
            days = [6, 4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6]
            "#,
        )
        .unwrap();
        assert_eq!(c.cascade.max_day_candidates, 15);
        assert_eq!(c.cascade.seed_hour, 12);
        assert_eq!(c.oracle.tz_offset.minutes(), 480);
        assert_eq!(c.oracle.time_precision, TimePrecision::Unknown);
        assert_eq!(c.oracle.term_days.len(), 1);
    }

    #[test]
    fn bad_offset_is_rejected() {
        assert!(CliConfig::from_toml("[oracle]\ntz_offset_minutes = 5000").is_err());
    }

    #[test]
    fn bad_cascade_values_are_rejected() {
        let err = CliConfig::from_toml("[cascade]\nfallback_month = 13").unwrap_err();
        assert!(err.contains("fallback_month"), "{err}");
        assert!(CliConfig::from_toml("[cascade]\ndecade_years = 4294967295").is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = std::env::temp_dir().join("saju-cli-no-config");
        let missing = dir.join("nope.toml");
        assert!(CliConfig::load(Some(&missing)).is_err());
    }
}
