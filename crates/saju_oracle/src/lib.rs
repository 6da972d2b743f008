//! Reference pillar oracle for the saju engine.
//!
//! This crate provides:
//! - `FixedTermOracle`: pillars from a fixed table of solar-term start days
//! - `CachedOracle`: memoizes any oracle by local timestamp
//! - Natal charts: base pillars, decade periods, and current periods for a birth moment,
//!   plus year, month, and day lists on request
//!
//! Term boundaries fall at local midnight of a fixed day per month, with
//! optional per-year overrides. This matches day-level almanacs but not the
//! minute-exact astronomical term times.

pub mod cache;
pub mod config;
pub mod fixed_term;
pub mod natal;
pub mod terms;

pub use cache::CachedOracle;
pub use config::{OracleConfig, TermDayOverride, TimePrecision};
pub use fixed_term::FixedTermOracle;
pub use natal::{
    DEFAULT_DECADE_COUNT, FortuneListRequest, MAX_YEAR_LIST, NatalRequest, Sex, decade_periods, is_forward,
    natal_chart,
};
pub use terms::{MONTH_TERMS, MonthTerm, TermTable};
