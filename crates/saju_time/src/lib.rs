//! Civil calendar primitives for pillar derivation.
//!
//! This crate provides:
//! - A timezone-free local date/time (`LocalDateTime`) and its fixed UTC offset (`TzOffset`)
//! - Month length and day clamping helpers used before every oracle call
//! - Conversion between local civil time and unix seconds

pub mod calendar;
pub mod error;
pub mod local_time;
pub mod offset;

pub use calendar::{clamp_day, days_in_month, is_leap_year};
pub use error::TimeError;
pub use local_time::LocalDateTime;
pub use offset::{KST_OFFSET_MINUTES, MAX_OFFSET_MINUTES, TzOffset};
