//! Fortune periods and the decade → year → month → day cascade.
//!
//! Decades always come from the chart document. Each finer level is taken
//! from the document when it carries a list, otherwise synthesized from the
//! selected parent by querying a [`crate::PillarOracle`] once per candidate.
//! Lists are then filtered against the selected parent and exposed through
//! [`FortuneCascade`], which owns the four-level selection.

pub mod cascade;
pub mod config;
pub mod current;
pub mod display;
pub mod filter;
pub mod selection;
pub mod types;

pub use cascade::CascadeGenerator;
pub use config::{CascadeConfig, MAX_DECADE_YEARS};
pub use current::pick_current_decade;
pub use display::{format_fortune_date, format_fortune_preview, format_fortune_summary};
pub use filter::{display_items, filter_days_by_month, filter_months_by_year, filter_years_by_decade};
pub use selection::{CascadeLevel, CascadeSelection, FortuneCascade};
pub use types::{CurrentPeriods, FortuneKind, FortunePeriod, FortuneSource};
