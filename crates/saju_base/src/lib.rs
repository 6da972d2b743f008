//! Four Pillars (saju) derivation core.
//!
//! This crate provides:
//! - Symbol tables for the 10 stems and 12 branches, with a glyph resolver for both scripts
//! - Relational attributes against a day master: Ten Gods, Twelve Fates, hidden stems
//! - Sexagenary cycle helpers (cycle index, nayin, void branches)
//! - Chart assembly from structured documents or raw glyph records
//! - The fortune cascade: decade → year → month → day periods, synthesized through a
//!   [`PillarOracle`] when not supplied, with filtering and a selection state machine
//!
//! Nothing here computes calendars. Turning an instant into pillars is the
//! job of a [`PillarOracle`] implementation.

pub mod attributes;
pub mod balance;
pub mod branch;
pub mod chart;
pub mod document;
pub mod element;
pub mod error;
pub mod fortune;
pub mod glyph;
pub mod hidden_stem;
pub mod oracle;
pub mod pillar;
pub mod sexagenary;
pub mod stem;
pub mod ten_god;
pub mod twelve_fate;
pub mod util;

pub use attributes::{GanjiAttributes, GlyphAttributes, ganji_attributes};
pub use balance::ElementBalance;
pub use branch::{ALL_BRANCHES, BRANCH_TABLE, Branch};
pub use chart::{Chart, PillarDetail, PillarOrder, Script, format_pillars_text, resolve_day_master};
pub use document::{ChartDocument, GlyphPillars, RawFortunePeriod, RawPillar};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::{OracleError, SajuError};
pub use fortune::{
    CascadeConfig, CascadeGenerator, CascadeLevel, CascadeSelection, CurrentPeriods, FortuneCascade,
    FortuneKind, FortunePeriod, FortuneSource, display_items, filter_days_by_month,
    filter_months_by_year, filter_years_by_decade, pick_current_decade,
};
pub use glyph::{GlyphInfo, GlyphKind, resolve_branch, resolve_index, resolve_stem};
pub use hidden_stem::{AnnotatedHiddenStem, HiddenStemEntry, annotated_hidden_stems, hidden_stems};
pub use oracle::{FnOracle, OraclePillars, PillarOracle};
pub use pillar::{ALL_SLOTS, FourPillars, Pillar, PillarSlot};
pub use sexagenary::{is_valid_pair, nayin, pillar_from_cycle, sexagenary_index, void_branches};
pub use stem::{ALL_STEMS, STEM_TABLE, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, TenGodGroup, branch_ten_god, stem_ten_god, ten_god_by_target};
pub use twelve_fate::{ALL_TWELVE_FATES, TwelveFate, twelve_fate};
