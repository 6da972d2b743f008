//! Which decade a person is in for a given calendar year.

use super::types::FortunePeriod;

/// Decade containing `base_year` for someone born in `birth_year`.
///
/// Age counts from 1 in the birth year; each decade spans ten ages. Years
/// before birth pick the first decade and ages beyond the list pick the last.
pub fn pick_current_decade(
    decades: &[FortunePeriod],
    birth_year: i32,
    base_year: i32,
) -> Option<&FortunePeriod> {
    let last = decades.len().checked_sub(1)?;
    let age = (i64::from(base_year) - i64::from(birth_year) + 1).max(1);
    let idx = usize::try_from((age - 1) / 10).unwrap_or(usize::MAX);
    decades.get(idx.min(last))
}
