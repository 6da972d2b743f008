//! Reconcile a child list against the selected parent period.
//!
//! Each filter narrows by the most specific key the parent carries, falls
//! back to coarser keys, and finally returns the list unfiltered so a
//! mismatched document never hides every candidate.

use super::types::FortunePeriod;

/// The list if non-empty, else the single current period, else nothing.
///
/// An empty result is not an error; renderers show a placeholder row.
pub fn display_items(list: &[FortunePeriod], current: Option<&FortunePeriod>) -> Vec<FortunePeriod> {
    if !list.is_empty() {
        return list.to_vec();
    }
    current.cloned().into_iter().collect()
}

fn keep<F>(list: &[FortunePeriod], pred: F) -> Option<Vec<FortunePeriod>>
where
    F: Fn(&FortunePeriod) -> bool,
{
    let out: Vec<FortunePeriod> = list.iter().filter(|p| pred(p)).cloned().collect();
    if out.is_empty() { None } else { Some(out) }
}

/// Years under a decade: by calendar year within the decade's span, then by
/// starting age within the decade's age range.
pub fn filter_years_by_decade(list: &[FortunePeriod], decade: Option<&FortunePeriod>) -> Vec<FortunePeriod> {
    let Some(decade) = decade else {
        return list.to_vec();
    };
    if list.is_empty() {
        return Vec::new();
    }
    if let Some(start) = decade.start_year {
        let span = match (decade.age_from, decade.age_to) {
            (Some(from), Some(to)) => to.saturating_sub(from).max(0),
            _ => 9,
        };
        let end = start.saturating_add(span);
        if let Some(hit) = keep(list, |p| p.year.is_some_and(|y| (start..=end).contains(&y))) {
            return hit;
        }
    }
    if let (Some(from), Some(to)) = (decade.age_from, decade.age_to) {
        if let Some(hit) = keep(list, |p| p.age_from.is_some_and(|a| (from..=to).contains(&a))) {
            return hit;
        }
    }
    list.to_vec()
}

/// Months under a year: exact calendar year.
pub fn filter_months_by_year(list: &[FortunePeriod], year: Option<&FortunePeriod>) -> Vec<FortunePeriod> {
    let Some(parent) = year else {
        return list.to_vec();
    };
    if let Some(y) = parent.year {
        if let Some(hit) = keep(list, |p| p.year == Some(y)) {
            return hit;
        }
    }
    list.to_vec()
}

/// Days under a month: (year, month), then year alone, then month alone.
pub fn filter_days_by_month(list: &[FortunePeriod], month: Option<&FortunePeriod>) -> Vec<FortunePeriod> {
    let Some(parent) = month else {
        return list.to_vec();
    };
    if let (Some(y), Some(m)) = (parent.year, parent.month) {
        if let Some(hit) = keep(list, |p| p.year == Some(y) && p.month == Some(m)) {
            return hit;
        }
    }
    if let Some(y) = parent.year {
        if let Some(hit) = keep(list, |p| p.year == Some(y)) {
            return hit;
        }
    }
    if let Some(m) = parent.month {
        if let Some(hit) = keep(list, |p| p.month == Some(m)) {
            return hit;
        }
    }
    list.to_vec()
}
