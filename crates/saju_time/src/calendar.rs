//! Gregorian month lengths.

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Returns 31 for a non-positive year or a month outside 1..=12, so callers
/// that clamp against it never shrink a day they cannot validate.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if year <= 0 {
        return 31;
    }
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Clamp a day-of-month into `[1, days_in_month(year, month)]`.
pub const fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    if day < 1 {
        return 1;
    }
    let max = days_in_month(year, month);
    if day > max { max } else { day }
}
