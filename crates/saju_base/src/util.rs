//! Shared helpers for cyclic index arithmetic.

/// Mathematical (always non-negative) modulus of `value` by `n`, as a table index.
///
/// `n` is a table length (5, 10, 12 or 60), so the result always fits in `u8`.
pub const fn cyclic(value: i64, n: u8) -> u8 {
    value.rem_euclid(n as i64) as u8
}

/// Convert an untrusted integer into an index below `len`.
pub fn checked_index(value: i64, len: usize) -> Option<u8> {
    if value >= 0 && (value as u64) < len as u64 {
        Some(value as u8)
    } else {
        None
    }
}
