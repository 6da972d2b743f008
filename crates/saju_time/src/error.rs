//! Error types for civil time handling.

use thiserror::Error;

/// Errors from date construction, parsing, or offset validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day/hour/minute combination does not name a real instant.
    #[error("invalid date: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    /// UTC offset beyond ±18 hours.
    #[error("timezone offset out of range: {0} minutes")]
    OffsetOutOfRange(i32),
    /// Text could not be parsed as a local date/time.
    #[error("cannot parse date/time '{input}': {reason}")]
    Parse { input: String, reason: String },
    /// Unix timestamp outside the representable calendar range.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}
