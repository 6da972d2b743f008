//! Fixed UTC offsets.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Korea Standard Time, UTC+09:00.
pub const KST_OFFSET_MINUTES: i32 = 9 * 60;

/// Largest accepted offset magnitude (18 hours).
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// A validated fixed offset from UTC in whole minutes (east positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct TzOffset(i32);

impl TzOffset {
    pub const KST: Self = Self(KST_OFFSET_MINUTES);
    pub const UTC: Self = Self(0);

    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(TimeError::OffsetOutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    pub const fn minutes(self) -> i32 {
        self.0
    }

    pub const fn seconds(self) -> i64 {
        self.0 as i64 * 60
    }
}

impl Default for TzOffset {
    fn default() -> Self {
        Self::KST
    }
}

impl TryFrom<i32> for TzOffset {
    type Error = TimeError;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<TzOffset> for i32 {
    fn from(offset: TzOffset) -> Self {
        offset.0
    }
}

impl std::fmt::Display for TzOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}
