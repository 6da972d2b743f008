//! Error types for chart derivation and the fortune cascade.
//!
//! Most derivations never fail: an unresolvable glyph or unknown day master
//! surfaces as `None`. These errors cover caller mistakes (out-of-range
//! selection, malformed documents) and oracle failures.

use saju_time::TimeError;
use thiserror::Error;

use crate::fortune::CascadeLevel;

/// Errors from chart documents, cascade configuration, and selection.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Selection beyond the current candidate list of a cascade level.
    #[error("{level} selection {index} out of range (have {len})")]
    SelectionOutOfRange {
        level: CascadeLevel,
        index: usize,
        len: usize,
    },
    /// Chart document could not be decoded.
    #[error("chart document error: {0}")]
    Document(String),
    #[error("invalid cascade config: {0}")]
    InvalidConfig(&'static str),
}

impl From<serde_json::Error> for SajuError {
    fn from(e: serde_json::Error) -> Self {
        Self::Document(e.to_string())
    }
}

/// Errors reported by a [`crate::PillarOracle`] for a single seed date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OracleError {
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// The seed lies outside the range the oracle can compute.
    #[error("date out of supported range: {0}")]
    OutOfRange(String),
    /// Backing service or table unavailable.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
    /// Request parameters the oracle refuses before computing anything.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
