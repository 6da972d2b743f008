//! Memoizing oracle wrapper.
//!
//! The cascade recomputes whole candidate lists on every selection change,
//! so the same seeds come back repeatedly. `CachedOracle` remembers each
//! result, errors included, keyed by the local seed. It is single-owner
//! (`RefCell`), like the cascade that drives it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use saju_base::{OracleError, OraclePillars, PillarOracle};
use saju_time::LocalDateTime;
use tracing::trace;

type Entry = Result<OraclePillars, OracleError>;

/// Unbounded memo over an inner oracle.
///
/// Entries live as long as the wrapper. Long-lived owners should call
/// [`CachedOracle::clear`] between charts or periodically.
pub struct CachedOracle<O> {
    inner: O,
    cache: RefCell<HashMap<LocalDateTime, Entry>>,
    hits: Cell<u64>,
}

impl<O: PillarOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }

    /// Number of distinct seeds cached.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
        self.hits.set(0);
    }

    fn lookup(&self, seed: &LocalDateTime) -> Option<Entry> {
        let hit = self.cache.borrow().get(seed).cloned();
        if hit.is_some() {
            self.hits.set(self.hits.get() + 1);
            trace!(%seed, "oracle cache hit");
        }
        hit
    }
}

impl<O: PillarOracle> PillarOracle for CachedOracle<O> {
    fn compute_pillars(&self, seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        if let Some(hit) = self.lookup(seed) {
            return hit;
        }
        let result = self.inner.compute_pillars(seed);
        self.cache.borrow_mut().insert(*seed, result.clone());
        result
    }

    /// Only seeds not yet cached reach the inner oracle, in one batch.
    fn compute_batch(&self, seeds: &[LocalDateTime]) -> Vec<Result<OraclePillars, OracleError>> {
        let mut out: Vec<Option<Entry>> = seeds.iter().map(|s| self.lookup(s)).collect();
        let missing: Vec<LocalDateTime> = seeds
            .iter()
            .zip(&out)
            .filter(|(_, hit)| hit.is_none())
            .map(|(s, _)| *s)
            .collect();
        if !missing.is_empty() {
            let fresh = self.inner.compute_batch(&missing);
            let mut cache = self.cache.borrow_mut();
            for (seed, result) in missing.iter().zip(fresh) {
                cache.insert(*seed, result);
            }
            // Fill from the map so repeated seeds within one batch resolve too.
            for (slot, seed) in out.iter_mut().zip(seeds) {
                if slot.is_none() {
                    *slot = cache.get(seed).cloned();
                }
            }
        }
        out.into_iter()
            .zip(seeds)
            .map(|(r, seed)| {
                r.unwrap_or_else(|| Err(OracleError::Unavailable(format!("no result for {seed}"))))
            })
            .collect()
    }
}
